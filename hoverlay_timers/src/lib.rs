// Copyright 2025 the Hoverlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hoverlay Timers: named delay timers for hover-driven overlays.
//!
//! ## Overview
//!
//! A tooltip controller juggles three independent delays: one before showing,
//! one before hiding, and a dismiss safety net that force-hides a visible
//! overlay after a fixed time. This crate provides the timer discipline for
//! that pattern: a [`TimerSet`] holds at most one absolute-millisecond
//! deadline per [`TimerKind`], arming a kind replaces its previous deadline,
//! and clearing accepts a [`TimerKinds`] set so multiple names can be
//! cancelled in one call without touching the others.
//!
//! ## Time model
//!
//! There is no ambient clock. Deadlines are absolute `u64` milliseconds
//! supplied by the embedder, which makes every consumer deterministic and
//! testable with a virtual clock: pass the timestamps you want, call
//! [`TimerSet::pop_due`] with "now", and observe which timers fire.
//! [`TimerSet::next_deadline`] tells an embedder when to schedule its next
//! wakeup.
//!
//! ## Example
//!
//! ```
//! use hoverlay_timers::{TimerKind, TimerKinds, TimerSet};
//!
//! let mut timers = TimerSet::new();
//! timers.arm(TimerKind::Show, 200);
//! timers.arm(TimerKind::Show, 250); // replaces the earlier deadline
//! timers.arm(TimerKind::Hide, 700);
//!
//! assert_eq!(timers.next_deadline(), Some(250));
//! assert_eq!(timers.pop_due(300), Some(TimerKind::Show));
//! assert_eq!(timers.pop_due(300), None); // hide not due until 700
//!
//! timers.clear(TimerKinds::HIDE | TimerKinds::DISMISS);
//! assert!(timers.armed().is_empty());
//! ```
//!
//! This crate is `no_std` and does not allocate.

#![no_std]

use bitflags::bitflags;

/// The named timers of a hover overlay.
///
/// The three kinds are independent: arming or clearing one never affects the
/// others. [`TimerKind::mask`] converts a kind into the corresponding
/// [`TimerKinds`] bit for set-based operations.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TimerKind {
    /// Delay before a hidden overlay becomes visible.
    Show,
    /// Delay before a visible overlay is hidden after the pointer leaves.
    Hide,
    /// Safety-net delay that force-hides a visible overlay regardless of
    /// further hover activity.
    Dismiss,
}

impl TimerKind {
    /// All kinds, in firing-priority order for equal deadlines.
    pub const ALL: [Self; 3] = [Self::Show, Self::Hide, Self::Dismiss];

    /// The bitflag corresponding to this kind.
    pub const fn mask(self) -> TimerKinds {
        match self {
            Self::Show => TimerKinds::SHOW,
            Self::Hide => TimerKinds::HIDE,
            Self::Dismiss => TimerKinds::DISMISS,
        }
    }

    const fn idx(self) -> usize {
        match self {
            Self::Show => 0,
            Self::Hide => 1,
            Self::Dismiss => 2,
        }
    }
}

bitflags! {
    /// A set of timer names, used for multi-name clears and armed-state queries.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct TimerKinds: u8 {
        /// The show timer.
        const SHOW    = 0b0000_0001;
        /// The hide timer.
        const HIDE    = 0b0000_0010;
        /// The dismiss timer.
        const DISMISS = 0b0000_0100;
    }
}

/// At most one outstanding deadline per timer name.
///
/// Arming a kind that already holds a deadline replaces it, so a caller never
/// has to cancel before rescheduling; this is the structural guard against
/// duplicate pending callbacks. Deadlines are absolute milliseconds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TimerSet {
    deadlines: [Option<u64>; 3],
}

impl TimerSet {
    /// Create a set with no armed timers.
    pub const fn new() -> Self {
        Self {
            deadlines: [None; 3],
        }
    }

    /// Arm `kind` to fire at `deadline_ms`, replacing any existing deadline.
    pub fn arm(&mut self, kind: TimerKind, deadline_ms: u64) {
        self.deadlines[kind.idx()] = Some(deadline_ms);
    }

    /// Clear every kind in `kinds`. A no-op for kinds with no deadline.
    pub fn clear(&mut self, kinds: TimerKinds) {
        for kind in TimerKind::ALL {
            if kinds.contains(kind.mask()) {
                self.deadlines[kind.idx()] = None;
            }
        }
    }

    /// Whether `kind` currently holds a deadline.
    pub fn is_armed(&self, kind: TimerKind) -> bool {
        self.deadlines[kind.idx()].is_some()
    }

    /// The set of currently armed kinds.
    pub fn armed(&self) -> TimerKinds {
        let mut out = TimerKinds::empty();
        for kind in TimerKind::ALL {
            if self.is_armed(kind) {
                out |= kind.mask();
            }
        }
        out
    }

    /// The deadline armed for `kind`, if any.
    pub fn deadline(&self, kind: TimerKind) -> Option<u64> {
        self.deadlines[kind.idx()]
    }

    /// The earliest armed deadline across all kinds, for wakeup scheduling.
    pub fn next_deadline(&self) -> Option<u64> {
        self.deadlines.iter().flatten().copied().min()
    }

    /// Take the earliest timer whose deadline is at or before `now_ms`.
    ///
    /// The returned kind is cleared before this returns, so a handler that
    /// re-arms it sees an empty slot. Equal deadlines fire in
    /// [`TimerKind::ALL`] order. Call in a loop to drain everything due.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<TimerKind> {
        let mut best: Option<(u64, TimerKind)> = None;
        for kind in TimerKind::ALL {
            let Some(deadline) = self.deadlines[kind.idx()] else {
                continue;
            };
            if deadline > now_ms {
                continue;
            }
            // Strict less-than keeps the ALL order for equal deadlines.
            if best.is_none_or(|(d, _)| deadline < d) {
                best = Some((deadline, kind));
            }
        }
        let (_, kind) = best?;
        self.deadlines[kind.idx()] = None;
        Some(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arm_replaces_existing_deadline() {
        let mut t = TimerSet::new();
        t.arm(TimerKind::Show, 100);
        t.arm(TimerKind::Show, 300);
        assert_eq!(t.deadline(TimerKind::Show), Some(300));
        // The old deadline is gone: nothing fires at 100.
        assert_eq!(t.pop_due(200), None);
        assert_eq!(t.pop_due(300), Some(TimerKind::Show));
    }

    #[test]
    fn kinds_are_independent() {
        let mut t = TimerSet::new();
        t.arm(TimerKind::Show, 10);
        t.arm(TimerKind::Hide, 20);
        t.arm(TimerKind::Dismiss, 30);
        t.clear(TimerKinds::HIDE);
        assert!(t.is_armed(TimerKind::Show));
        assert!(!t.is_armed(TimerKind::Hide));
        assert!(t.is_armed(TimerKind::Dismiss));
    }

    #[test]
    fn clear_accepts_a_set_and_ignores_unarmed() {
        let mut t = TimerSet::new();
        t.arm(TimerKind::Dismiss, 50);
        // HIDE is not armed; clearing it anyway is a no-op.
        t.clear(TimerKinds::HIDE | TimerKinds::DISMISS);
        assert_eq!(t.armed(), TimerKinds::empty());
    }

    #[test]
    fn pop_due_returns_earliest_first() {
        let mut t = TimerSet::new();
        t.arm(TimerKind::Dismiss, 5);
        t.arm(TimerKind::Show, 15);
        assert_eq!(t.pop_due(20), Some(TimerKind::Dismiss));
        assert_eq!(t.pop_due(20), Some(TimerKind::Show));
        assert_eq!(t.pop_due(20), None);
    }

    #[test]
    fn pop_due_tie_breaks_in_all_order() {
        let mut t = TimerSet::new();
        t.arm(TimerKind::Hide, 40);
        t.arm(TimerKind::Show, 40);
        assert_eq!(t.pop_due(40), Some(TimerKind::Show));
        assert_eq!(t.pop_due(40), Some(TimerKind::Hide));
    }

    #[test]
    fn pop_due_ignores_future_deadlines() {
        let mut t = TimerSet::new();
        t.arm(TimerKind::Show, 100);
        assert_eq!(t.pop_due(99), None);
        assert!(t.is_armed(TimerKind::Show));
        assert_eq!(t.pop_due(100), Some(TimerKind::Show));
    }

    #[test]
    fn next_deadline_is_minimum_across_kinds() {
        let mut t = TimerSet::new();
        assert_eq!(t.next_deadline(), None);
        t.arm(TimerKind::Dismiss, 10_000);
        t.arm(TimerKind::Hide, 700);
        assert_eq!(t.next_deadline(), Some(700));
        t.clear(TimerKinds::HIDE);
        assert_eq!(t.next_deadline(), Some(10_000));
    }

    #[test]
    fn popped_kind_is_cleared_before_handler_runs() {
        let mut t = TimerSet::new();
        t.arm(TimerKind::Show, 10);
        let fired = t.pop_due(10).unwrap();
        assert_eq!(fired, TimerKind::Show);
        // Slot is free for an immediate re-arm.
        assert!(!t.is_armed(TimerKind::Show));
        t.arm(TimerKind::Show, 20);
        assert_eq!(t.deadline(TimerKind::Show), Some(20));
    }
}
