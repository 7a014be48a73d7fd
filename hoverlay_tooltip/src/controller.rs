// Copyright 2025 the Hoverlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controller implementation.
//!
//! ## Overview
//!
//! Tracks the hovered delegate target, arms and clears the show/hide/dismiss
//! timers, and emits [`Effect`] sequences for the embedder to dispatch.
//!
//! ## Event flow
//!
//! - [`TooltipController::on_delegate_mouse_enter`] /
//!   [`TooltipController::on_delegate_mouse_leave`] receive delegated hover
//!   notifications for the observed component.
//! - [`TooltipController::on_overlay_mouse_enter`] /
//!   [`TooltipController::on_overlay_mouse_leave`] receive hover notifications
//!   for the overlay element itself (stay-on-hover).
//! - [`TooltipController::poll`] fires due timers;
//!   [`TooltipController::next_deadline`] tells the embedder when to wake up.
//!
//! All mutation happens inside these calls. There is no ambient clock and no
//! locking; the one-deadline-per-name rule in [`TimerSet`] is the sole
//! re-entrancy control.

use alloc::vec::Vec;

use hoverlay_timers::{TimerKind, TimerKinds, TimerSet};
use kurbo::Rect;

use crate::types::{
    Delegate, DelegateEvent, Effect, HoverNode, TARGET_MARGIN, TooltipOptions, TooltipState,
};

/// Hover tooltip controller.
///
/// One instance per dedicated tooltip, created alongside its owning component;
/// the shared per-application variant wraps one in
/// [`SharedTooltip`](crate::shared::SharedTooltip).
///
/// States move `Hidden → PendingShow → Visible → PendingHide → Hidden`, with
/// the dismiss safety net escaping from `Visible` straight back to `Hidden`.
pub struct TooltipController<N: HoverNode> {
    id: N::Id,
    component: Option<N::Id>,
    delegate: Delegate,
    options: TooltipOptions,
    active_target: Option<N::Id>,
    // Target element and bounds for the next alignment.
    align_target: Option<(N::Id, Rect)>,
    timers: TimerSet,
    mounted: bool,
    state: TooltipState,
}

impl<N: HoverNode> core::fmt::Debug for TooltipController<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TooltipController")
            .field("id", &self.id)
            .field("state", &self.state)
            .field("mounted", &self.mounted)
            .field("active_target", &self.active_target)
            .finish_non_exhaustive()
    }
}

impl<N: HoverNode> TooltipController<N> {
    /// Create a controller with default options.
    ///
    /// `id` is the overlay element's identity, compared against `path[0]` of
    /// overlay hover events.
    pub fn new(id: N::Id) -> Self {
        Self::with_options(id, TooltipOptions::default())
    }

    /// Create a controller with explicit options.
    pub fn with_options(id: N::Id, options: TooltipOptions) -> Self {
        Self {
            id,
            component: None,
            delegate: Delegate::None,
            options,
            active_target: None,
            align_target: None,
            timers: TimerSet::new(),
            mounted: false,
            state: TooltipState::Hidden,
        }
    }

    /// The overlay element's identity.
    pub fn id(&self) -> N::Id {
        self.id
    }

    /// The currently observed component, if any.
    pub fn component(&self) -> Option<N::Id> {
        self.component
    }

    /// Observe `component` for delegated hover events.
    ///
    /// Returns the previously observed component so the embedder can detach
    /// its listeners before attaching to the new one.
    pub fn observe(&mut self, component: Option<N::Id>) -> Option<N::Id> {
        core::mem::replace(&mut self.component, component)
    }

    /// The delegate filter restricting which descendants trigger hover.
    pub fn delegate(&self) -> &Delegate {
        &self.delegate
    }

    /// Set the delegate filter.
    pub fn set_delegate(&mut self, delegate: Delegate) {
        self.delegate = delegate;
    }

    /// Current options.
    pub fn options(&self) -> &TooltipOptions {
        &self.options
    }

    /// Mutable options, for reconfiguration.
    pub fn options_mut(&mut self) -> &mut TooltipOptions {
        &mut self.options
    }

    /// Current state.
    pub fn state(&self) -> TooltipState {
        self.state
    }

    /// Whether the overlay is currently mounted.
    pub fn mounted(&self) -> bool {
        self.mounted
    }

    /// The currently hovered delegate target, if any.
    pub fn active_target(&self) -> Option<N::Id> {
        self.active_target
    }

    /// The set of currently armed timers.
    pub fn armed_timers(&self) -> TimerKinds {
        self.timers.armed()
    }

    /// The earliest armed deadline, for scheduling the next [`poll`](Self::poll).
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    /// Delegated mouse-enter on the observed component.
    ///
    /// An event for the already-active target is an internal move within the
    /// same delegate subtree and is ignored, so crossing child boundaries
    /// inside one logical target never flickers. For a new target the
    /// [`Effect::TargetOver`] notification precedes every alignment or mount
    /// effect: a shared-singleton listener reconfigures the instance on it,
    /// and that must be complete before layout runs.
    pub fn on_delegate_mouse_enter(
        &mut self,
        event: &DelegateEvent<N>,
        now_ms: u64,
    ) -> Vec<Effect<N::Id>> {
        self.on_delegate_mouse_enter_with(event, now_ms, |_, _| {})
    }

    /// [`on_delegate_mouse_enter`](Self::on_delegate_mouse_enter) with a
    /// synchronous target-over listener.
    ///
    /// `target_over` runs for a new target after [`Effect::TargetOver`] is
    /// recorded and before any show is scheduled, with mutable access to the
    /// options: a reconfiguration made here (for example new delay values)
    /// applies to this very hover. [`SharedTooltip`](crate::shared::SharedTooltip)
    /// drives its reconfiguration protocol through this hook.
    pub fn on_delegate_mouse_enter_with(
        &mut self,
        event: &DelegateEvent<N>,
        now_ms: u64,
        target_over: impl FnOnce(&DelegateEvent<N>, &mut TooltipOptions),
    ) -> Vec<Effect<N::Id>> {
        if self.active_target == Some(event.current_target) {
            return Vec::new();
        }
        self.active_target = Some(event.current_target);

        let mut out = Vec::new();
        out.push(Effect::TargetOver {
            target: event.current_target,
        });
        target_over(event, &mut self.options);
        self.align_target = Some((event.current_target, event.target_bounds));

        if self.mounted {
            // Still visible from a previous target: no show delay, just
            // realign under the new target.
            self.show_now(now_ms, &mut out);
            out.push(Effect::Align {
                target: event.current_target,
                bounds: event.target_bounds,
                margin: TARGET_MARGIN,
            });
        } else {
            self.show_delayed_into(now_ms, &mut out);
        }
        out
    }

    /// Delegated mouse-leave on the observed component.
    ///
    /// Leave events whose `current_target` is not the tracked target are
    /// stale (rapid pointer movement, nested elements) and ignored.
    pub fn on_delegate_mouse_leave(
        &mut self,
        event: &DelegateEvent<N>,
        now_ms: u64,
    ) -> Vec<Effect<N::Id>> {
        if self.active_target != Some(event.current_target) {
            return Vec::new();
        }
        let mut out = Vec::new();
        out.push(Effect::TargetOut {
            target: event.current_target,
        });
        self.active_target = None;
        self.hide_delayed_into(now_ms, &mut out);
        out
    }

    /// Mouse-enter on the overlay element itself.
    ///
    /// With `stay_on_hover` enabled this cancels the hide and dismiss timers
    /// so the tooltip stays readable under the pointer. Only `path[0]` events
    /// count; bubbling from the overlay's children is ignored.
    pub fn on_overlay_mouse_enter(&mut self, event: &DelegateEvent<N>) {
        if !self.options.stay_on_hover || !self.is_own_surface(event) {
            return;
        }
        self.timers.clear(TimerKinds::HIDE | TimerKinds::DISMISS);
        if self.mounted {
            self.state = TooltipState::Visible;
        }
    }

    /// Mouse-leave on the overlay element itself; schedules a delayed hide.
    pub fn on_overlay_mouse_leave(
        &mut self,
        event: &DelegateEvent<N>,
        now_ms: u64,
    ) -> Vec<Effect<N::Id>> {
        if !self.options.stay_on_hover || !self.is_own_surface(event) {
            return Vec::new();
        }
        let mut out = Vec::new();
        self.hide_delayed_into(now_ms, &mut out);
        out
    }

    /// Instantly show the tooltip.
    ///
    /// Clears any pending hide/dismiss (a show always wins over a stale
    /// hide), arms the dismiss safety net when configured, and mounts the
    /// overlay when it is not already mounted.
    pub fn show(&mut self, now_ms: u64) -> Vec<Effect<N::Id>> {
        let mut out = Vec::new();
        self.show_now(now_ms, &mut out);
        out
    }

    /// Show after the configured show delay, or instantly without one.
    pub fn show_delayed(&mut self, now_ms: u64) -> Vec<Effect<N::Id>> {
        let mut out = Vec::new();
        self.show_delayed_into(now_ms, &mut out);
        out
    }

    /// Instantly hide the tooltip, clearing all three timers unconditionally.
    pub fn hide(&mut self) -> Vec<Effect<N::Id>> {
        let mut out = Vec::new();
        self.hide_now(&mut out);
        out
    }

    /// Hide after the configured hide delay, or instantly without one.
    pub fn hide_delayed(&mut self, now_ms: u64) -> Vec<Effect<N::Id>> {
        let mut out = Vec::new();
        self.hide_delayed_into(now_ms, &mut out);
        out
    }

    /// Fire every timer due at `now_ms`, in deadline order.
    ///
    /// A due show mounts the overlay (and clears a stale hide scheduled for
    /// the same instant); a due hide or dismiss unmounts it.
    pub fn poll(&mut self, now_ms: u64) -> Vec<Effect<N::Id>> {
        let mut out = Vec::new();
        while let Some(kind) = self.timers.pop_due(now_ms) {
            match kind {
                TimerKind::Show => self.show_now(now_ms, &mut out),
                TimerKind::Hide | TimerKind::Dismiss => self.hide_now(&mut out),
            }
        }
        out
    }

    // --- internals ---

    fn is_own_surface(&self, event: &DelegateEvent<N>) -> bool {
        event.path.first().map(HoverNode::id) == Some(self.id)
    }

    fn show_now(&mut self, now_ms: u64, out: &mut Vec<Effect<N::Id>>) {
        self.timers
            .clear(TimerKinds::SHOW | TimerKinds::HIDE | TimerKinds::DISMISS);
        if let Some(delay) = TooltipOptions::effective(self.options.dismiss_delay) {
            self.timers.arm(TimerKind::Dismiss, now_ms + delay);
        }
        if !self.mounted {
            self.mounted = true;
            out.push(Effect::Mount);
            if let Some((target, bounds)) = self.align_target {
                out.push(Effect::Align {
                    target,
                    bounds,
                    margin: TARGET_MARGIN,
                });
            }
        }
        self.state = TooltipState::Visible;
    }

    fn show_delayed_into(&mut self, now_ms: u64, out: &mut Vec<Effect<N::Id>>) {
        if let Some(delay) = TooltipOptions::effective(self.options.show_delay) {
            self.timers.arm(TimerKind::Show, now_ms + delay);
            self.state = TooltipState::PendingShow;
        } else {
            self.show_now(now_ms, out);
        }
    }

    fn hide_now(&mut self, out: &mut Vec<Effect<N::Id>>) {
        self.timers
            .clear(TimerKinds::SHOW | TimerKinds::HIDE | TimerKinds::DISMISS);
        if self.mounted {
            self.mounted = false;
            out.push(Effect::Unmount);
        }
        self.state = TooltipState::Hidden;
    }

    fn hide_delayed_into(&mut self, now_ms: u64, out: &mut Vec<Effect<N::Id>>) {
        if let Some(delay) = TooltipOptions::effective(self.options.hide_delay) {
            self.timers.arm(TimerKind::Hide, now_ms + delay);
            if self.mounted {
                self.state = TooltipState::PendingHide;
            }
        } else {
            self.hide_now(out);
        }
    }
}
