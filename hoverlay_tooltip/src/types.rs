// Copyright 2025 the Hoverlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the tooltip controller: path nodes, events, effects, and options.
//!
//! ## Overview
//!
//! These types describe the controller's boundary. Input arrives as
//! [`DelegateEvent`]s built by the embedder's delegation layer; output leaves
//! as ordered [`Effect`] sequences the embedder dispatches against its own
//! mount/unmount/align primitives.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Rect;

/// Class marking an element as a target of the shared tooltip singleton.
pub const SHARED_TOOLTIP_CLASS: &str = "uses-shared-tooltip";

/// Dataset key carrying an inline tooltip text string.
pub const TOOLTIP_DATA_KEY: &str = "tooltip";

/// Margin, in layout units, between a target and the aligned overlay.
pub const TARGET_MARGIN: f64 = 10.0;

/// A capability-bearing element of an ancestor path.
///
/// The delegation layer reports hover events with a root→target chain of
/// these nodes. The controller never sees a concrete DOM representation; it
/// only needs identity, class membership, and dataset access.
pub trait HoverNode {
    /// Opaque element identity.
    type Id: Copy + Eq + core::fmt::Debug;

    /// The element's identity.
    fn id(&self) -> Self::Id;

    /// Whether the element's class list contains `class`.
    fn has_class(&self, class: &str) -> bool;

    /// The element's dataset value for `key`, if present.
    fn data(&self, key: &str) -> Option<&str>;
}

/// A delegated mouse-enter or mouse-leave notification.
///
/// `current_target` is the delegate element resolved by the delegation layer
/// (not the raw event target), and `path` is the root→target ancestor chain
/// for the raw target. `target_bounds` is the resolved element's world-space
/// rectangle, consumed by alignment.
#[derive(Clone, Debug)]
pub struct DelegateEvent<N: HoverNode> {
    /// Resolved delegate element for this event.
    pub current_target: N::Id,
    /// Root→target ancestor chain, each element with class-list and dataset access.
    pub path: Vec<N>,
    /// World-space bounds of the resolved delegate element.
    pub target_bounds: Rect,
}

/// An output of the controller, in dispatch order.
///
/// [`TargetOver`](Effect::TargetOver) always precedes any
/// [`Align`](Effect::Align) or [`Mount`](Effect::Mount) for the same hover
/// event, so a listener reconfiguring a shared instance is done before layout
/// is computed. `Mount`/`Unmount` are emitted only on actual state changes.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect<K> {
    /// A new hover target was resolved.
    TargetOver {
        /// The newly active target.
        target: K,
    },
    /// The pointer left the active target.
    TargetOut {
        /// The target that was active.
        target: K,
    },
    /// Attach the overlay to the document.
    Mount,
    /// Detach the overlay from the document.
    Unmount,
    /// Reposition the mounted overlay relative to `target`.
    Align {
        /// The element to align against.
        target: K,
        /// World-space bounds of that element.
        bounds: Rect,
        /// Gap between target and overlay, in layout units.
        margin: f64,
    },
}

/// Controller states.
///
/// `Hidden → PendingShow → Visible → PendingHide → Hidden`, with a dismiss
/// escape from `Visible` straight back to `Hidden`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum TooltipState {
    /// Overlay unmounted, no show pending.
    #[default]
    Hidden,
    /// A show timer is armed.
    PendingShow,
    /// Overlay mounted.
    Visible,
    /// Overlay still mounted, a hide timer is armed.
    PendingHide,
}

/// Restricts which descendants of the observed component trigger hover.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum Delegate {
    /// No filtering: every descendant triggers.
    #[default]
    None,
    /// A CSS selector consumed by the delegation layer.
    Selector(String),
    /// Scan the ancestor path for tooltip-enabled elements (see
    /// [`shared_delegate_filter`](crate::delegate::shared_delegate_filter)).
    /// Used by the shared singleton.
    TooltipTargets,
}

/// Delay configuration, in milliseconds.
///
/// For `show_delay` and `hide_delay`, `None` or `Some(0)` means "act
/// immediately, no timer". For `dismiss_delay`, `None` or `Some(0)` disables
/// the force-hide safety net entirely.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TooltipOptions {
    /// Delay before a hidden tooltip is shown.
    pub show_delay: Option<u64>,
    /// Delay before the tooltip is hidden after the pointer leaves.
    pub hide_delay: Option<u64>,
    /// Time after which a visible tooltip force-hides regardless of hover
    /// activity, guarding against missed leave events.
    pub dismiss_delay: Option<u64>,
    /// Keep the tooltip open while the pointer is over the overlay itself.
    pub stay_on_hover: bool,
}

impl Default for TooltipOptions {
    fn default() -> Self {
        Self {
            show_delay: Some(200),
            hide_delay: Some(400),
            dismiss_delay: Some(10_000),
            stay_on_hover: true,
        }
    }
}

impl TooltipOptions {
    /// Normalize a delay value: `Some(0)` counts as disabled.
    pub(crate) fn effective(delay: Option<u64>) -> Option<u64> {
        match delay {
            Some(0) | None => None,
            other => other,
        }
    }
}
