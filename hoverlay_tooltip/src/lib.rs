// Copyright 2025 the Hoverlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hoverlay Tooltip: a deterministic hover tooltip controller.
//!
//! ## Overview
//!
//! This crate manages when a hover tooltip shows, hides, and force-dismisses.
//! It does not render, lay out, or hit-test anything. Instead, feed it
//! delegated mouse-enter/leave notifications (a resolved target id plus a
//! root→target ancestor path) and poll it with the current time; it returns
//! ordered [`Effect`](crate::types::Effect) sequences — target-over/out
//! notifications and mount/align/unmount commands — that you dispatch against
//! your own overlay primitives.
//!
//! ## Timers
//!
//! Three independent delays drive the state machine (see
//! [`hoverlay_timers`]): show (before a hidden tooltip appears), hide (after
//! the pointer leaves), and dismiss (a safety net that force-hides a visible
//! tooltip so a missed leave event can never pin it open). At most one
//! deadline per name is outstanding at any time; arming replaces, and a show
//! always cancels a stale hide.
//!
//! ## Two deployment shapes
//!
//! - Dedicated: one [`TooltipController`](crate::controller::TooltipController)
//!   per target component, created and destroyed with it.
//! - Shared: one [`SharedTooltip`](crate::shared::SharedTooltip) per
//!   application, held in a [`SharedRegistry`](crate::shared::SharedRegistry),
//!   observing the main view through the
//!   [`shared_delegate_filter`](crate::delegate::shared_delegate_filter) and
//!   transactionally reconfiguring itself (text, styling, delays) for each
//!   hovered target via [`ConfigPatch`](crate::config::ConfigPatch).
//!
//! ## Minimal example
//!
//! ```
//! use hoverlay_tooltip::controller::TooltipController;
//! use hoverlay_tooltip::types::{DelegateEvent, Effect, HoverNode};
//! use kurbo::Rect;
//!
//! // The embedder's path element type.
//! #[derive(Clone, Debug)]
//! struct Elem(u32);
//! impl HoverNode for Elem {
//!     type Id = u32;
//!     fn id(&self) -> u32 { self.0 }
//!     fn has_class(&self, _: &str) -> bool { false }
//!     fn data(&self, _: &str) -> Option<&str> { None }
//! }
//!
//! let mut tip: TooltipController<Elem> = TooltipController::new(0);
//! let event = DelegateEvent {
//!     current_target: 7,
//!     path: vec![Elem(1), Elem(7)],
//!     target_bounds: Rect::new(0.0, 0.0, 80.0, 20.0),
//! };
//!
//! // Enter at t=0: show is scheduled for t=200 (the default show delay).
//! let effects = tip.on_delegate_mouse_enter(&event, 0);
//! assert_eq!(effects, vec![Effect::TargetOver { target: 7 }]);
//! assert_eq!(tip.next_deadline(), Some(200));
//!
//! // The timer fires: mount, then align with the 10-unit margin.
//! let effects = tip.poll(200);
//! assert!(matches!(effects[0], Effect::Mount));
//! assert!(matches!(effects[1], Effect::Align { margin, .. } if margin == 10.0));
//! ```
//!
//! ## Determinism
//!
//! Single-threaded and event-driven: all mutation happens inside the handler
//! and poll calls, time is an absolute millisecond value you pass in, and
//! outputs are plain values. Tests substitute a virtual clock by simply
//! choosing the timestamps.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod align;
pub mod config;
pub mod controller;
pub mod delegate;
pub mod shared;
pub mod types;

#[cfg(test)]
mod testing;
