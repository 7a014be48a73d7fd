// Copyright 2025 the Hoverlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The shared per-application tooltip and its registry.
//!
//! ## Overview
//!
//! Instead of one dedicated tooltip per component, an application can run a
//! single [`SharedTooltip`] that observes the main view and reconfigures
//! itself for whichever element is currently hovered. Targets opt in through
//! the shared delegate filter (class marker or inline dataset text, see
//! [`shared_delegate_filter`]); richer per-target configuration comes from a
//! [`ConfigSource`].
//!
//! ## Reconfiguration protocol
//!
//! On every new target, before any alignment:
//! 1. apply the undo patch captured during the previous reconfiguration,
//!    restoring the pre-override values;
//! 2. resolve the new [`ConfigPatch`]: the target's configuration from the
//!    [`ConfigSource`], falling back to the matched path element's inline
//!    tooltip text, falling back to an empty patch (the tooltip then mounts
//!    with no content, which is a caller error rather than a fault here);
//! 3. apply it, capturing the new undo patch.
//!
//! Because the undo patch holds exactly the keys the incoming patch touched,
//! each reconfiguration is exactly reversible even though the key set changes
//! between hovers.
//!
//! ## Registry
//!
//! [`SharedRegistry`] maps application identities to shared instances:
//! created on first request, alive until [`SharedRegistry::dispose`] is
//! called at application shutdown.

use alloc::collections::BTreeMap;
use alloc::string::ToString;
use alloc::vec::Vec;

use crate::config::{ConfigPatch, TooltipProps};
use crate::controller::TooltipController;
use crate::delegate::shared_delegate_filter;
use crate::types::{Delegate, DelegateEvent, Effect, HoverNode, TOOLTIP_DATA_KEY};

/// Per-target tooltip configuration lookup.
///
/// The shared tooltip consults this on every new hover target. Return `None`
/// for targets that only carry inline dataset text (or nothing at all).
pub trait ConfigSource<K> {
    /// The tooltip configuration attached to `target`, if any.
    fn tooltip_config(&self, target: &K) -> Option<ConfigPatch>;
}

/// A source with no per-target configuration; inline text still resolves.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoConfig;

impl<K> ConfigSource<K> for NoConfig {
    fn tooltip_config(&self, _target: &K) -> Option<ConfigPatch> {
        None
    }
}

/// A [`TooltipController`] shared by all tooltip-enabled elements of one
/// application, reconfiguring itself per hovered target.
pub struct SharedTooltip<N: HoverNode> {
    controller: TooltipController<N>,
    props: TooltipProps,
    // Undo patch from the last reconfiguration; applied before the next one.
    reset: ConfigPatch,
}

impl<N: HoverNode> core::fmt::Debug for SharedTooltip<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SharedTooltip")
            .field("controller", &self.controller)
            .field("props", &self.props)
            .field("reset", &self.reset)
            .finish()
    }
}

impl<N: HoverNode> SharedTooltip<N> {
    /// Create a shared tooltip whose overlay element is `id`.
    ///
    /// The controller starts with default options and the
    /// [`Delegate::TooltipTargets`] path filter.
    pub fn new(id: N::Id) -> Self {
        let mut controller = TooltipController::new(id);
        controller.set_delegate(Delegate::TooltipTargets);
        Self {
            controller,
            props: TooltipProps::default(),
            reset: ConfigPatch::default(),
        }
    }

    /// The wrapped controller.
    pub fn controller(&self) -> &TooltipController<N> {
        &self.controller
    }

    /// Mutable access to the wrapped controller.
    pub fn controller_mut(&mut self) -> &mut TooltipController<N> {
        &mut self.controller
    }

    /// Current presentation properties (as last reconfigured).
    pub fn props(&self) -> &TooltipProps {
        &self.props
    }

    /// Delegated mouse-enter; reconfigures for a new target before any
    /// alignment effect is produced.
    pub fn on_delegate_mouse_enter<S: ConfigSource<N::Id>>(
        &mut self,
        event: &DelegateEvent<N>,
        now_ms: u64,
        source: &S,
    ) -> Vec<Effect<N::Id>> {
        let Self {
            controller,
            props,
            reset,
        } = self;
        controller.on_delegate_mouse_enter_with(event, now_ms, |event, options| {
            // Revert the previous target's overrides to the initial settings.
            let _ = core::mem::take(reset).apply(props, options);

            // Prefer the configuration block the target was set up with, then
            // the matched path element's inline tooltip text.
            let patch = source
                .tooltip_config(&event.current_target)
                .or_else(|| {
                    shared_delegate_filter(&event.path)
                        .and_then(|i| event.path[i].data(TOOLTIP_DATA_KEY))
                        .map(|text| ConfigPatch::text(text.to_string()))
                })
                .unwrap_or_default();

            // Cache what the patch overrides, then apply it.
            *reset = patch.apply(props, options);
        })
    }

    /// Delegated mouse-leave; see [`TooltipController::on_delegate_mouse_leave`].
    pub fn on_delegate_mouse_leave(
        &mut self,
        event: &DelegateEvent<N>,
        now_ms: u64,
    ) -> Vec<Effect<N::Id>> {
        self.controller.on_delegate_mouse_leave(event, now_ms)
    }

    /// Overlay mouse-enter; see [`TooltipController::on_overlay_mouse_enter`].
    pub fn on_overlay_mouse_enter(&mut self, event: &DelegateEvent<N>) {
        self.controller.on_overlay_mouse_enter(event);
    }

    /// Overlay mouse-leave; see [`TooltipController::on_overlay_mouse_leave`].
    pub fn on_overlay_mouse_leave(
        &mut self,
        event: &DelegateEvent<N>,
        now_ms: u64,
    ) -> Vec<Effect<N::Id>> {
        self.controller.on_overlay_mouse_leave(event, now_ms)
    }

    /// Fire due timers; see [`TooltipController::poll`].
    pub fn poll(&mut self, now_ms: u64) -> Vec<Effect<N::Id>> {
        self.controller.poll(now_ms)
    }

    /// The earliest armed deadline; see [`TooltipController::next_deadline`].
    pub fn next_deadline(&self) -> Option<u64> {
        self.controller.next_deadline()
    }
}

/// Explicit per-application registry of shared tooltips.
///
/// Entries are created on first request and live until disposed. Embedders
/// should call [`dispose`](Self::dispose) from their application-shutdown
/// path; nothing tears entries down implicitly.
pub struct SharedRegistry<A: Ord, N: HoverNode> {
    entries: BTreeMap<A, SharedTooltip<N>>,
}

impl<A: Ord, N: HoverNode> core::fmt::Debug for SharedRegistry<A, N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SharedRegistry")
            .field("entries", &self.entries.len())
            .finish_non_exhaustive()
    }
}

impl<A: Ord, N: HoverNode> Default for SharedRegistry<A, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Ord, N: HoverNode> SharedRegistry<A, N> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// The shared tooltip for `app`, created with overlay id `overlay_id` on
    /// first request. `overlay_id` is ignored for an existing entry.
    pub fn get_or_create(&mut self, app: A, overlay_id: N::Id) -> &mut SharedTooltip<N> {
        self.entries
            .entry(app)
            .or_insert_with(|| SharedTooltip::new(overlay_id))
    }

    /// The shared tooltip for `app`, if one was created.
    pub fn get(&self, app: &A) -> Option<&SharedTooltip<N>> {
        self.entries.get(app)
    }

    /// Remove and return `app`'s shared tooltip. The application-shutdown
    /// teardown hook.
    pub fn dispose(&mut self, app: &A) -> Option<SharedTooltip<N>> {
        self.entries.remove(app)
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no live entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
