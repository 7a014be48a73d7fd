// Copyright 2025 the Hoverlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Delegate filter for the shared tooltip singleton.
//!
//! The shared singleton observes an application's whole main view, so it
//! cannot rely on a per-component CSS selector. Instead it scans the ancestor
//! path of each hover event for elements opted into shared tooltips, either
//! by class ([`SHARED_TOOLTIP_CLASS`]) or by an inline text entry in their
//! dataset ([`TOOLTIP_DATA_KEY`]).

use crate::types::{HoverNode, SHARED_TOOLTIP_CLASS, TOOLTIP_DATA_KEY};

/// Find the path element that should trigger the shared tooltip.
///
/// Scans the root→target `path` from index 0 and returns the index of the
/// first element carrying the shared-tooltip class or an inline tooltip
/// dataset entry, or `None` when nothing in the path qualifies.
///
/// The scan runs shallowest-first, so when tooltip-enabled elements nest, the
/// outermost one wins. Innermost-wins is the more common delegation order;
/// this order is kept for compatibility with the observed behavior.
pub fn shared_delegate_filter<N: HoverNode>(path: &[N]) -> Option<usize> {
    path.iter()
        .position(|n| n.has_class(SHARED_TOOLTIP_CLASS) || n.data(TOOLTIP_DATA_KEY).is_some())
}
