// Copyright 2025 the Hoverlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlay placement math.
//!
//! The controller only emits [`Align`](crate::types::Effect::Align) effects
//! carrying the target bounds and margin; turning those into a concrete
//! overlay origin is the embedder's job. This module provides the usual
//! computation for embedders without their own positioning system.

use kurbo::{Point, Rect, Size};

/// Which side of the target the overlay is placed on.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Placement {
    /// Centered below the target.
    #[default]
    Below,
    /// Centered above the target.
    Above,
    /// Centered left of the target.
    Left,
    /// Centered right of the target.
    Right,
}

/// Top-left origin for an overlay of `overlay` size aligned to `target` with
/// a `margin` gap on the given side, centered along the other axis.
pub fn aligned_origin(target: Rect, overlay: Size, margin: f64, placement: Placement) -> Point {
    let center = target.center();
    match placement {
        Placement::Below => Point::new(center.x - overlay.width / 2.0, target.y1 + margin),
        Placement::Above => Point::new(
            center.x - overlay.width / 2.0,
            target.y0 - margin - overlay.height,
        ),
        Placement::Left => Point::new(
            target.x0 - margin - overlay.width,
            center.y - overlay.height / 2.0,
        ),
        Placement::Right => Point::new(target.x1 + margin, center.y - overlay.height / 2.0),
    }
}
