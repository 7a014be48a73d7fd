// Copyright 2025 the Hoverlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A dedicated tooltip walked through a hover timeline.
//!
//! This example drives a [`TooltipController`] with a virtual clock through
//! enter, leave, and re-enter, printing the effect sequence the embedder
//! would dispatch at each step.
//!
//! Run:
//! - `cargo run -p hoverlay_demos --example tooltip_timeline`

use hoverlay_tooltip::align::{Placement, aligned_origin};
use hoverlay_tooltip::controller::TooltipController;
use hoverlay_tooltip::types::{DelegateEvent, Effect, HoverNode};
use kurbo::{Rect, Size};

#[derive(Clone, Debug)]
struct Elem(u32);

impl HoverNode for Elem {
    type Id = u32;
    fn id(&self) -> u32 {
        self.0
    }
    fn has_class(&self, _class: &str) -> bool {
        false
    }
    fn data(&self, _key: &str) -> Option<&str> {
        None
    }
}

fn enter(target: u32) -> DelegateEvent<Elem> {
    DelegateEvent {
        current_target: target,
        path: vec![Elem(1), Elem(target)],
        target_bounds: Rect::new(40.0, 40.0, 160.0, 64.0),
    }
}

fn dispatch(label: &str, effects: &[Effect<u32>]) {
    println!("== {label} ==");
    for effect in effects {
        match effect {
            Effect::Align {
                target,
                bounds,
                margin,
            } => {
                let origin =
                    aligned_origin(*bounds, Size::new(90.0, 24.0), *margin, Placement::Below);
                println!("  align to {target} at {origin:?}");
            }
            other => println!("  {other:?}"),
        }
    }
}

fn main() {
    // Defaults: show 200ms, hide 400ms, dismiss 10s.
    let mut tip: TooltipController<Elem> = TooltipController::new(0);
    let _ = tip.observe(Some(1));

    // t=0: pointer enters the target; a show is scheduled for t=200.
    dispatch("enter t=0", &tip.on_delegate_mouse_enter(&enter(7), 0));
    println!("  next deadline: {:?}", tip.next_deadline());

    // t=200: the show timer fires; the overlay mounts and aligns.
    dispatch("poll t=200", &tip.poll(200));

    // t=300: pointer leaves; a hide is scheduled for t=700.
    dispatch("leave t=300", &tip.on_delegate_mouse_leave(&enter(7), 300));

    // t=500: pointer returns before the hide fires; the hide is cancelled
    // and the tooltip stays mounted with an immediate realign.
    dispatch("re-enter t=500", &tip.on_delegate_mouse_enter(&enter(7), 500));

    // t=700: nothing left to fire at the old hide deadline.
    let quiet = tip.poll(700);
    assert!(quiet.is_empty());
    assert!(tip.mounted());

    // The dismiss safety net eventually force-hides.
    dispatch("poll t=10500", &tip.poll(10_500));
    assert!(!tip.mounted());
}
