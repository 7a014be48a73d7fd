// Copyright 2025 the Hoverlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One application-wide tooltip reconfiguring itself per target.
//!
//! Two elements opt into the shared tooltip: one with a configuration block
//! in the [`ConfigSource`], one with plain inline dataset text. Hovering
//! A → B → A shows the transactional reconfiguration: every override is
//! rolled back before the next target's patch applies.
//!
//! Run:
//! - `cargo run -p hoverlay_demos --example shared_tooltip`

use hoverlay_tooltip::config::ConfigPatch;
use hoverlay_tooltip::shared::{ConfigSource, SharedRegistry};
use hoverlay_tooltip::types::{DelegateEvent, HoverNode, SHARED_TOOLTIP_CLASS, TOOLTIP_DATA_KEY};
use kurbo::Rect;

#[derive(Clone, Debug)]
struct Elem {
    id: u32,
    class: Option<&'static str>,
    tooltip_data: Option<&'static str>,
}

impl Elem {
    fn plain(id: u32) -> Self {
        Self {
            id,
            class: None,
            tooltip_data: None,
        }
    }
}

impl HoverNode for Elem {
    type Id = u32;
    fn id(&self) -> u32 {
        self.id
    }
    fn has_class(&self, class: &str) -> bool {
        self.class == Some(class)
    }
    fn data(&self, key: &str) -> Option<&str> {
        (key == TOOLTIP_DATA_KEY).then_some(self.tooltip_data).flatten()
    }
}

/// Per-target configuration blocks, the `ConfigSource` of this app.
struct AppConfig;

impl ConfigSource<u32> for AppConfig {
    fn tooltip_config(&self, target: &u32) -> Option<ConfigPatch> {
        (*target == 10).then(|| ConfigPatch {
            text: Some(Some("Save your changes".into())),
            css_class: Some(Some("accent".into())),
            ..ConfigPatch::default()
        })
    }
}

fn hover_event(target: &Elem) -> DelegateEvent<Elem> {
    DelegateEvent {
        current_target: target.id,
        path: vec![Elem::plain(1), target.clone()],
        target_bounds: Rect::new(0.0, 0.0, 100.0, 20.0),
    }
}

fn main() {
    // Element A carries a config block; element B only inline text.
    let a = Elem {
        id: 10,
        class: Some(SHARED_TOOLTIP_CLASS),
        tooltip_data: None,
    };
    let b = Elem {
        id: 20,
        class: None,
        tooltip_data: Some("Discard"),
    };

    let mut registry: SharedRegistry<&str, Elem> = SharedRegistry::new();
    let shared = registry.get_or_create("mail-app", 0);

    let mut now = 0;
    for target in [&a, &b, &a] {
        let _ = shared.on_delegate_mouse_enter(&hover_event(target), now, &AppConfig);
        let _ = shared.poll(now + 200);
        println!(
            "hover {:>2}: text={:?} class={:?}",
            target.id,
            shared.props().text,
            shared.props().css_class
        );
        let _ = shared.on_delegate_mouse_leave(&hover_event(target), now + 300);
        let _ = shared.poll(now + 700);
        now += 1_000;
    }

    // Back on A: B's overrides are gone, A's config is in effect again.
    assert_eq!(shared.props().text.as_deref(), Some("Save your changes"));
    assert_eq!(shared.props().css_class.as_deref(), Some("accent"));

    // Application shutdown tears the shared instance down explicitly.
    let _ = registry.dispose(&"mail-app");
    assert!(registry.is_empty());
}
