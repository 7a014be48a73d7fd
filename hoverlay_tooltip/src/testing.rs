// Copyright 2025 the Hoverlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Test-only path nodes and event builders shared across unit tests.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use kurbo::Rect;

use crate::types::{DelegateEvent, HoverNode};

/// A minimal capability-bearing path element for tests.
#[derive(Clone, Debug, Default)]
pub(crate) struct TestNode {
    id: u32,
    classes: Vec<String>,
    data: Vec<(String, String)>,
}

impl TestNode {
    pub(crate) fn new(id: u32) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub(crate) fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub(crate) fn with_data(mut self, key: &str, value: &str) -> Self {
        self.data.push((key.to_string(), value.to_string()));
        self
    }
}

impl HoverNode for TestNode {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    fn data(&self, key: &str) -> Option<&str> {
        self.data
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Build a delegate event for `target` with a trivial singleton path.
pub(crate) fn event(target: u32) -> DelegateEvent<TestNode> {
    event_with_path(target, alloc::vec![TestNode::new(target)])
}

/// Build a delegate event for `target` with an explicit root→target path.
pub(crate) fn event_with_path(target: u32, path: Vec<TestNode>) -> DelegateEvent<TestNode> {
    DelegateEvent {
        current_target: target,
        path,
        target_bounds: Rect::new(0.0, 0.0, 120.0, 24.0),
    }
}
