// Copyright 2025 the Hoverlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presentation properties and the reversible configuration patch.
//!
//! ## Overview
//!
//! The shared singleton reconfigures itself on every new hover target: text,
//! styling, and delay behavior all follow the target. Each reconfiguration is
//! a [`ConfigPatch`] — a value object holding only the keys being overridden.
//! [`ConfigPatch::apply`] returns the inverse patch capturing the prior value
//! of exactly those keys, which makes every reconfiguration transactional:
//! applying the inverse restores the pre-override state even though the key
//! set changes between hovers.
//!
//! Patch fields are doubled options: the outer `Option` means "is this key
//! present in the patch", the inner value is what to write (which may itself
//! be `None`, e.g. clearing the text).

use alloc::string::String;

use crate::types::TooltipOptions;

/// Presentation state carried to the overlay descriptor.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TooltipProps {
    /// Text content, rendered as the overlay's single label. `None` renders
    /// an empty overlay.
    pub text: Option<String>,
    /// Extra CSS class applied to the overlay element.
    pub css_class: Option<String>,
}

/// A set of configuration overrides; absent keys are left untouched.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ConfigPatch {
    /// Override for [`TooltipProps::text`].
    pub text: Option<Option<String>>,
    /// Override for [`TooltipProps::css_class`].
    pub css_class: Option<Option<String>>,
    /// Override for [`TooltipOptions::show_delay`].
    pub show_delay: Option<Option<u64>>,
    /// Override for [`TooltipOptions::hide_delay`].
    pub hide_delay: Option<Option<u64>>,
    /// Override for [`TooltipOptions::dismiss_delay`].
    pub dismiss_delay: Option<Option<u64>>,
    /// Override for [`TooltipOptions::stay_on_hover`].
    pub stay_on_hover: Option<bool>,
}

impl ConfigPatch {
    /// A patch setting only the text key.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(Some(text.into())),
            ..Self::default()
        }
    }

    /// Whether the patch touches no keys at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Write every present key into `props`/`options` and return the inverse
    /// patch holding the prior values of exactly those keys.
    pub fn apply(&self, props: &mut TooltipProps, options: &mut TooltipOptions) -> Self {
        let mut undo = Self::default();
        if let Some(text) = &self.text {
            undo.text = Some(core::mem::replace(&mut props.text, text.clone()));
        }
        if let Some(css_class) = &self.css_class {
            undo.css_class = Some(core::mem::replace(&mut props.css_class, css_class.clone()));
        }
        if let Some(show_delay) = self.show_delay {
            undo.show_delay = Some(core::mem::replace(&mut options.show_delay, show_delay));
        }
        if let Some(hide_delay) = self.hide_delay {
            undo.hide_delay = Some(core::mem::replace(&mut options.hide_delay, hide_delay));
        }
        if let Some(dismiss_delay) = self.dismiss_delay {
            undo.dismiss_delay = Some(core::mem::replace(
                &mut options.dismiss_delay,
                dismiss_delay,
            ));
        }
        if let Some(stay_on_hover) = self.stay_on_hover {
            undo.stay_on_hover = Some(core::mem::replace(&mut options.stay_on_hover, stay_on_hover));
        }
        undo
    }
}
