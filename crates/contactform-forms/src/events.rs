//! User interaction events delivered by the host.

use serde::{Deserialize, Serialize};

use crate::enhancer::KeyPress;
use crate::fields::Field;

/// An interaction on the presentation surface.
///
/// Events serialize with an internal `type` tag so a host bridge can send
/// them as JSON, e.g. `{"type":"blur","field":"email"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormEvent {
    /// A field lost focus.
    Blur {
        /// The field that lost focus.
        field: Field,
    },
    /// The text of a field changed.
    Input {
        /// The edited field.
        field: Field,
    },
    /// The form was submitted.
    Submit,
    /// The reset control was clicked.
    ResetClick,
    /// A key was pressed anywhere on the page.
    KeyDown(KeyPress),
}

impl FormEvent {
    /// Shorthand for [`FormEvent::Blur`].
    pub const fn blur(field: Field) -> Self {
        Self::Blur { field }
    }

    /// Shorthand for [`FormEvent::Input`].
    pub const fn input(field: Field) -> Self {
        Self::Input { field }
    }
}

/// Whether the host should run its own default action for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultAction {
    /// Let the host proceed as usual.
    Allow,
    /// Suppress the host's native behavior (native submit, native reset, ...).
    Prevent,
}

impl DefaultAction {
    /// Returns `true` for [`DefaultAction::Prevent`].
    pub const fn is_prevented(self) -> bool {
        matches!(self, Self::Prevent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blur_json() {
        let json = serde_json::to_string(&FormEvent::blur(Field::Email)).unwrap();
        assert_eq!(json, r#"{"type":"blur","field":"email"}"#);
    }

    #[test]
    fn test_unit_variants_json() {
        let event: FormEvent = serde_json::from_str(r#"{"type":"reset_click"}"#).unwrap();
        assert_eq!(event, FormEvent::ResetClick);
        let event: FormEvent = serde_json::from_str(r#"{"type":"submit"}"#).unwrap();
        assert_eq!(event, FormEvent::Submit);
    }

    #[test]
    fn test_key_down_json() {
        let event: FormEvent =
            serde_json::from_str(r#"{"type":"key_down","key":"Enter","ctrl":true}"#).unwrap();
        assert_eq!(event, FormEvent::KeyDown(KeyPress::new("Enter").with_ctrl()));
    }

    #[test]
    fn test_default_action() {
        assert!(DefaultAction::Prevent.is_prevented());
        assert!(!DefaultAction::Allow.is_prevented());
    }
}
