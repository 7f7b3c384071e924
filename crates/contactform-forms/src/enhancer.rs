//! Optional affordances layered on top of the form.
//!
//! The [`InteractionEnhancer`] adds a character counter for the message
//! field, accessibility attributes, and keyboard shortcuts. None of this
//! affects validation; the enhancer never talks to the controller directly.
//! Shortcuts are reported as a [`ShortcutAction`] that the caller routes
//! like any other form event.

use contactform_core::settings::CounterSettings;
use serde::{Deserialize, Serialize};

use crate::fields::Field;
use crate::surface::PresentationSurface;

/// Color band of the character counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CounterTone {
    /// At or below the warning threshold.
    Default,
    /// Above the warning threshold, at or below the danger threshold.
    Warning,
    /// Above the danger threshold.
    Danger,
}

/// Picks the counter tone for `count`.
///
/// # Examples
///
/// ```
/// use contactform_core::settings::CounterSettings;
/// use contactform_forms::enhancer::{counter_tone, CounterTone};
///
/// let counter = CounterSettings::default();
/// assert_eq!(counter_tone(750, &counter), CounterTone::Default);
/// assert_eq!(counter_tone(751, &counter), CounterTone::Warning);
/// assert_eq!(counter_tone(900, &counter), CounterTone::Warning);
/// assert_eq!(counter_tone(901, &counter), CounterTone::Danger);
/// ```
pub const fn counter_tone(count: usize, counter: &CounterSettings) -> CounterTone {
    if count > counter.danger_above {
        CounterTone::Danger
    } else if count > counter.warning_above {
        CounterTone::Warning
    } else {
        CounterTone::Default
    }
}

/// A key press as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KeyPress {
    /// The key value (e.g. "Enter", "Escape", "a").
    pub key: String,
    /// Whether Control was held.
    #[serde(default)]
    pub ctrl: bool,
    /// Whether Meta (Cmd) was held.
    #[serde(default)]
    pub meta: bool,
}

impl KeyPress {
    /// Creates a key press without modifiers.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    /// Sets the Control modifier.
    #[must_use]
    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    /// Sets the Meta modifier.
    #[must_use]
    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }
}

/// What a keyboard shortcut asks the form to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShortcutAction {
    /// Ctrl/Cmd+Enter: go through the submit path. The key's default action
    /// is suppressed.
    Submit,
    /// Escape: behave like a click on the reset control.
    Reset,
}

/// Character counter, accessibility, and keyboard shortcuts.
#[derive(Debug, Clone)]
pub struct InteractionEnhancer {
    counter: CounterSettings,
}

impl InteractionEnhancer {
    /// The field the character counter tracks.
    pub const COUNTED_FIELD: Field = Field::Message;

    /// Creates an enhancer with the given counter configuration.
    pub const fn new(counter: CounterSettings) -> Self {
        Self { counter }
    }

    /// Returns the counter configuration.
    pub const fn counter(&self) -> &CounterSettings {
        &self.counter
    }

    /// Installs the counter and the accessibility attributes.
    pub fn install(&self, surface: &mut dyn PresentationSurface) {
        surface.mount_counter(
            Self::COUNTED_FIELD,
            self.counter.limit,
            &self.counter.default_color,
        );
        self.improve_accessibility(surface);
    }

    /// Links each field to its error element and marks targeted labels as required.
    pub fn improve_accessibility(&self, surface: &mut dyn PresentationSurface) {
        for field in Field::ALL {
            surface.set_field_attribute(field, "aria-describedby", field.error_id());
        }

        for label in surface.labels() {
            if label.html_for.is_some() {
                surface.set_label_attribute(label.index, "aria-required", "true");
            }
        }
    }

    /// Handles an input event on `field`. Only the counted field updates the counter.
    pub fn on_input(&self, surface: &mut dyn PresentationSurface, field: Field) {
        if field != Self::COUNTED_FIELD {
            return;
        }
        let count = surface.value(field).chars().count();
        let color = self.color_for(counter_tone(count, &self.counter));
        surface.update_counter(count, color);
    }

    /// Returns the configured color for `tone`.
    pub fn color_for(&self, tone: CounterTone) -> &str {
        match tone {
            CounterTone::Default => &self.counter.default_color,
            CounterTone::Warning => &self.counter.warning_color,
            CounterTone::Danger => &self.counter.danger_color,
        }
    }

    /// Maps a key press to a shortcut, if it is one.
    pub fn handle_key(&self, key: &KeyPress) -> Option<ShortcutAction> {
        if (key.ctrl || key.meta) && key.key == "Enter" {
            return Some(ShortcutAction::Submit);
        }
        if key.key == "Escape" {
            return Some(ShortcutAction::Reset);
        }
        None
    }
}

impl Default for InteractionEnhancer {
    fn default() -> Self {
        Self::new(CounterSettings::default())
    }
}
