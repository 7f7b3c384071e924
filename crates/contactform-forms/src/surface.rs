//! The presentation surface the controller renders into.
//!
//! The controller never looks elements up itself. Everything it reads or
//! writes goes through a [`PresentationSurface`] supplied by the host, which
//! may be a DOM bridge, a terminal UI, or an in-memory double in tests.
//!
//! The blocking yes/no prompt used before resetting is a separate
//! capability, [`Confirm`].

use serde::{Deserialize, Serialize};

use crate::fields::Field;

/// A boolean visual state on a field that drives styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Marker {
    /// The field failed its last validation.
    Error,
    /// The field passed its last validation.
    Valid,
}

/// A `<label>` on the surface, identified by its position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelRef {
    /// Position of the label in document order.
    pub index: usize,
    /// The id of the element the label is for, if any.
    pub html_for: Option<String>,
}

/// Everything the controller and the enhancer need from the rendered form.
///
/// Implementations are mutated from a single thread of control only.
pub trait PresentationSurface {
    /// Returns the current text of `field`.
    fn value(&self, field: Field) -> String;

    /// Sets or clears `marker` on `field`.
    fn set_marker(&mut self, field: Field, marker: Marker, on: bool);

    /// Returns whether `marker` is currently set on `field`.
    fn has_marker(&self, field: Field, marker: Marker) -> bool;

    /// Sets the text of the error element paired with `field`.
    fn set_error_text(&mut self, field: Field, text: &str);

    /// Shows or hides the error element paired with `field`.
    fn set_error_shown(&mut self, field: Field, shown: bool);

    /// Enables or disables the submit control.
    fn set_submit_enabled(&mut self, enabled: bool);

    /// Replaces the submit control's label.
    fn set_submit_label(&mut self, label: &str);

    /// Toggles the submit control's loading indicator.
    fn set_submit_loading(&mut self, loading: bool);

    /// Shows or hides the success notification.
    fn set_success_shown(&mut self, shown: bool);

    /// Returns whether the success notification is visible.
    fn success_shown(&self) -> bool;

    /// Resets every field to empty text.
    fn reset_fields(&mut self);

    /// Moves input focus to `field`.
    fn focus(&mut self, field: Field);

    /// Sets an attribute on the input element of `field`.
    fn set_field_attribute(&mut self, field: Field, name: &str, value: &str);

    /// Lists the labels of the form in document order.
    fn labels(&self) -> Vec<LabelRef>;

    /// Sets an attribute on the label at `index`.
    fn set_label_attribute(&mut self, index: usize, name: &str, value: &str);

    /// Inserts a character counter after `field` showing `0/limit characters`
    /// in `color`.
    fn mount_counter(&mut self, field: Field, limit: usize, color: &str);

    /// Updates the counter's displayed count and text color.
    fn update_counter(&mut self, count: usize, color: &str);
}

/// A blocking yes/no prompt.
pub trait Confirm {
    /// Asks the user `message` and returns `true` on confirmation.
    fn confirm(&mut self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}
