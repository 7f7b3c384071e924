//! Whole-form validation.
//!
//! A [`FormSnapshot`] aggregates the three [`FieldState`]s of one submit
//! attempt. Every field is validated even after an earlier one fails, so all
//! issues are reported at once; the snapshot then decides whether the form
//! may be submitted and which field should receive focus.

use contactform_core::FieldError;

use crate::fields::{Field, FieldState};

/// The state of all three fields at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    /// State of the name field.
    pub name: FieldState,
    /// State of the email field.
    pub email: FieldState,
    /// State of the message field.
    pub message: FieldState,
}

impl FormSnapshot {
    /// Validates the three raw values without touching any surface.
    pub fn capture(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: FieldState::capture(Field::Name, name),
            email: FieldState::capture(Field::Email, email),
            message: FieldState::capture(Field::Message, message),
        }
    }

    /// Builds a snapshot from already computed states.
    pub const fn from_states(name: FieldState, email: FieldState, message: FieldState) -> Self {
        Self {
            name,
            email,
            message,
        }
    }

    /// Returns the state for `field`.
    pub const fn get(&self, field: Field) -> &FieldState {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Iterates the states in focus priority order.
    pub fn states(&self) -> impl Iterator<Item = &FieldState> {
        Field::ALL.into_iter().map(|f| self.get(f))
    }

    /// Returns `true` if all three fields are valid.
    pub fn is_submittable(&self) -> bool {
        self.states().all(FieldState::is_valid)
    }

    /// Returns the first invalid field in order name, email, message.
    pub fn first_invalid(&self) -> Option<Field> {
        self.states().find(|s| !s.is_valid()).map(|s| s.field)
    }

    /// Returns every failure, in focus priority order.
    pub fn errors(&self) -> Vec<FieldError> {
        self.states().filter_map(FieldState::error).collect()
    }
}
