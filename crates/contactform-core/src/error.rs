//! Core error types for contactform-rs.
//!
//! Input validation failures are described by [`FieldError`], which pairs a
//! [`Field`] with a [`ValidationErrorKind`]. They are always recovered locally
//! by rendering inline text next to the offending field.
//!
//! [`ContactFormError`] covers the remaining failure surface, which is limited
//! to loading configuration.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::field::Field;

/// The kind of rule a field value violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorKind {
    /// The value is empty after trimming.
    Required,
    /// The trimmed value is shorter than the field minimum.
    TooShort,
    /// The value is longer than the field maximum.
    TooLong,
    /// The name contains characters other than letters, whitespace, `-` and `'`.
    InvalidCharacters,
    /// The email address does not have the `local@domain.tld` shape.
    InvalidFormat,
}

impl ValidationErrorKind {
    /// Returns a short code identifying this kind (e.g. "required").
    pub const fn code(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::TooShort => "too_short",
            Self::TooLong => "too_long",
            Self::InvalidCharacters => "invalid_characters",
            Self::InvalidFormat => "invalid_format",
        }
    }
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A validation failure for a single field.
///
/// The `Display` output is the inline message shown to the user.
///
/// # Examples
///
/// ```
/// use contactform_core::{Field, FieldError, ValidationErrorKind};
///
/// let err = FieldError::new(Field::Name, ValidationErrorKind::Required);
/// assert_eq!(err.to_string(), "Name is required");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    /// The field that failed validation.
    pub field: Field,
    /// The rule that was violated.
    pub kind: ValidationErrorKind,
}

impl FieldError {
    /// Creates a new `FieldError`.
    pub const fn new(field: Field, kind: ValidationErrorKind) -> Self {
        Self { field, kind }
    }

    /// Returns the user-visible message for this error.
    pub const fn message(&self) -> &'static str {
        use ValidationErrorKind as K;

        match (self.field, self.kind) {
            (Field::Name, K::Required) => "Name is required",
            (Field::Name, K::TooShort) => "Name must be at least 2 characters long",
            (Field::Name, K::InvalidCharacters) => {
                "Name can only contain letters, spaces, hyphens, and apostrophes"
            }
            (Field::Email, K::Required) => "Email is required",
            (Field::Email, K::InvalidFormat) => "Please enter a valid email address",
            (Field::Email, K::TooLong) => "Email address is too long",
            (Field::Message, K::Required) => "Message is required",
            (Field::Message, K::TooShort) => "Message must be at least 10 characters long",
            (Field::Message, K::TooLong) => "Message must be less than 1000 characters",
            // Kinds that no rule of the field produces.
            (_, K::Required) => "This field is required",
            (_, K::TooShort) => "This value is too short",
            (_, K::TooLong) => "This value is too long",
            (_, K::InvalidCharacters) => "This value contains invalid characters",
            (_, K::InvalidFormat) => "This value is not in a valid format",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for FieldError {}

/// The crate-level error type for non-validation failures.
#[derive(Error, Debug)]
pub enum ContactFormError {
    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenience result alias using [`ContactFormError`].
pub type ContactFormResult<T> = Result<T, ContactFormError>;
