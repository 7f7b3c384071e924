//! Field rules and per-field validation state.
//!
//! The three validators are pure functions over the current text of a field.
//! Each trims the value first and counts characters, not bytes. Rules are
//! checked in a fixed order and the first failing rule wins.
//!
//! [`FieldState`] captures a single validation pass: the raw text, its trimmed
//! form, and the outcome. It is recomputed from the surface on every
//! validation and never cached between passes.

use once_cell::sync::Lazy;
use regex::Regex;

pub use contactform_core::Field;
use contactform_core::{FieldError, ValidationErrorKind};

/// Minimum trimmed length of a name.
pub const NAME_MIN_LENGTH: usize = 2;
/// Maximum length of an email address.
pub const EMAIL_MAX_LENGTH: usize = 254;
/// Minimum trimmed length of a message.
pub const MESSAGE_MIN_LENGTH: usize = 10;
/// Maximum trimmed length of a message.
pub const MESSAGE_MAX_LENGTH: usize = 1000;

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z\s'-]+$").expect("valid name regex"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}$").expect("valid email regex")
});

/// Validates a name.
///
/// Fails with `Required` when blank, `TooShort` below two characters, and
/// `InvalidCharacters` for anything other than letters, whitespace, hyphens,
/// and apostrophes.
///
/// # Examples
///
/// ```
/// use contactform_forms::fields::validate_name;
///
/// assert!(validate_name("  Mary-Jane O'Neil ").is_ok());
/// assert!(validate_name("R2D2").is_err());
/// ```
pub fn validate_name(value: &str) -> Result<(), FieldError> {
    let name = value.trim();
    let fail = |kind| Err(FieldError::new(Field::Name, kind));

    if name.is_empty() {
        return fail(ValidationErrorKind::Required);
    }
    if name.chars().count() < NAME_MIN_LENGTH {
        return fail(ValidationErrorKind::TooShort);
    }
    if !NAME_RE.is_match(name) {
        return fail(ValidationErrorKind::InvalidCharacters);
    }
    Ok(())
}

/// Validates an email address.
///
/// The format check runs before the length check, so an over-long address
/// is only reported as `TooLong` when it is otherwise well formed.
pub fn validate_email(value: &str) -> Result<(), FieldError> {
    let email = value.trim();
    let fail = |kind| Err(FieldError::new(Field::Email, kind));

    if email.is_empty() {
        return fail(ValidationErrorKind::Required);
    }
    if !EMAIL_RE.is_match(email) {
        return fail(ValidationErrorKind::InvalidFormat);
    }
    if email.chars().count() > EMAIL_MAX_LENGTH {
        return fail(ValidationErrorKind::TooLong);
    }
    Ok(())
}

/// Validates a message body. Valid iff the trimmed length is in `[10, 1000]`.
pub fn validate_message(value: &str) -> Result<(), FieldError> {
    let message = value.trim();
    let fail = |kind| Err(FieldError::new(Field::Message, kind));

    if message.is_empty() {
        return fail(ValidationErrorKind::Required);
    }
    let length = message.chars().count();
    if length < MESSAGE_MIN_LENGTH {
        return fail(ValidationErrorKind::TooShort);
    }
    if length > MESSAGE_MAX_LENGTH {
        return fail(ValidationErrorKind::TooLong);
    }
    Ok(())
}

/// Runs the validator belonging to `field`.
pub fn validate(field: Field, value: &str) -> Result<(), FieldError> {
    match field {
        Field::Name => validate_name(value),
        Field::Email => validate_email(value),
        Field::Message => validate_message(value),
    }
}

/// The outcome of validating one field at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    /// The field this state belongs to.
    pub field: Field,
    /// The text as read from the surface.
    pub raw_value: String,
    /// The text with surrounding whitespace removed.
    pub trimmed_value: String,
    /// `Ok(())` when every rule passed, otherwise the first failure.
    pub outcome: Result<(), FieldError>,
}

impl FieldState {
    /// Validates `raw` as the value of `field`.
    pub fn capture(field: Field, raw: impl Into<String>) -> Self {
        let raw_value = raw.into();
        let trimmed_value = raw_value.trim().to_string();
        let outcome = validate(field, &raw_value);
        Self {
            field,
            raw_value,
            trimmed_value,
            outcome,
        }
    }

    /// Returns `true` if the value passed every rule.
    pub const fn is_valid(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Returns the failure, if any.
    pub fn error(&self) -> Option<FieldError> {
        self.outcome.err()
    }

    /// Returns the inline error text, if any.
    pub fn error_message(&self) -> Option<&'static str> {
        self.error().map(|e| e.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_of(result: Result<(), FieldError>) -> Option<ValidationErrorKind> {
        result.err().map(|e| e.kind)
    }

    // ── Name ────────────────────────────────────────────────────────

    #[test]
    fn test_name_required() {
        assert_eq!(kind_of(validate_name("")), Some(ValidationErrorKind::Required));
        assert_eq!(kind_of(validate_name("   \t")), Some(ValidationErrorKind::Required));
    }

    #[test]
    fn test_name_too_short() {
        assert_eq!(kind_of(validate_name(" J ")), Some(ValidationErrorKind::TooShort));
        // Length is checked before characters.
        assert_eq!(kind_of(validate_name("7")), Some(ValidationErrorKind::TooShort));
    }

    #[test]
    fn test_name_invalid_characters() {
        for name in ["Jo3", "Ann@", "Zoë", "Li_Wei", "Bob."] {
            assert_eq!(
                kind_of(validate_name(name)),
                Some(ValidationErrorKind::InvalidCharacters),
                "{name}"
            );
        }
    }

    #[test]
    fn test_name_valid() {
        for name in ["Jo", "Mary-Jane", "O'Brien", "Jean Luc", "  Ada Lovelace  "] {
            assert!(validate_name(name).is_ok(), "{name}");
        }
    }

    // ── Email ───────────────────────────────────────────────────────

    #[test]
    fn test_email_required() {
        assert_eq!(kind_of(validate_email(" ")), Some(ValidationErrorKind::Required));
    }

    #[test]
    fn test_email_invalid_format() {
        for email in [
            "plainaddress",
            "a@b",
            "a@b.c",
            "@example.com",
            "jo@example.c0m",
            "jo smith@example.com",
            "jo@exa mple.com",
        ] {
            assert_eq!(
                kind_of(validate_email(email)),
                Some(ValidationErrorKind::InvalidFormat),
                "{email}"
            );
        }
    }

    #[test]
    fn test_email_valid() {
        for email in ["a@b.co", "jo@example.com", "first.last+tag@sub.example.org", " x%y@d-n.io "] {
            assert!(validate_email(email).is_ok(), "{email}");
        }
    }

    #[test]
    fn test_email_too_long() {
        let local = "a".repeat(250);
        let email = format!("{local}@example.com");
        assert_eq!(kind_of(validate_email(&email)), Some(ValidationErrorKind::TooLong));
    }

    #[test]
    fn test_email_length_boundary() {
        // 254 characters exactly: 242 + "@example.com" (12).
        let email = format!("{}@example.com", "a".repeat(242));
        assert_eq!(email.len(), 254);
        assert!(validate_email(&email).is_ok());
    }

    #[test]
    fn test_email_format_checked_before_length() {
        let email = format!("{} @example.com", "a".repeat(300));
        assert_eq!(kind_of(validate_email(&email)), Some(ValidationErrorKind::InvalidFormat));
    }

    // ── Message ─────────────────────────────────────────────────────

    #[test]
    fn test_message_required() {
        assert_eq!(kind_of(validate_message("\n\n")), Some(ValidationErrorKind::Required));
    }

    #[test]
    fn test_message_too_short() {
        assert_eq!(kind_of(validate_message("123456789")), Some(ValidationErrorKind::TooShort));
        assert_eq!(
            kind_of(validate_message("   123456789   ")),
            Some(ValidationErrorKind::TooShort)
        );
    }

    #[test]
    fn test_message_boundaries() {
        assert!(validate_message("1234567890").is_ok());
        assert!(validate_message(&"x".repeat(1000)).is_ok());
        assert_eq!(
            kind_of(validate_message(&"x".repeat(1001))),
            Some(ValidationErrorKind::TooLong)
        );
    }

    #[test]
    fn test_message_counts_characters_not_bytes() {
        assert!(validate_message(&"é".repeat(1000)).is_ok());
        assert!(validate_message(&"日本語".repeat(4)).is_ok());
    }

    #[test]
    fn test_message_astral_characters_count_once() {
        // Each emoji is one char even though it takes two UTF-16 units.
        assert!(validate_message(&"😀".repeat(501)).is_ok());
        assert!(validate_message(&"😀".repeat(1000)).is_ok());
        assert_eq!(
            validate_message(&"😀".repeat(1001)).unwrap_err().kind,
            ValidationErrorKind::TooLong
        );
        assert_eq!(
            validate_name("😀").unwrap_err().kind,
            ValidationErrorKind::TooShort
        );
    }

    // ── Dispatch & state ────────────────────────────────────────────

    #[test]
    fn test_validate_dispatches_by_field() {
        assert_eq!(validate(Field::Name, "").unwrap_err().field, Field::Name);
        assert_eq!(validate(Field::Email, "").unwrap_err().field, Field::Email);
        assert_eq!(validate(Field::Message, "").unwrap_err().field, Field::Message);
    }

    #[test]
    fn test_field_state_capture_valid() {
        let state = FieldState::capture(Field::Name, "  Jo  ");
        assert_eq!(state.raw_value, "  Jo  ");
        assert_eq!(state.trimmed_value, "Jo");
        assert!(state.is_valid());
        assert_eq!(state.error_message(), None);
    }

    #[test]
    fn test_field_state_capture_invalid() {
        let state = FieldState::capture(Field::Email, "nope");
        assert!(!state.is_valid());
        assert_eq!(state.error().unwrap().kind, ValidationErrorKind::InvalidFormat);
        assert_eq!(state.error_message(), Some("Please enter a valid email address"));
    }
}
