//! # contactform-core
//!
//! Core types, settings, and error types for contactform-rs.
//! This crate has no UI dependencies and provides the foundation for the
//! form controller and its test doubles.
//!
//! ## Modules
//!
//! - [`error`] - Validation error taxonomy and the crate-level error type
//! - [`field`] - The three contact form fields and their element ids
//! - [`settings`] - Timing, label, and counter configuration
//! - [`settings_loader`] - Loading settings from TOML, JSON, and the environment
//! - [`logging`] - Tracing-based logging integration

pub mod error;
pub mod field;
pub mod logging;
pub mod settings;
pub mod settings_loader;

// Re-export the most commonly used types at the crate root.
pub use error::{ContactFormError, ContactFormResult, FieldError, ValidationErrorKind};
pub use field::Field;
pub use settings::Settings;
