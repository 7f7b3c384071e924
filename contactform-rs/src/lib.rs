//! # contactform-rs
//!
//! Client-side behavior for a contact form: per-field validation with
//! visual feedback, a simulated submission lifecycle with a success
//! notification, a confirmed reset, and keyboard, accessibility, and
//! character-counter enhancements.
//!
//! This is the meta-crate that re-exports the sub-crates. Depend on
//! `contactform-rs` for everything, or on individual crates for
//! finer-grained control.

/// Validation messages, field identifiers, settings, and logging setup.
pub use contactform_core as core;

/// Validators, the form controller, the interaction enhancer, and the
/// presentation-surface seam.
#[cfg(feature = "forms")]
pub use contactform_forms as forms;

/// In-memory surface and scripted prompts for tests.
#[cfg(feature = "testing")]
pub use contactform_test as test;

// Third-party crates a host needs to drive the form.
pub use serde;
pub use serde_json;
pub use tokio;
pub use tracing;
pub use tracing_subscriber;

/// The types most applications need.
#[cfg(feature = "forms")]
pub mod prelude {
    pub use contactform_core::{ContactFormError, ContactFormResult, Field, Settings};
    pub use contactform_forms::{
        run_event_loop, Confirm, ContactForm, DefaultAction, FormEvent, KeyPress,
        PresentationSurface, Scheduler, SubmissionState, TokioScheduler,
    };
}
