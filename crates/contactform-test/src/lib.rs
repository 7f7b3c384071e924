//! # contactform-test
//!
//! Testing utilities for contactform-rs. Provides an in-memory
//! [`FakeSurface`](surface::FakeSurface) that records everything the
//! controller and enhancer render, a [`ScriptedConfirm`](confirm::ScriptedConfirm)
//! that answers confirmation prompts from a script, and helpers for building
//! a form wired to a manual scheduler.

pub mod confirm;
pub mod surface;

use contactform_core::Settings;
use contactform_forms::{ContactForm, ManualScheduler};

pub use confirm::ScriptedConfirm;
pub use surface::{FakeCounter, FakeLabel, FakeSurface};

/// A contact form driven by a virtual clock.
pub type TestForm = ContactForm<FakeSurface, ManualScheduler, ScriptedConfirm>;

/// Builds a [`TestForm`] with default settings, a standard surface, and a
/// prompt that confirms everything.
///
/// Returns the form and a handle to its confirmation prompt.
pub fn test_form() -> (TestForm, ScriptedConfirm) {
    test_form_with(Settings::default(), ScriptedConfirm::new(true))
}

/// Builds a [`TestForm`] with the given settings and prompt.
///
/// Returns the form and a second handle sharing state with `confirm`.
pub fn test_form_with(settings: Settings, confirm: ScriptedConfirm) -> (TestForm, ScriptedConfirm) {
    let handle = confirm.clone();
    let form = ContactForm::new(
        settings,
        FakeSurface::new(),
        ManualScheduler::new(),
        confirm,
    );
    (form, handle)
}

/// Installs a test-friendly tracing subscriber writing to the test output.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_test_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init()
        .ok();
}
