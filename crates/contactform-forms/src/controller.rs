//! The form validation controller.
//!
//! [`FormValidationController`] owns the validation rules, renders their
//! outcome onto the surface, and drives the simulated submit/reset
//! lifecycle. It holds no copy of the field values: every validation reads
//! the surface afresh, so what is rendered always reflects the latest
//! [`FieldState`] of each field.
//!
//! ## Submission lifecycle
//!
//! ```text
//! Idle --valid submit--> Submitting --submit delay--> SucceededVisible
//!   ^                                                      |
//!   +------------- display window / reset / hide ----------+
//! ```

use contactform_core::{FieldError, Settings};
use serde::{Deserialize, Serialize};

use crate::fields::{Field, FieldState};
use crate::scheduler::{Scheduler, TimerTask};
use crate::surface::{Confirm, Marker, PresentationSurface};
use crate::validation::FormSnapshot;

/// Where the form is in its simulated submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionState {
    /// Nothing in flight and no success notification shown.
    #[default]
    Idle,
    /// Waiting for the simulated submission to complete.
    Submitting,
    /// The success notification is visible.
    SucceededVisible,
}

/// Validates fields and drives the submission lifecycle.
///
/// The scheduler and the confirmation prompt are injected; the surface is
/// borrowed per call so that other components can render into it too.
pub struct FormValidationController<T, C> {
    settings: Settings,
    scheduler: T,
    confirm: C,
    state: SubmissionState,
}

impl<T: Scheduler, C: Confirm> FormValidationController<T, C> {
    /// Creates a controller in the `Idle` state.
    pub const fn new(settings: Settings, scheduler: T, confirm: C) -> Self {
        Self {
            settings,
            scheduler,
            confirm,
            state: SubmissionState::Idle,
        }
    }

    /// Returns the current submission state.
    pub const fn state(&self) -> SubmissionState {
        self.state
    }

    /// Returns the settings this controller was built with.
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the injected scheduler.
    pub const fn scheduler(&self) -> &T {
        &self.scheduler
    }

    /// Returns the injected scheduler mutably.
    pub fn scheduler_mut(&mut self) -> &mut T {
        &mut self.scheduler
    }

    /// Returns the injected confirmation prompt.
    pub const fn confirm(&self) -> &C {
        &self.confirm
    }

    // ── Validation & rendering ──────────────────────────────────────

    /// Validates `field` against the surface's current text and renders the result.
    pub fn validate_field(
        &mut self,
        surface: &mut dyn PresentationSurface,
        field: Field,
    ) -> FieldState {
        let state = FieldState::capture(field, surface.value(field));
        match state.outcome {
            Ok(()) => {
                self.clear_error(surface, field);
                surface.set_marker(field, Marker::Valid, true);
                tracing::debug!(%field, "field valid");
            }
            Err(error) => {
                self.show_error(surface, error);
                tracing::debug!(%field, code = error.kind.code(), "field invalid");
            }
        }
        state
    }

    /// Validates all three fields, rendering each outcome.
    pub fn validate_all(&mut self, surface: &mut dyn PresentationSurface) -> FormSnapshot {
        let name = self.validate_field(surface, Field::Name);
        let email = self.validate_field(surface, Field::Email);
        let message = self.validate_field(surface, Field::Message);
        FormSnapshot::from_states(name, email, message)
    }

    /// Puts `error.field` into the error state with the error's message.
    pub fn show_error(&mut self, surface: &mut dyn PresentationSurface, error: FieldError) {
        let field = error.field;
        surface.set_marker(field, Marker::Error, true);
        surface.set_marker(field, Marker::Valid, false);
        surface.set_error_text(field, error.message());
        surface.set_error_shown(field, true);
    }

    /// Removes the error state from `field`. Leaves the valid marker alone.
    pub fn clear_error(&mut self, surface: &mut dyn PresentationSurface, field: Field) {
        surface.set_marker(field, Marker::Error, false);
        surface.set_error_text(field, "");
        surface.set_error_shown(field, false);
    }

    // ── Field events ────────────────────────────────────────────────

    /// Handles `field` losing focus.
    pub fn on_blur(&mut self, surface: &mut dyn PresentationSurface, field: Field) -> FieldState {
        self.validate_field(surface, field)
    }

    /// Handles the user editing `field`: the error disappears immediately,
    /// but the field is not marked valid until it validates again.
    pub fn on_input(&mut self, surface: &mut dyn PresentationSurface, field: Field) {
        self.clear_error(surface, field);
    }

    // ── Submit ──────────────────────────────────────────────────────

    /// Handles a submit request and returns the snapshot that decided the outcome.
    ///
    /// Validation always runs and renders. While a submission is in flight a
    /// valid form does not start a second one.
    pub fn handle_submit(&mut self, surface: &mut dyn PresentationSurface) -> FormSnapshot {
        self.hide_success_notification(surface);

        let snapshot = self.validate_all(surface);
        match snapshot.first_invalid() {
            None if self.state == SubmissionState::Submitting => {
                tracing::debug!("submit ignored: submission already in flight");
            }
            None => self.submit(surface),
            Some(field) => {
                tracing::debug!(
                    %field,
                    errors = snapshot.errors().len(),
                    "submit blocked by validation"
                );
                surface.focus(field);
            }
        }
        snapshot
    }

    /// Starts the simulated submission.
    pub fn submit(&mut self, surface: &mut dyn PresentationSurface) {
        surface.set_submit_loading(true);
        surface.set_submit_enabled(false);
        surface.set_submit_label(&self.settings.labels.submit_sending);

        self.state = SubmissionState::Submitting;
        let delay = self.settings.timing.submit_delay();
        self.scheduler.schedule(delay, TimerTask::CompleteSubmission);
        tracing::info!(delay_ms = self.settings.timing.submit_delay_ms, "submission started");
    }

    /// Finishes the simulated submission: restores the submit control,
    /// shows the success notification, and clears the form.
    pub fn complete_submission(&mut self, surface: &mut dyn PresentationSurface) {
        surface.set_submit_loading(false);
        surface.set_submit_enabled(true);
        surface.set_submit_label(&self.settings.labels.submit_idle);

        self.show_success_notification(surface);
        self.clear_form(surface);
        tracing::info!("submission completed");
    }

    // ── Success notification ────────────────────────────────────────

    /// Shows the success notification and schedules its automatic hide.
    pub fn show_success_notification(&mut self, surface: &mut dyn PresentationSurface) {
        surface.set_success_shown(true);
        self.state = SubmissionState::SucceededVisible;

        let window = self.settings.timing.success_display();
        self.scheduler.schedule(window, TimerTask::HideSuccess);
        tracing::debug!(
            display_ms = self.settings.timing.success_display_ms,
            "success notification shown"
        );
    }

    /// Hides the success notification. Hiding a hidden notification is a no-op.
    pub fn hide_success_notification(&mut self, surface: &mut dyn PresentationSurface) {
        surface.set_success_shown(false);
        if self.state == SubmissionState::SucceededVisible {
            self.state = SubmissionState::Idle;
        }
    }

    // ── Reset ───────────────────────────────────────────────────────

    /// Handles a reset request. Returns `true` if the user confirmed.
    ///
    /// Declining leaves fields and notification untouched.
    pub fn handle_reset(&mut self, surface: &mut dyn PresentationSurface) -> bool {
        if !self.confirm.confirm(&self.settings.labels.reset_confirmation) {
            tracing::debug!("reset declined");
            return false;
        }

        self.clear_form(surface);
        self.hide_success_notification(surface);
        tracing::info!("form reset");
        true
    }

    /// Empties every field, clears all markers, and focuses the name field.
    pub fn clear_form(&mut self, surface: &mut dyn PresentationSurface) {
        surface.reset_fields();
        for field in Field::ALL {
            self.clear_error(surface, field);
        }
        for field in Field::ALL {
            surface.set_marker(field, Marker::Valid, false);
        }
        surface.focus(Field::Name);
    }

    // ── Timers ──────────────────────────────────────────────────────

    /// Runs a deferred task that has come due.
    pub fn on_timer(&mut self, surface: &mut dyn PresentationSurface, task: TimerTask) {
        tracing::debug!(?task, "timer fired");
        match task {
            TimerTask::CompleteSubmission => self.complete_submission(surface),
            TimerTask::HideSuccess => self.hide_success_notification(surface),
        }
    }
}

impl<T, C> std::fmt::Debug for FormValidationController<T, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormValidationController")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
