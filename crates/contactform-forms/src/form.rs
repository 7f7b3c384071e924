//! The assembled contact form and its event loop.
//!
//! [`ContactForm`] owns the presentation surface and routes each
//! [`FormEvent`] to the controller, the enhancer, or both. The two
//! components never reference each other; a keyboard shortcut reported by
//! the enhancer is re-dispatched here as the event it stands for.
//!
//! [`run_event_loop`] services host events and tokio timer deliveries on a
//! single task, one at a time.

use std::time::Duration;

use contactform_core::Settings;
use tokio::sync::mpsc;

use crate::controller::{FormValidationController, SubmissionState};
use crate::enhancer::{InteractionEnhancer, ShortcutAction};
use crate::events::{DefaultAction, FormEvent};
use crate::scheduler::{ManualScheduler, Scheduler, TimerReceiver, TimerTask};
use crate::surface::{Confirm, PresentationSurface};

/// A contact form bound to a surface, a scheduler, and a confirmation prompt.
pub struct ContactForm<S, T, C> {
    surface: S,
    controller: FormValidationController<T, C>,
    enhancer: InteractionEnhancer,
    span: tracing::Span,
}

impl<S, T, C> ContactForm<S, T, C>
where
    S: PresentationSurface,
    T: Scheduler,
    C: Confirm,
{
    /// Builds the form and installs the enhancer onto the surface.
    pub fn new(settings: Settings, mut surface: S, scheduler: T, confirm: C) -> Self {
        let span = contactform_core::logging::form_span("contactForm");
        let enhancer = InteractionEnhancer::new(settings.counter.clone());
        let controller = FormValidationController::new(settings, scheduler, confirm);

        {
            let _guard = span.enter();
            enhancer.install(&mut surface);
            tracing::info!("contact form initialized");
            tracing::info!("keyboard shortcuts: Ctrl/Cmd+Enter submits, Escape resets");
        }

        Self {
            surface,
            controller,
            enhancer,
            span,
        }
    }

    /// Returns the surface.
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// Returns the surface mutably, e.g. to simulate typing.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Returns the controller.
    pub const fn controller(&self) -> &FormValidationController<T, C> {
        &self.controller
    }

    /// Returns the enhancer.
    pub const fn enhancer(&self) -> &InteractionEnhancer {
        &self.enhancer
    }

    /// Returns the current submission state.
    pub const fn state(&self) -> SubmissionState {
        self.controller.state()
    }

    /// Routes one event and reports whether the host's default action must be suppressed.
    pub fn dispatch(&mut self, event: FormEvent) -> DefaultAction {
        let span = self.span.clone();
        let _guard = span.enter();

        match event {
            FormEvent::Blur { field } => {
                self.controller.on_blur(&mut self.surface, field);
                DefaultAction::Allow
            }
            FormEvent::Input { field } => {
                self.controller.on_input(&mut self.surface, field);
                self.enhancer.on_input(&mut self.surface, field);
                DefaultAction::Allow
            }
            FormEvent::Submit => {
                self.controller.handle_submit(&mut self.surface);
                DefaultAction::Prevent
            }
            FormEvent::ResetClick => {
                self.controller.handle_reset(&mut self.surface);
                DefaultAction::Prevent
            }
            FormEvent::KeyDown(key) => match self.enhancer.handle_key(&key) {
                Some(ShortcutAction::Submit) => {
                    tracing::debug!("submit shortcut");
                    self.dispatch(FormEvent::Submit);
                    DefaultAction::Prevent
                }
                Some(ShortcutAction::Reset) => {
                    tracing::debug!("reset shortcut");
                    self.dispatch(FormEvent::ResetClick);
                    DefaultAction::Allow
                }
                None => DefaultAction::Allow,
            },
        }
    }

    /// Runs a timer task that has come due.
    pub fn fire(&mut self, task: TimerTask) {
        let _guard = self.span.enter();
        self.controller.on_timer(&mut self.surface, task);
    }

    /// Consumes the form and returns its surface.
    pub fn into_surface(self) -> S {
        self.surface
    }
}

impl<S, C> ContactForm<S, ManualScheduler, C>
where
    S: PresentationSurface,
    C: Confirm,
{
    /// Advances the virtual clock and fires every task that became due.
    ///
    /// Tasks scheduled by a firing task are fired too if they also fall
    /// within the advanced window. Returns the fired tasks in order.
    pub fn advance(&mut self, by: Duration) -> Vec<TimerTask> {
        let target = self.controller.scheduler().now() + by;
        let mut fired = Vec::new();

        loop {
            let now = self.controller.scheduler().now();
            match self.controller.scheduler().next_due_in() {
                Some(next) if now + next <= target => {
                    let due = self.controller.scheduler_mut().advance(next);
                    for task in due {
                        self.fire(task);
                        fired.push(task);
                    }
                }
                _ => {
                    self.controller
                        .scheduler_mut()
                        .advance(target.saturating_sub(now));
                    break;
                }
            }
        }
        fired
    }
}

impl<S, T, C> std::fmt::Debug for ContactForm<S, T, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactForm")
            .field("controller", &self.controller)
            .field("enhancer", &self.enhancer)
            .finish_non_exhaustive()
    }
}

/// Services `events` and `timers` until the event channel is closed and no
/// timer is pending, then returns the form.
///
/// Events and timer deliveries are handled strictly one at a time.
pub async fn run_event_loop<S, T, C>(
    mut form: ContactForm<S, T, C>,
    mut events: mpsc::UnboundedReceiver<FormEvent>,
    mut timers: TimerReceiver,
) -> ContactForm<S, T, C>
where
    S: PresentationSurface,
    T: Scheduler,
    C: Confirm,
{
    let mut events_open = true;

    loop {
        if !events_open && timers.pending() == 0 {
            break;
        }

        tokio::select! {
            event = events.recv(), if events_open => match event {
                Some(event) => {
                    form.dispatch(event);
                }
                None => {
                    tracing::debug!(pending = timers.pending(), "event channel closed");
                    events_open = false;
                }
            },
            task = timers.recv() => match task {
                Some(task) => form.fire(task),
                None => break,
            },
        }
    }

    form
}
