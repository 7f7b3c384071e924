//! # contactform-forms
//!
//! The contact form controller for contactform-rs. Provides the field
//! validators, the [`FormValidationController`](controller::FormValidationController)
//! that renders validation state and drives the simulated submission, the
//! [`InteractionEnhancer`](enhancer::InteractionEnhancer) with its character
//! counter, accessibility attributes, and keyboard shortcuts, and the
//! [`ContactForm`](form::ContactForm) that routes host events to both.
//!
//! Everything the controller touches is injected: a
//! [`PresentationSurface`](surface::PresentationSurface), a
//! [`Scheduler`](scheduler::Scheduler) for deferred work, and a
//! [`Confirm`](surface::Confirm) prompt.

pub mod controller;
pub mod enhancer;
pub mod events;
pub mod fields;
pub mod form;
pub mod scheduler;
pub mod surface;
pub mod validation;

pub use controller::{FormValidationController, SubmissionState};
pub use enhancer::{CounterTone, InteractionEnhancer, KeyPress, ShortcutAction};
pub use events::{DefaultAction, FormEvent};
pub use fields::{Field, FieldState};
pub use form::{run_event_loop, ContactForm};
pub use scheduler::{ManualScheduler, Scheduler, TimerReceiver, TimerTask, TokioScheduler};
pub use surface::{Confirm, LabelRef, Marker, PresentationSurface};
pub use validation::FormSnapshot;
