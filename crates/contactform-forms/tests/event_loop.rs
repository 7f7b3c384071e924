//! Tests for the tokio-driven event loop.
//!
//! Time is paused, so the runtime jumps straight to the next timer whenever
//! the loop is idle; the assertions still see the real ordering of events.

use contactform_core::Settings;
use contactform_forms::{
    run_event_loop, ContactForm, Field, FormEvent, KeyPress, PresentationSurface,
    SubmissionState, TokioScheduler,
};
use contactform_test::{init_test_logging, FakeSurface, ScriptedConfirm};
use tokio::sync::mpsc;

fn filled_surface(name: &str, email: &str, message: &str) -> FakeSurface {
    let mut surface = FakeSurface::new();
    surface.fill(name, email, message);
    surface
}

#[tokio::test(start_paused = true)]
async fn test_loop_runs_full_submission_lifecycle() {
    init_test_logging();
    let (scheduler, timers) = TokioScheduler::new();
    let form = ContactForm::new(
        Settings::default(),
        filled_surface("Jo", "jo@example.com", "Hello, this works!"),
        scheduler,
        ScriptedConfirm::new(true),
    );
    let (tx, rx) = mpsc::unbounded_channel();
    let start = tokio::time::Instant::now();

    tx.send(FormEvent::Submit).unwrap();
    drop(tx);
    let form = run_event_loop(form, rx, timers).await;

    // Submit delay + success window have both elapsed before the loop exits.
    assert!(start.elapsed() >= std::time::Duration::from_millis(6500));
    assert_eq!(form.state(), SubmissionState::Idle);
    let surface = form.into_surface();
    assert_eq!(surface.success_show_count(), 1);
    assert!(!surface.success_shown());
    assert!(surface.submit_enabled());
    assert_eq!(surface.submit_label(), "Send Message");
    surface.assert_cleared();
}

#[tokio::test(start_paused = true)]
async fn test_loop_exits_immediately_without_timers() {
    init_test_logging();
    let (scheduler, timers) = TokioScheduler::new();
    let form = ContactForm::new(
        Settings::default(),
        filled_surface("", "", ""),
        scheduler,
        ScriptedConfirm::new(true),
    );
    let (tx, rx) = mpsc::unbounded_channel();
    let start = tokio::time::Instant::now();

    tx.send(FormEvent::blur(Field::Name)).unwrap();
    tx.send(FormEvent::Submit).unwrap();
    drop(tx);
    let form = run_event_loop(form, rx, timers).await;

    assert_eq!(start.elapsed(), std::time::Duration::ZERO);
    form.surface().assert_error(Field::Name, "Name is required");
    assert_eq!(form.surface().focused(), Some(Field::Name));
}

#[tokio::test(start_paused = true)]
async fn test_loop_routes_shortcuts() {
    init_test_logging();
    let (scheduler, timers) = TokioScheduler::new();
    let confirm = ScriptedConfirm::new(false);
    let handle = confirm.clone();
    let form = ContactForm::new(
        Settings::default(),
        filled_surface("Jo", "", ""),
        scheduler,
        confirm,
    );
    let (tx, rx) = mpsc::unbounded_channel();

    tx.send(FormEvent::KeyDown(KeyPress::new("Escape"))).unwrap();
    tx.send(FormEvent::KeyDown(KeyPress::new("Enter").with_ctrl()))
        .unwrap();
    drop(tx);
    let form = run_event_loop(form, rx, timers).await;

    handle.assert_prompted(1);
    assert_eq!(form.surface().value(Field::Name), "Jo");
    form.surface().assert_error(Field::Email, "Email is required");
}

#[tokio::test(start_paused = true)]
async fn test_loop_handles_events_between_timers() {
    init_test_logging();
    let (scheduler, timers) = TokioScheduler::new();
    let form = ContactForm::new(
        Settings::default(),
        filled_surface("Jo", "jo@example.com", "Hello, this works!"),
        scheduler,
        ScriptedConfirm::new(true),
    );
    let (tx, rx) = mpsc::unbounded_channel();

    let driver = async move {
        tx.send(FormEvent::Submit).unwrap();
        // Well after completion, while the success notification is shown.
        tokio::time::sleep(std::time::Duration::from_millis(2000)).await;
        tx.send(FormEvent::ResetClick).unwrap();
    };
    let (form, ()) = tokio::join!(run_event_loop(form, rx, timers), driver);

    let surface = form.surface();
    assert_eq!(surface.success_show_count(), 1);
    assert!(!surface.success_shown());
    assert_eq!(surface.reset_count(), 2);
}
