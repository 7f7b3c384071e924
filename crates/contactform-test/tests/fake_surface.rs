//! Tests for the in-memory surface and the form builders.

use contactform_forms::{Field, Marker, PresentationSurface};
use contactform_test::{test_form, FakeLabel, FakeSurface};

#[test]
fn test_new_surface_is_idle() {
    let surface = FakeSurface::new();
    assert!(surface.submit_enabled());
    assert!(!surface.submit_loading());
    assert_eq!(surface.submit_label(), "Send Message");
    assert!(!surface.success_shown());
    assert_eq!(surface.focused(), None);
    assert!(surface.counter().is_none());
    assert_eq!(surface.label_list().len(), 3);
    surface.assert_cleared();
}

#[test]
fn test_type_into_and_reset() {
    let mut surface = FakeSurface::new();
    surface.fill("Jo", "jo@example.com", "Hello there, friend");
    assert_eq!(surface.value(Field::Email), "jo@example.com");

    surface.reset_fields();
    assert_eq!(surface.value(Field::Name), "");
    assert_eq!(surface.reset_count(), 1);
}

#[test]
fn test_markers_toggle() {
    let mut surface = FakeSurface::new();
    surface.set_marker(Field::Name, Marker::Error, true);
    assert!(surface.has_marker(Field::Name, Marker::Error));
    assert!(!surface.has_marker(Field::Email, Marker::Error));

    surface.set_marker(Field::Name, Marker::Error, false);
    surface.set_marker(Field::Name, Marker::Error, false);
    assert!(!surface.has_marker(Field::Name, Marker::Error));
}

#[test]
fn test_success_show_count_counts_transitions() {
    let mut surface = FakeSurface::new();
    surface.set_success_shown(true);
    surface.set_success_shown(true);
    surface.set_success_shown(false);
    surface.set_success_shown(false);
    surface.set_success_shown(true);
    assert_eq!(surface.success_show_count(), 2);
}

#[test]
fn test_focus_history() {
    let mut surface = FakeSurface::new();
    surface.focus(Field::Email);
    surface.focus(Field::Name);
    assert_eq!(surface.focused(), Some(Field::Name));
    assert_eq!(surface.focus_history(), &[Field::Email, Field::Name]);
}

#[test]
fn test_label_attribute_out_of_range_ignored() {
    let mut surface = FakeSurface::with_labels(vec![FakeLabel::wrapping()]);
    surface.set_label_attribute(5, "aria-required", "true");
    assert!(surface.label_list()[0].attributes.is_empty());
    assert_eq!(surface.labels()[0].html_for, None);
}

#[test]
fn test_counter_update_before_mount_ignored() {
    let mut surface = FakeSurface::new();
    surface.update_counter(3, "#666");
    assert!(surface.counter().is_none());

    surface.mount_counter(Field::Message, 1000, "#666");
    assert_eq!(surface.counter().unwrap().color, "#666");
    surface.update_counter(3, "#f39c12");
    let counter = surface.counter().unwrap();
    assert_eq!(counter.text(), "3/1000 characters");
    assert_eq!(counter.color, "#f39c12");
}

#[test]
#[should_panic(expected = "error marker")]
fn test_assert_error_panics_on_clean_field() {
    FakeSurface::new().assert_error(Field::Name, "Name is required");
}

#[test]
fn test_test_form_installs_enhancer() {
    let (form, confirm) = test_form();
    assert!(form.surface().counter().is_some());
    assert_eq!(
        form.surface().field_attribute(Field::Message, "aria-describedby"),
        Some("messageError")
    );
    confirm.assert_prompted(0);
}
