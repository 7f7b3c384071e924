//! In-memory presentation surface.
//!
//! [`FakeSurface`] models the contact form page: three inputs with paired
//! error elements, a submit control, a success notification, labels, and an
//! optional character counter. It records everything rendered into it so
//! tests can assert on visual state without a browser.

use std::collections::{HashMap, HashSet};

use contactform_forms::{Field, LabelRef, Marker, PresentationSurface};

/// A `<label>` on the fake page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FakeLabel {
    /// The id of the element the label is for, if any.
    pub html_for: Option<String>,
    /// Attributes set on the label.
    pub attributes: HashMap<String, String>,
}

impl FakeLabel {
    /// A label pointing at the element with id `target`.
    pub fn for_id(target: impl Into<String>) -> Self {
        Self {
            html_for: Some(target.into()),
            attributes: HashMap::new(),
        }
    }

    /// A label without a `for` target.
    pub fn wrapping() -> Self {
        Self::default()
    }
}

/// The character counter inserted by the enhancer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeCounter {
    /// The field the counter was mounted next to.
    pub field: Field,
    /// The displayed limit.
    pub limit: usize,
    /// The displayed count.
    pub count: usize,
    /// The current text color.
    pub color: String,
}

impl FakeCounter {
    /// Returns the counter text as displayed, e.g. `"12/1000 characters"`.
    pub fn text(&self) -> String {
        format!("{}/{} characters", self.count, self.limit)
    }
}

/// An in-memory [`PresentationSurface`].
#[derive(Debug, Clone)]
pub struct FakeSurface {
    values: HashMap<Field, String>,
    markers: HashSet<(Field, Marker)>,
    error_texts: HashMap<Field, String>,
    errors_shown: HashSet<Field>,
    submit_enabled: bool,
    submit_label: String,
    submit_loading: bool,
    success_shown: bool,
    success_show_count: usize,
    focus_history: Vec<Field>,
    field_attributes: HashMap<(Field, String), String>,
    labels: Vec<FakeLabel>,
    counter: Option<FakeCounter>,
    reset_count: usize,
}

impl Default for FakeSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeSurface {
    /// Creates an empty page with one label per field and an idle submit control.
    pub fn new() -> Self {
        Self::with_labels(Field::ALL.iter().map(|f| FakeLabel::for_id(f.id())).collect())
    }

    /// Creates an empty page with the given labels.
    pub fn with_labels(labels: Vec<FakeLabel>) -> Self {
        Self {
            values: HashMap::new(),
            markers: HashSet::new(),
            error_texts: HashMap::new(),
            errors_shown: HashSet::new(),
            submit_enabled: true,
            submit_label: "Send Message".to_string(),
            submit_loading: false,
            success_shown: false,
            success_show_count: 0,
            focus_history: Vec::new(),
            field_attributes: HashMap::new(),
            labels,
            counter: None,
            reset_count: 0,
        }
    }

    // ── Simulated user input ────────────────────────────────────────

    /// Replaces the text of `field`, as if the user had typed it.
    pub fn type_into(&mut self, field: Field, text: impl Into<String>) {
        self.values.insert(field, text.into());
    }

    /// Types into all three fields.
    pub fn fill(&mut self, name: &str, email: &str, message: &str) {
        self.type_into(Field::Name, name);
        self.type_into(Field::Email, email);
        self.type_into(Field::Message, message);
    }

    // ── Inspection ──────────────────────────────────────────────────

    /// Returns the error text rendered for `field`.
    pub fn error_text(&self, field: Field) -> &str {
        self.error_texts.get(&field).map_or("", String::as_str)
    }

    /// Returns whether the error element of `field` is shown.
    pub fn error_shown(&self, field: Field) -> bool {
        self.errors_shown.contains(&field)
    }

    /// Returns whether the submit control is enabled.
    pub const fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    /// Returns the submit control's label.
    pub fn submit_label(&self) -> &str {
        &self.submit_label
    }

    /// Returns whether the submit control shows its loading indicator.
    pub const fn submit_loading(&self) -> bool {
        self.submit_loading
    }

    /// Returns how many times the success notification went from hidden to shown.
    pub const fn success_show_count(&self) -> usize {
        self.success_show_count
    }

    /// Returns the field that currently has focus.
    pub fn focused(&self) -> Option<Field> {
        self.focus_history.last().copied()
    }

    /// Returns every focus move, oldest first.
    pub fn focus_history(&self) -> &[Field] {
        &self.focus_history
    }

    /// Returns how many times the fields were reset.
    pub const fn reset_count(&self) -> usize {
        self.reset_count
    }

    /// Returns an attribute of the input element of `field`.
    pub fn field_attribute(&self, field: Field, name: &str) -> Option<&str> {
        self.field_attributes
            .get(&(field, name.to_string()))
            .map(String::as_str)
    }

    /// Returns the labels of the page.
    pub fn label_list(&self) -> &[FakeLabel] {
        &self.labels
    }

    /// Returns the character counter, if one was mounted.
    pub const fn counter(&self) -> Option<&FakeCounter> {
        self.counter.as_ref()
    }

    // ── Assertions ──────────────────────────────────────────────────

    /// Asserts that `field` is in the error state showing `message`.
    ///
    /// # Panics
    ///
    /// Panics if the field is not marked as an error, is marked valid, or
    /// shows a different message.
    pub fn assert_error(&self, field: Field, message: &str) {
        assert!(
            self.has_marker(field, Marker::Error),
            "Expected '{field}' to carry the error marker"
        );
        assert!(
            !self.has_marker(field, Marker::Valid),
            "Expected '{field}' not to carry the valid marker"
        );
        assert!(self.error_shown(field), "Expected the '{field}' error to be shown");
        assert_eq!(self.error_text(field), message, "Wrong error text for '{field}'");
    }

    /// Asserts that `field` shows no error.
    ///
    /// # Panics
    ///
    /// Panics if any error state remains on the field.
    pub fn assert_no_error(&self, field: Field) {
        assert!(
            !self.has_marker(field, Marker::Error),
            "Expected '{field}' not to carry the error marker"
        );
        assert!(!self.error_shown(field), "Expected the '{field}' error to be hidden");
        assert_eq!(self.error_text(field), "", "Expected no error text for '{field}'");
    }

    /// Asserts that `field` is marked valid and shows no error.
    ///
    /// # Panics
    ///
    /// Panics if the field is not valid.
    pub fn assert_valid(&self, field: Field) {
        self.assert_no_error(field);
        assert!(
            self.has_marker(field, Marker::Valid),
            "Expected '{field}' to carry the valid marker"
        );
    }

    /// Asserts that every field is empty and carries no marker.
    ///
    /// # Panics
    ///
    /// Panics if any field has text or a marker.
    pub fn assert_cleared(&self) {
        for field in Field::ALL {
            assert_eq!(self.value(field), "", "Expected '{field}' to be empty");
            self.assert_no_error(field);
            assert!(
                !self.has_marker(field, Marker::Valid),
                "Expected '{field}' not to carry the valid marker"
            );
        }
    }
}

impl PresentationSurface for FakeSurface {
    fn value(&self, field: Field) -> String {
        self.values.get(&field).cloned().unwrap_or_default()
    }

    fn set_marker(&mut self, field: Field, marker: Marker, on: bool) {
        if on {
            self.markers.insert((field, marker));
        } else {
            self.markers.remove(&(field, marker));
        }
    }

    fn has_marker(&self, field: Field, marker: Marker) -> bool {
        self.markers.contains(&(field, marker))
    }

    fn set_error_text(&mut self, field: Field, text: &str) {
        self.error_texts.insert(field, text.to_string());
    }

    fn set_error_shown(&mut self, field: Field, shown: bool) {
        if shown {
            self.errors_shown.insert(field);
        } else {
            self.errors_shown.remove(&field);
        }
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_enabled = enabled;
    }

    fn set_submit_label(&mut self, label: &str) {
        label.clone_into(&mut self.submit_label);
    }

    fn set_submit_loading(&mut self, loading: bool) {
        self.submit_loading = loading;
    }

    fn set_success_shown(&mut self, shown: bool) {
        if shown && !self.success_shown {
            self.success_show_count += 1;
        }
        self.success_shown = shown;
    }

    fn success_shown(&self) -> bool {
        self.success_shown
    }

    fn reset_fields(&mut self) {
        self.values.clear();
        self.reset_count += 1;
    }

    fn focus(&mut self, field: Field) {
        self.focus_history.push(field);
    }

    fn set_field_attribute(&mut self, field: Field, name: &str, value: &str) {
        self.field_attributes
            .insert((field, name.to_string()), value.to_string());
    }

    fn labels(&self) -> Vec<LabelRef> {
        self.labels
            .iter()
            .enumerate()
            .map(|(index, label)| LabelRef {
                index,
                html_for: label.html_for.clone(),
            })
            .collect()
    }

    fn set_label_attribute(&mut self, index: usize, name: &str, value: &str) {
        if let Some(label) = self.labels.get_mut(index) {
            label.attributes.insert(name.to_string(), value.to_string());
        }
    }

    fn mount_counter(&mut self, field: Field, limit: usize, color: &str) {
        self.counter = Some(FakeCounter {
            field,
            limit,
            count: 0,
            color: color.to_string(),
        });
    }

    fn update_counter(&mut self, count: usize, color: &str) {
        if let Some(counter) = self.counter.as_mut() {
            counter.count = count;
            color.clone_into(&mut counter.color);
        }
    }
}
