//! Input bindings between key edits and a form store

use super::form_state::FormStore;
use crate::validation::{validate, Validator};

/// Kind of native control the input stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputElement {
    #[default]
    Text,
    Textarea,
}

/// A single edit coming from the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEdit {
    Insert(char),
    Newline,
    Backspace,
    Clear,
}

/// Feedback style for a field, `success` or `error`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    Success,
    Error,
}

impl FieldStatus {
    pub fn from_validity(is_valid: bool) -> Self {
        if is_valid {
            Self::Success
        } else {
            Self::Error
        }
    }

    pub fn class_name(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Declaration of one form input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub id: String,
    pub label: String,
    pub validators: Vec<Validator>,
    pub element: InputElement,
    pub masked: bool,
}

impl Input {
    /// Create a single-line input
    pub fn text(id: &str, label: &str, validators: Vec<Validator>) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            validators,
            element: InputElement::Text,
            masked: false,
        }
    }

    /// Create a multi-line input
    pub fn textarea(id: &str, label: &str, validators: Vec<Validator>) -> Self {
        Self {
            element: InputElement::Textarea,
            ..Self::text(id, label, validators)
        }
    }

    /// Hide the typed characters (passwords)
    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    pub fn is_multiline(&self) -> bool {
        self.element == InputElement::Textarea
    }

    /// Apply an edit to a value. Newlines only reach textareas.
    pub fn apply_edit(&self, current: &str, edit: InputEdit) -> String {
        let mut value = current.to_string();
        match edit {
            InputEdit::Insert(c) => value.push(c),
            InputEdit::Newline => {
                if self.is_multiline() {
                    value.push('\n');
                }
            }
            InputEdit::Backspace => {
                value.pop();
            }
            InputEdit::Clear => value.clear(),
        }
        value
    }

    /// Validate a new raw value and hand it to the store
    pub fn on_change(&self, value: String, store: &mut FormStore) {
        let is_valid = validate(&value, &self.validators);
        tracing::trace!(
            field = %self.id,
            status = FieldStatus::from_validity(is_valid).class_name(),
            "input changed"
        );
        store.on_input_change(&self.id, value, is_valid);
    }

    /// Apply a key edit to this input's current value in the store
    pub fn handle_edit(&self, edit: InputEdit, store: &mut FormStore) {
        let value = self.apply_edit(store.value(&self.id), edit);
        self.on_change(value, store);
    }

    pub fn status(&self, store: &FormStore) -> FieldStatus {
        FieldStatus::from_validity(store.state().is_field_valid(&self.id))
    }

    /// Text to draw for the current value
    pub fn display_value(&self, store: &FormStore) -> String {
        let value = store.value(&self.id);
        if self.masked {
            "•".repeat(value.chars().count())
        } else {
            value.to_string()
        }
    }
}
