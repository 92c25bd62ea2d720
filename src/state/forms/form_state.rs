//! Form state and the reducer that updates it

use super::field::FieldState;
use std::collections::BTreeMap;

/// The only transition a form knows about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    FieldChanged {
        id: String,
        value: String,
        is_valid: bool,
    },
}

impl FormAction {
    pub fn field_changed(id: impl Into<String>, value: impl Into<String>, is_valid: bool) -> Self {
        Self::FieldChanged {
            id: id.into(),
            value: value.into(),
            is_valid,
        }
    }
}

/// Per-field values plus the aggregate validity that gates submission
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub fields: BTreeMap<String, FieldState>,
    pub is_form_valid: bool,
}

impl FormState {
    /// Build a form with a caller-supplied aggregate flag.
    ///
    /// The flag is taken as given, even when it disagrees with the
    /// fields. The first `FieldChanged` brings it back in line.
    pub fn new<I, K>(fields: I, is_form_valid: bool) -> Self
    where
        I: IntoIterator<Item = (K, FieldState)>,
        K: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            is_form_valid,
        }
    }

    pub fn field(&self, id: &str) -> Option<&FieldState> {
        self.fields.get(id)
    }

    /// Value of a field, or "" for an unknown id
    pub fn value(&self, id: &str) -> &str {
        self.field(id).map(|f| f.value.as_str()).unwrap_or("")
    }

    pub fn is_field_valid(&self, id: &str) -> bool {
        self.field(id).is_some_and(|f| f.is_valid)
    }
}

/// Compute the next form state.
///
/// Only the changed field takes a new validity; every other field keeps
/// the flag it already had. Unknown ids leave the state untouched.
pub fn reduce(state: &FormState, action: FormAction) -> FormState {
    match action {
        FormAction::FieldChanged {
            id,
            value,
            is_valid,
        } => {
            if !state.fields.contains_key(&id) {
                tracing::warn!("FieldChanged for undeclared field {id:?} ignored");
                return state.clone();
            }

            let others_valid = state
                .fields
                .iter()
                .filter(|(key, _)| **key != id)
                .all(|(_, field)| field.is_valid);

            let mut fields = state.fields.clone();
            fields.insert(id, FieldState::new(value, is_valid));

            FormState {
                fields,
                is_form_valid: is_valid && others_valid,
            }
        }
    }
}

/// Owns one form's state for as long as its view is mounted
#[derive(Debug, Clone, Default)]
pub struct FormStore {
    state: FormState,
}

/// Create a store for a form with the given initial fields and
/// aggregate validity.
pub fn use_form<I, K>(initial_fields: I, initial_is_form_valid: bool) -> FormStore
where
    I: IntoIterator<Item = (K, FieldState)>,
    K: Into<String>,
{
    FormStore {
        state: FormState::new(initial_fields, initial_is_form_valid),
    }
}

impl FormStore {
    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn dispatch(&mut self, action: FormAction) {
        self.state = reduce(&self.state, action);
    }

    /// Change callback handed to inputs: `(id, value, is_valid)`
    pub fn on_input_change(&mut self, id: &str, value: String, is_valid: bool) {
        self.dispatch(FormAction::field_changed(id, value, is_valid));
    }

    pub fn is_form_valid(&self) -> bool {
        self.state.is_form_valid
    }

    pub fn value(&self, id: &str) -> &str {
        self.state.value(id)
    }
}
