//! Form field value objects

/// Current value of one form input and whether it passed validation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldState {
    pub value: String,
    pub is_valid: bool,
}

impl FieldState {
    pub fn new(value: impl Into<String>, is_valid: bool) -> Self {
        Self {
            value: value.into(),
            is_valid,
        }
    }

    /// Blank field that has not been validated yet
    pub fn empty() -> Self {
        Self::default()
    }
}
