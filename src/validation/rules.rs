//! Validator descriptors

/// A single declarative validation rule attached to a form field.
///
/// Only the length kinds carry a bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Validator {
    Required,
    MinLength(usize),
    MaxLength(usize),
    Email,
    Phone,
}

impl Validator {
    /// Short name used in logs and field hints
    pub fn label(&self) -> String {
        match self {
            Self::Required => "required".to_string(),
            Self::MinLength(n) => format!("min {n}"),
            Self::MaxLength(n) => format!("max {n}"),
            Self::Email => "email".to_string(),
            Self::Phone => "phone".to_string(),
        }
    }
}

/// Value must not be blank
pub fn required() -> Validator {
    Validator::Required
}

/// Trimmed value must be at least `n` characters
pub fn min_length(n: usize) -> Validator {
    Validator::MinLength(n)
}

/// Trimmed value must be at most `n` characters
pub fn max_length(n: usize) -> Validator {
    Validator::MaxLength(n)
}

/// Value must look like an email address
pub fn email() -> Validator {
    Validator::Email
}

/// Value must be an 11-digit mobile number starting with `09`
pub fn phone() -> Validator {
    Validator::Phone
}
