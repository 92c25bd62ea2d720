//! Checks raw input values against validator descriptors

use super::rules::Validator;
use once_cell::sync::Lazy;
use regex::Regex;

// Acceptance sets match the web panel's patterns exactly.
// `[0-9]` rather than `\d`: Unicode digits must not pass.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._-]+@[a-zA-Z0-9-]+\.[a-zA-Z]{2,3}$").expect("email pattern compiles")
});

static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^09[0-9]{9}$").expect("phone pattern compiles")
});

/// Check a value against a single descriptor
pub fn validate_one(value: &str, validator: &Validator) -> bool {
    let trimmed_len = || value.trim().chars().count();

    match validator {
        Validator::Required => trimmed_len() > 0,
        Validator::MinLength(n) => trimmed_len() >= *n,
        Validator::MaxLength(n) => trimmed_len() <= *n,
        Validator::Email => EMAIL_PATTERN.is_match(value),
        Validator::Phone => PHONE_PATTERN.is_match(value),
    }
}

/// Returns true only if every descriptor accepts the value.
///
/// An empty descriptor list accepts everything.
pub fn validate(value: &str, validators: &[Validator]) -> bool {
    validators.iter().all(|v| validate_one(value, v))
}
