//! Field validation
//!
//! Declarative validator descriptors and the function that checks a raw
//! input value against a list of them.

mod rules;
mod validator;

pub use rules::{email, max_length, min_length, phone, required, Validator};
pub use validator::validate;
