//! Form domain layer
//!
//! Field state, the form reducer, input and button bindings, and the
//! declarations of every form the console shows.

mod button;
mod definitions;
mod field;
mod form_state;
mod input;

pub use button::{Button, ButtonAction, ButtonTarget};
pub use definitions::{ActiveForm, Form, FormKind};
pub use form_state::{use_form, FormStore};
pub use input::{FieldStatus, Input, InputEdit};
