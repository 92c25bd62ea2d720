//! Reusable UI components

mod button;
mod dialog;
mod input;

pub use button::{render_form_button, BUTTON_HEIGHT};
pub use dialog::{render_confirm_dialog, render_error_dialog};
pub use input::{input_height, render_input};
