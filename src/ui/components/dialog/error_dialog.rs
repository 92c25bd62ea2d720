//! Error dialog component

use super::base::{hint_line, render_dialog, DialogConfig};
use ratatui::{style::Color, Frame};

/// Show the oldest queued error
pub fn render_error_dialog(frame: &mut Frame, error_message: &str) {
    render_dialog(
        frame,
        DialogConfig {
            title: "Error",
            accent: Color::Red,
            message: error_message,
            footer: vec![hint_line(&[("Enter", "dismiss"), ("Esc", "dismiss")])],
            max_width: 60,
        },
    );
}
