//! Confirmation dialog for destructive list actions

use super::base::{hint_line, render_dialog, DialogConfig};
use crate::state::PendingAction;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

/// Render the confirmation dialog for a pending action
pub fn render_confirm_dialog(frame: &mut Frame, action: &PendingAction) {
    let verb = action.kind.verb();
    let message = format!(
        "Are you sure you want to {verb} \"{}\"?",
        truncate(&action.entity_display, 80)
    );

    let mut footer = Vec::new();
    for (label, is_confirm) in [("Cancel".to_string(), false), (capitalize(verb), true)] {
        let selected = action.selected_option == is_confirm;
        let style = match (selected, is_confirm) {
            (true, true) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            (true, false) => Style::default().add_modifier(Modifier::BOLD),
            _ => Style::default().fg(Color::DarkGray),
        };
        let prefix = if selected { "▸ " } else { "  " };
        footer.push(Line::from(Span::styled(format!("{prefix}{label}"), style)));
    }
    footer.push(Line::from(""));
    footer.push(hint_line(&[
        ("↑↓", "select"),
        ("Enter", "confirm"),
        ("y", "yes"),
        ("Esc", "cancel"),
    ]));

    let title = format!("Confirm {}", capitalize(verb));
    render_dialog(
        frame,
        DialogConfig {
            title: &title,
            accent: Color::Red,
            message: &message,
            footer,
            max_width: 56,
        },
    );
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Truncate to `max_chars` characters with an ellipsis
fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
