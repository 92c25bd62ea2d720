//! Button component for TUI

use crate::state::{Button, ButtonTarget};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a generic button with border
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    content: &str,
    is_selected: bool,
    is_enabled: bool,
    accent: Color,
) {
    let border_style = if is_selected {
        Style::default().fg(accent)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = if !is_enabled {
        Style::default().fg(Color::DarkGray)
    } else if is_selected {
        Style::default().fg(accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(format!(" {content} ")).style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}

/// Render a form button; the target decides the decoration
pub fn render_form_button(frame: &mut Frame, area: Rect, button: &Button, is_selected: bool) {
    let (content, accent) = match &button.target {
        ButtonTarget::Native => (button.label.clone(), Color::Green),
        ButtonTarget::Link(_) => (format!("{} →", button.label), Color::Cyan),
        ButtonTarget::Anchor(_) => (format!("{} ↗", button.label), Color::Blue),
    };
    render_button(frame, area, &content, is_selected, !button.disabled, accent);
}
