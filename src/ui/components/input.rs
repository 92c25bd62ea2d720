//! Input component: a bordered field coloured by its validity

use crate::state::{FieldStatus, FormStore, Input};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Border colour for a field status
pub fn status_color(status: FieldStatus) -> Color {
    match status {
        FieldStatus::Success => Color::Green,
        FieldStatus::Error => Color::Red,
    }
}

/// Rows an input needs, borders included
pub fn input_height(input: &Input) -> u16 {
    if input.is_multiline() {
        6
    } else {
        3
    }
}

/// Draw one form input
pub fn render_input(
    frame: &mut Frame,
    area: Rect,
    input: &Input,
    store: &FormStore,
    is_active: bool,
) {
    let status = input.status(store);
    let mut border_style = Style::default().fg(status_color(status));
    if is_active {
        border_style = border_style.add_modifier(Modifier::BOLD);
    }

    let text_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let display_value = input.display_value(store);
    let cursor = if is_active { "▌" } else { "" };
    let cursor_span = Span::styled(cursor, Style::default().fg(Color::Cyan));

    let content = if input.is_multiline() {
        let mut lines: Vec<Line> = display_value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), text_style)))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor_span);
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_value, text_style),
            cursor_span,
        ]))
    };

    let hints: Vec<String> = input.validators.iter().map(|v| v.label()).collect();
    let title = if is_active && !hints.is_empty() {
        format!(" {} ({}) ", input.label, hints.join(", "))
    } else {
        format!(" {} ", input.label)
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}
