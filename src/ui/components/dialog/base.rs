//! Shared dialog frame: centred box, bold title, wrapped message, footer

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// What to put in a dialog
pub struct DialogConfig<'a> {
    pub title: &'a str,
    /// Title and border colour
    pub accent: Color,
    /// Body text; `\n` starts a new paragraph
    pub message: &'a str,
    /// Lines drawn after the message, e.g. options and key hints
    pub footer: Vec<Line<'a>>,
    pub max_width: u16,
}

/// Render a centered dialog overlay
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) {
    let area = frame.area();
    // 1 border + 1 padding on each side
    let chrome = 4u16;
    let max_line_width = config.max_width.saturating_sub(chrome).max(1) as usize;

    let wrapped = wrap_text(config.message, max_line_width);
    let widest = wrapped
        .iter()
        .map(|l| l.chars().count())
        .chain(std::iter::once(config.title.chars().count()))
        .chain(config.footer.iter().map(Line::width))
        .max()
        .unwrap_or(0) as u16;

    let width = (widest + chrome).min(config.max_width).min(area.width);
    let footer_rows = if config.footer.is_empty() {
        0
    } else {
        config.footer.len() as u16 + 1
    };
    // title + blank + message + footer + borders
    let height = (2 + wrapped.len() as u16 + footer_rows + 2).min(area.height);

    let dialog_area = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    };

    frame.render_widget(Clear, dialog_area);

    let mut content = vec![
        Line::from(Span::styled(
            config.title,
            Style::default()
                .fg(config.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    content.extend(wrapped.into_iter().map(Line::from));
    if !config.footer.is_empty() {
        content.push(Line::from(""));
        content.extend(config.footer);
    }

    let dialog = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(config.accent))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black).fg(Color::White));

    frame.render_widget(dialog, dialog_area);
}

/// Key hint line such as "Enter confirm  Esc cancel"
pub fn hint_line<'a>(hints: &[(&'a str, &'a str)]) -> Line<'a> {
    let mut spans = Vec::new();
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {action}"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

/// Greedy word wrap measured in characters
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0;
        for word in paragraph.split_whitespace() {
            let word_width = word.chars().count();
            if current_width > 0 && current_width + 1 + word_width > max_width {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            if current_width > 0 {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(word);
            current_width += word_width;
        }
        lines.push(current);
    }

    lines
}
