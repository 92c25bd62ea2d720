//! Search view: query box and grouped results

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let query = Paragraph::new(Line::from(vec![
        Span::raw(app.state.search_query.clone()),
        Span::styled("▌", Style::default().fg(Color::Cyan)),
    ]))
    .block(
        Block::default()
            .title(" Search courses and articles ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(query, chunks[0]);

    let lines = match &app.state.search_results {
        None => vec![Line::from(Span::styled(
            "Type a query and press Enter.",
            Style::default().fg(Color::DarkGray),
        ))],
        Some(results) if results.is_empty() => vec![Line::from(Span::styled(
            "Nothing matched.",
            Style::default().fg(Color::DarkGray),
        ))],
        Some(results) => {
            let mut lines = vec![heading("Courses", results.all_result_courses.len())];
            lines.extend(results.all_result_courses.iter().map(|c| {
                Line::from(vec![
                    Span::raw("  "),
                    Span::raw(c.name.clone()),
                    Span::styled(
                        format!("  {}", c.price_label()),
                        Style::default().fg(Color::Yellow),
                    ),
                ])
            }));
            lines.push(Line::from(""));
            lines.push(heading("Articles", results.all_result_articles.len()));
            lines.extend(
                results
                    .all_result_articles
                    .iter()
                    .map(|a| Line::from(format!("  {}", a.title))),
            );
            lines
        }
    };

    frame.render_widget(
        Paragraph::new(lines).block(Block::default().title(" Results ").borders(Borders::ALL)),
        chunks[1],
    );
}

fn heading(label: &str, count: usize) -> Line<'static> {
    Line::from(Span::styled(
        format!("{label} ({count})"),
        Style::default().add_modifier(Modifier::BOLD),
    ))
}
