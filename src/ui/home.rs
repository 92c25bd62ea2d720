//! Home dashboard

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the home dashboard: session summary and latest courses
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(area);

    let welcome = match &app.state.current_user {
        Some(user) => vec![
            Line::from(vec![
                Span::raw("Signed in as "),
                Span::styled(
                    user.username.clone(),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!(" ({})", user.role), Style::default().fg(Color::Gray)),
            ]),
            Line::from(Span::styled(
                app.config.api_base_url.clone(),
                Style::default().fg(Color::DarkGray),
            )),
        ],
        None => vec![
            Line::from("Not signed in. Press 'l' to log in."),
            Line::from(Span::styled(
                app.config.api_base_url.clone(),
                Style::default().fg(Color::DarkGray),
            )),
        ],
    };
    frame.render_widget(
        Paragraph::new(welcome).block(
            Block::default()
                .title(" Course Admin ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        ),
        chunks[0],
    );

    let latest: Vec<Line> = if app.state.courses.is_empty() {
        vec![Line::from(Span::styled(
            "No courses yet.",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        app.state
            .courses
            .iter()
            .take(chunks[1].height.saturating_sub(2) as usize)
            .map(|course| {
                Line::from(vec![
                    Span::styled(
                        format!("{:<8}", course.price_label()),
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::raw(course.name.clone()),
                ])
            })
            .collect()
    };
    frame.render_widget(
        Paragraph::new(latest)
            .wrap(Wrap { trim: true })
            .block(Block::default().title(" Latest courses ").borders(Borders::ALL)),
        chunks[1],
    );
}
