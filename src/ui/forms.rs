//! Form view: inputs on the left, action buttons on the right

use super::components::{input_height, render_form_button, render_input, BUTTON_HEIGHT};
use crate::app::App;
use crate::state::{ActiveForm, Form};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of the button column
const BUTTON_COLUMN_WIDTH: u16 = 24;

/// Draw the mounted form, if any
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(form) = &app.state.form else {
        return;
    };

    let mut title = format!(" {} ", form.kind.title());
    if let Some(context) = form_context(app) {
        title = format!(" {} · {} ", form.kind.title(), context);
    }

    let outer = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(BUTTON_COLUMN_WIDTH)])
        .split(inner);

    draw_inputs(frame, columns[0], form);
    draw_buttons(frame, columns[1], form);
}

/// Who or what an answer form responds to
fn form_context(app: &App) -> Option<String> {
    let params = &app.state.view_params;
    if let Some(email) = &params.contact_email {
        return Some(format!("to {email}"));
    }
    let comment_id = params.comment_id.as_ref()?;
    app.state
        .comments
        .iter()
        .find(|c| &c.id == comment_id)
        .map(|c| format!("reply to {}", c.author()))
}

fn draw_inputs(frame: &mut Frame, area: Rect, form: &ActiveForm) {
    let mut constraints: Vec<Constraint> = form
        .inputs
        .iter()
        .map(|input| Constraint::Length(input_height(input)))
        .collect();
    constraints.push(Constraint::Min(0));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (index, input) in form.inputs.iter().enumerate() {
        render_input(frame, rows[index], input, &form.store, form.focus() == index);
    }

    let validity = if form.can_submit() {
        Span::styled("✓ ready to submit", Style::default().fg(Color::Green))
    } else {
        Span::styled("✗ fill every field correctly", Style::default().fg(Color::Red))
    };
    let footer_area = rows[form.inputs.len()];
    if footer_area.height > 0 {
        frame.render_widget(Paragraph::new(Line::from(validity)), footer_area);
    }
}

fn draw_buttons(frame: &mut Frame, area: Rect, form: &ActiveForm) {
    let buttons = form.buttons();
    let mut constraints: Vec<Constraint> = buttons
        .iter()
        .map(|_| Constraint::Length(BUTTON_HEIGHT))
        .collect();
    constraints.push(Constraint::Min(0));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let focused = form.focused_button_index();
    for (index, button) in buttons.iter().enumerate() {
        render_form_button(frame, rows[index], button, focused == Some(index));
    }
}
