//! Layout components (sidebar, status bar)

use super::widgets::{render_scrollable_list, titled_list};
use crate::app::App;
use crate::state::{View, SIDEBAR_VIEWS};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{ListItem, Paragraph},
    Frame,
};

/// Sidebar width in columns
const SIDEBAR_WIDTH: u16 = 24;

/// Split the screen into sidebar, main content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(SIDEBAR_WIDTH), // Sidebar
            Constraint::Min(0),                // Main content
        ])
        .split(rows[0]);

    (columns[0], columns[1], rows[1])
}

/// Draw the navigation sidebar
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let logged_in = app.session.is_logged_in();

    let items: Vec<ListItem> = SIDEBAR_VIEWS
        .iter()
        .map(|view| {
            let locked = view.requires_login() && !logged_in;
            let style = if locked {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            };
            let marker = if locked { " 🔒" } else { "" };
            ListItem::new(Line::from(Span::styled(
                format!("{}{marker}", view.label()),
                style,
            )))
        })
        .collect();

    let title = match &app.state.current_user {
        Some(user) => format!(" {} ", user.username),
        None => " Menu ".to_string(),
    };

    let on_sidebar_view = SIDEBAR_VIEWS.contains(&app.state.current_view);
    render_scrollable_list(
        frame,
        area,
        titled_list(title, items, on_sidebar_view),
        app.state.sidebar_index,
    );
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    let session = if app.session.is_logged_in() {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    } else {
        Span::styled(" ○ ", Style::default().fg(Color::Red))
    };
    spans.push(session);

    spans.push(Span::styled(
        view_hints(&app.state.current_view, app.session.is_logged_in()),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Yellow)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

/// Keyboard hints for the current view
fn view_hints(view: &View, logged_in: bool) -> String {
    let session = if logged_in { "L:logout" } else { "l:login" };
    match view {
        View::Home => format!("Tab/S-Tab:menu  /:search  {session}  q:quit"),
        View::Courses | View::Articles | View::Newsletters => {
            "j/k:nav  [/]:page  ^R:reload  Tab:menu  Esc:back".to_string()
        }
        View::Categories => "j/k:nav  [/]:page  n:new  d:delete  Tab:menu".to_string(),
        View::Comments => {
            "j/k:nav  [/]:page  a:accept  r:reject  d:delete  Enter:answer".to_string()
        }
        View::Contacts => "j/k:nav  [/]:page  Enter:answer  Tab:menu".to_string(),
        View::Users => "j/k:nav  [/]:page  b:ban  d:delete  Tab:menu".to_string(),
        View::Search => "type to edit  Enter:search  Esc:back".to_string(),
        _ => "Tab/S-Tab:field  Enter:press  ^S:submit  ^U:clear  Esc:cancel".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_views_share_form_hints() {
        assert_eq!(view_hints(&View::Login, false), view_hints(&View::ContactUs, true));
        assert!(view_hints(&View::Login, false).contains("^S:submit"));
    }

    #[test]
    fn test_home_hint_follows_session() {
        assert!(view_hints(&View::Home, false).contains("l:login"));
        assert!(view_hints(&View::Home, true).contains("L:logout"));
    }

    #[test]
    fn test_layout_reserves_status_row() {
        let (sidebar, main, status) = create_layout(Rect::new(0, 0, 100, 30));
        assert_eq!(status.height, 1);
        assert_eq!(status.y, 29);
        assert_eq!(sidebar.width, SIDEBAR_WIDTH);
        assert_eq!(main.width, 100 - SIDEBAR_WIDTH);
    }
}
