//! Paginated admin list views

use super::widgets::{render_scrollable_list, titled_list};
use crate::app::App;
use crate::state::{Article, Category, Comment, Contact, Course, Newsletter, User, View};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, ListItem, Paragraph},
    Frame,
};

/// Draw the list behind the current view
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    let page = &state.paginator;

    let (empty_hint, items): (&str, Vec<ListItem>) = match state.current_view {
        View::Courses => (
            "No courses.",
            page.slice(&state.courses).iter().map(course_row).collect(),
        ),
        View::Categories => (
            "No categories. Press 'n' to create one.",
            page.slice(&state.categories).iter().map(category_row).collect(),
        ),
        View::Articles => (
            "No articles.",
            page.slice(&state.articles).iter().map(article_row).collect(),
        ),
        View::Comments => (
            "No comments.",
            page.slice(&state.comments).iter().map(comment_row).collect(),
        ),
        View::Contacts => (
            "No messages.",
            page.slice(&state.contacts).iter().map(contact_row).collect(),
        ),
        View::Newsletters => (
            "No subscribers.",
            page.slice(&state.newsletters)
                .iter()
                .map(newsletter_row)
                .collect(),
        ),
        View::Users => (
            "No users.",
            page.slice(&state.users).iter().map(user_row).collect(),
        ),
        _ => return,
    };

    let len = state.list_len();
    let title = format!(
        " {} ({len}) · page {} ",
        state.current_view.label(),
        page.label(len)
    );

    if items.is_empty() {
        let content = Paragraph::new(empty_hint)
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().title(title).borders(Borders::ALL));
        frame.render_widget(content, area);
        return;
    }

    render_scrollable_list(
        frame,
        area,
        titled_list(title, items, true),
        state.selected_index,
    );
}

fn bold() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

fn course_row(course: &Course) -> ListItem<'static> {
    row(vec![
        cell(&course.name, 32, bold()),
        cell(&course.price_label(), 10, Style::default().fg(Color::Yellow)),
        cell(&course.status, 12, Style::default().fg(Color::Gray)),
        Span::raw(format!("{} students", course.registers)),
    ])
}

fn category_row(category: &Category) -> ListItem<'static> {
    row(vec![
        cell(&category.title, 32, bold()),
        Span::styled(category.name.clone(), Style::default().fg(Color::Gray)),
    ])
}

fn article_row(article: &Article) -> ListItem<'static> {
    let (mark, color) = if article.is_published() {
        ("published", Color::Green)
    } else {
        ("draft", Color::Yellow)
    };
    let author = article
        .creator
        .as_ref()
        .map(|c| c.name.clone())
        .unwrap_or_default();
    row(vec![
        cell(&article.title, 40, bold()),
        cell(mark, 11, Style::default().fg(color)),
        Span::raw(author),
    ])
}

fn comment_row(comment: &Comment) -> ListItem<'static> {
    let (mark, color) = if comment.is_accepted() {
        ("✓", Color::Green)
    } else {
        ("✗", Color::Red)
    };
    row(vec![
        Span::styled(format!("{mark} "), Style::default().fg(color)),
        cell(comment.author(), 16, Style::default().fg(Color::Cyan)),
        cell(comment.course_name(), 24, Style::default().fg(Color::Gray)),
        Span::raw(single_line(&comment.body)),
    ])
}

fn contact_row(contact: &Contact) -> ListItem<'static> {
    let (mark, color) = if contact.is_answered() {
        ("answered", Color::Green)
    } else {
        ("open", Color::Yellow)
    };
    row(vec![
        cell(mark, 10, Style::default().fg(color)),
        cell(&contact.email, 28, Style::default().fg(Color::Cyan)),
        Span::raw(single_line(&contact.body)),
    ])
}

fn newsletter_row(newsletter: &Newsletter) -> ListItem<'static> {
    row(vec![
        cell(&newsletter.email, 36, Style::default()),
        Span::styled(
            date(&newsletter.created_at),
            Style::default().fg(Color::Gray),
        ),
    ])
}

fn user_row(user: &User) -> ListItem<'static> {
    let role_color = if user.is_admin() {
        Color::Magenta
    } else {
        Color::Gray
    };
    row(vec![
        cell(&user.username, 20, bold()),
        cell(&user.role, 8, Style::default().fg(role_color)),
        cell(&user.email, 30, Style::default().fg(Color::Cyan)),
        Span::raw(user.phone.clone()),
    ])
}

fn row(spans: Vec<Span<'static>>) -> ListItem<'static> {
    ListItem::new(Line::from(spans))
}

/// Fixed-width column, cut on char boundaries
fn cell(text: &str, width: usize, style: Style) -> Span<'static> {
    let count = text.chars().count();
    let padded = if count > width {
        let cut: String = text.chars().take(width.saturating_sub(2)).collect();
        format!("{cut}… ")
    } else {
        format!("{text:<width$} ")
    };
    Span::styled(padded, style)
}

fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn date(value: &Option<chrono::DateTime<chrono::Utc>>) -> String {
    value
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}
