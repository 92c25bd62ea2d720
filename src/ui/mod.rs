//! UI module for rendering the TUI

mod components;
mod forms;
mod home;
mod layout;
mod lists;
mod search;
mod widgets;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (sidebar_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_sidebar(frame, sidebar_area, app);

    match &app.state.current_view {
        View::Home => home::draw(frame, main_area, app),
        View::Search => search::draw(frame, main_area, app),
        view if view.is_form_view() => forms::draw(frame, main_area, app),
        _ => lists::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);

    // Overlays: errors sit above confirmations
    if let Some(action) = &app.state.pending_action {
        components::render_confirm_dialog(frame, action);
    }
    if let Some(message) = app.state.current_error() {
        components::render_error_dialog(frame, message);
    }
}
