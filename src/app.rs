//! Application state and core logic

use crate::api::{ApiClientTrait, ApiError, ContactRequest, RegisterRequest};
use crate::config::AdminConfig;
use crate::session::Session;
use crate::state::{
    ActiveForm, AppState, ButtonAction, Form, FormKind, InputEdit, Paginator, PendingAction,
    PendingKind, View, ViewParams, SIDEBAR_VIEWS,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Oldest entries are dropped beyond this many back steps
const MAX_HISTORY: usize = 32;

/// Plain or shifted character, not part of a Ctrl/Alt chord
fn typed_char(key: &KeyEvent) -> Option<char> {
    let chord = key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
    match key.code {
        KeyCode::Char(c) if !chord => Some(c),
        _ => None,
    }
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Backend client
    pub api: Box<dyn ApiClientTrait>,
    /// Signed-in admin
    pub session: Session,
    /// Loaded configuration
    pub config: AdminConfig,
    /// One-line feedback shown in the status bar
    pub status_message: Option<String>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: AdminConfig, mut api: Box<dyn ApiClientTrait>, session: Session) -> Self {
        api.set_token(session.token().map(str::to_string));
        let mut state = AppState::default();
        state.paginator = Paginator::new(config.effective_page_size());

        Self {
            state,
            api,
            session,
            config,
            status_message: None,
            quit: false,
        }
    }

    /// Restore the signed-in user and load the landing data
    pub async fn start(&mut self) {
        if self.session.is_logged_in() {
            match self.api.me().await {
                Ok(user) => {
                    tracing::info!("Restored session for {}", user.username);
                    self.state.current_user = Some(user);
                }
                Err(e) => self.handle_api_error("Failed to restore session", e),
            }
        }
        self.load_view_data(&View::Courses).await;
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Report a failed request. An auth failure also ends the session.
    fn handle_api_error(&mut self, context: &str, err: ApiError) {
        tracing::warn!("{context}: {err}");
        if err.is_unauthorized() {
            self.end_session();
        }
        self.push_error(format!("{context}: {err}"));
    }

    fn end_session(&mut self) {
        if let Err(e) = self.session.logout() {
            tracing::warn!("Failed to clear stored session: {e}");
        }
        self.api.set_token(None);
        self.state.current_user = None;
    }

    /// Sign in with a fresh token and fetch the user behind it
    async fn begin_session(&mut self, token: String) {
        if let Err(e) = self.session.login(token.clone()) {
            tracing::warn!("Failed to persist session: {e}");
        }
        self.api.set_token(Some(token));
        match self.api.me().await {
            Ok(user) => {
                tracing::info!("Logged in as {}", user.username);
                self.status_message = Some(format!("Welcome, {}", user.name));
                self.state.current_user = Some(user);
            }
            Err(e) => self.handle_api_error("Failed to load profile", e),
        }
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Navigate to a new view
    pub fn navigate(&mut self, view: View, params: ViewParams) {
        if view.requires_login() && !self.session.is_logged_in() {
            self.status_message = Some(format!("Log in to open {}", view.label()));
            self.navigate(View::Login, ViewParams::default());
            return;
        }

        tracing::info!("Navigate to {:?}", view);
        let previous = std::mem::replace(&mut self.state.current_view, view.clone());
        let previous_params = std::mem::replace(&mut self.state.view_params, params);
        self.state.view_history.push((previous, previous_params));
        if self.state.view_history.len() > MAX_HISTORY {
            self.state.view_history.remove(0);
        }
        self.enter_view(&view);
    }

    /// Go back to the previous view
    pub fn go_back(&mut self) {
        match self.state.view_history.pop() {
            Some((view, params)) => {
                self.state.current_view = view.clone();
                self.state.view_params = params;
                self.enter_view(&view);
            }
            None => {
                self.state.current_view = View::Home;
                self.enter_view(&View::Home);
            }
        }
    }

    /// Mount the view's form and reset list selection
    fn enter_view(&mut self, view: &View) {
        self.state.form =
            FormKind::from_view(view).map(|kind| ActiveForm::new(kind, &self.config.site_url));
        self.state.reset_selection();
        if let Some(index) = SIDEBAR_VIEWS.iter().position(|v| v == view) {
            self.state.sidebar_index = index;
        }
    }

    /// Navigate and fetch whatever the view lists
    pub async fn open(&mut self, view: View, params: ViewParams) {
        self.navigate(view, params);
        let current = self.state.current_view.clone();
        self.load_view_data(&current).await;
    }

    /// Fetch the data behind a list view
    pub async fn load_view_data(&mut self, view: &View) {
        let result = match view {
            View::Courses | View::Home => self.api.list_courses().await.map(|v| {
                self.state.courses = v;
            }),
            View::Categories => self.api.list_categories().await.map(|v| {
                self.state.categories = v;
            }),
            View::Articles => self.api.list_articles().await.map(|v| {
                self.state.articles = v;
            }),
            View::Comments => self.api.list_comments().await.map(|v| {
                self.state.comments = v;
            }),
            View::Contacts => self.api.list_contacts().await.map(|v| {
                self.state.contacts = v;
            }),
            View::Newsletters => self.api.list_newsletters().await.map(|v| {
                self.state.newsletters = v;
            }),
            View::Users => self.api.list_users().await.map(|v| {
                self.state.users = v;
            }),
            _ => Ok(()),
        };

        match result {
            Ok(()) => self.state.clamp_selection(),
            Err(e) => self.handle_api_error(&format!("Failed to load {}", view.label()), e),
        }
    }

    // ------------------------------------------------------------------
    // Key handling
    // ------------------------------------------------------------------

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Handle confirm dialog (modal)
        if self.state.pending_action.is_some() {
            self.handle_confirm_key(key).await;
            return Ok(());
        }

        self.status_message = None;

        let view = self.state.current_view.clone();
        if view.is_form_view() {
            self.handle_form_key(key).await;
            return Ok(());
        }
        if view == View::Search {
            self.handle_search_key(key).await;
            return Ok(());
        }

        if self.handle_global_key(key).await {
            return Ok(());
        }

        if view.is_list_view() {
            self.handle_list_key(key).await;
        }
        Ok(())
    }

    /// Sidebar movement, login/logout and quit. Returns true if consumed.
    async fn handle_global_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') => {
                self.quit = true;
            }
            KeyCode::Tab => self.open_sidebar_entry(self.state.sidebar_index + 1).await,
            KeyCode::BackTab => {
                let count = SIDEBAR_VIEWS.len();
                self.open_sidebar_entry(self.state.sidebar_index + count - 1)
                    .await
            }
            KeyCode::Char('l') if !self.session.is_logged_in() => {
                self.navigate(View::Login, ViewParams::default());
            }
            KeyCode::Char('L') if self.session.is_logged_in() => {
                self.end_session();
                self.status_message = Some("Logged out".to_string());
                self.navigate(View::Home, ViewParams::default());
            }
            KeyCode::Char('/') => self.navigate(View::Search, ViewParams::default()),
            KeyCode::Esc => self.go_back(),
            _ => return false,
        }
        true
    }

    /// Sidebar entries are top-level: Esc from one goes Home
    async fn open_sidebar_entry(&mut self, index: usize) {
        let view = SIDEBAR_VIEWS[index % SIDEBAR_VIEWS.len()].clone();
        self.open(view, ViewParams::default()).await;
        self.state.view_history.clear();
    }

    /// Keys shared by every list, then per-view actions
    async fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.state.move_selection_down(),
            KeyCode::Up | KeyCode::Char('k') => self.state.move_selection_up(),
            KeyCode::PageDown | KeyCode::Char(']') => self.state.next_page(),
            KeyCode::PageUp | KeyCode::Char('[') => self.state.prev_page(),
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                let view = self.state.current_view.clone();
                self.load_view_data(&view).await;
            }
            _ => self.handle_list_action_key(key).await,
        }
    }

    async fn handle_list_action_key(&mut self, key: KeyEvent) {
        let Some(index) = self.state.selected_item_index() else {
            if self.state.current_view == View::Categories && key.code == KeyCode::Char('n') {
                self.navigate(View::CategoryCreate, ViewParams::default());
            }
            return;
        };

        let view = self.state.current_view.clone();
        match (view, key.code) {
            (View::Categories, KeyCode::Char('n')) => {
                self.navigate(View::CategoryCreate, ViewParams::default());
            }
            (View::Categories, KeyCode::Char('d')) => {
                let category = &self.state.categories[index];
                self.state.pending_action = Some(PendingAction::new(
                    PendingKind::DeleteCategory,
                    &category.id,
                    &category.title,
                ));
            }
            (View::Comments, KeyCode::Char('a')) => {
                let id = self.state.comments[index].id.clone();
                let result = self.api.accept_comment(&id).await;
                self.finish_list_write(result, "Comment accepted", "Failed to accept comment")
                    .await;
            }
            (View::Comments, KeyCode::Char('r')) => {
                let id = self.state.comments[index].id.clone();
                let result = self.api.reject_comment(&id).await;
                self.finish_list_write(result, "Comment rejected", "Failed to reject comment")
                    .await;
            }
            (View::Comments, KeyCode::Char('d')) => {
                let comment = &self.state.comments[index];
                self.state.pending_action = Some(PendingAction::new(
                    PendingKind::DeleteComment,
                    &comment.id,
                    &comment.body,
                ));
            }
            (View::Comments, KeyCode::Enter) => {
                let params = ViewParams {
                    comment_id: Some(self.state.comments[index].id.clone()),
                    ..Default::default()
                };
                self.navigate(View::CommentAnswer, params);
            }
            (View::Contacts, KeyCode::Enter) => {
                let params = ViewParams {
                    contact_email: Some(self.state.contacts[index].email.clone()),
                    ..Default::default()
                };
                self.navigate(View::ContactAnswer, params);
            }
            (View::Users, KeyCode::Char('b')) => {
                let user = &self.state.users[index];
                self.state.pending_action =
                    Some(PendingAction::new(PendingKind::BanUser, &user.id, &user.name));
            }
            (View::Users, KeyCode::Char('d')) => {
                let user = &self.state.users[index];
                self.state.pending_action =
                    Some(PendingAction::new(PendingKind::DeleteUser, &user.id, &user.name));
            }
            _ => {}
        }
    }

    /// Reload the current list after a write and report the outcome
    async fn finish_list_write(&mut self, result: Result<(), ApiError>, ok: &str, failed: &str) {
        match result {
            Ok(()) => {
                tracing::info!("{ok}");
                self.status_message = Some(ok.to_string());
                let view = self.state.current_view.clone();
                self.load_view_data(&view).await;
            }
            Err(e) => self.handle_api_error(failed, e),
        }
    }

    async fn handle_confirm_key(&mut self, key: KeyEvent) {
        let Some(pending) = self.state.pending_action.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('k') => {
                pending.selected_option = !pending.selected_option;
            }
            KeyCode::Char('y') => {
                pending.selected_option = true;
                self.confirm_pending().await;
            }
            KeyCode::Enter => self.confirm_pending().await,
            KeyCode::Esc | KeyCode::Char('n') => self.state.pending_action = None,
            _ => {}
        }
    }

    async fn confirm_pending(&mut self) {
        let Some(pending) = self.state.pending_action.take() else {
            return;
        };
        if !pending.selected_option {
            return;
        }

        let id = pending.entity_id.as_str();
        let (result, ok, failed) = match pending.kind {
            PendingKind::DeleteCategory => (
                self.api.delete_category(id).await,
                "Category deleted",
                "Failed to delete category",
            ),
            PendingKind::DeleteComment => (
                self.api.delete_comment(id).await,
                "Comment deleted",
                "Failed to delete comment",
            ),
            PendingKind::DeleteUser => (
                self.api.delete_user(id).await,
                "User deleted",
                "Failed to delete user",
            ),
            PendingKind::BanUser => (
                self.api.ban_user(id).await,
                "User banned",
                "Failed to ban user",
            ),
        };
        self.finish_list_write(result, ok, failed).await;
    }

    async fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.go_back(),
            KeyCode::Enter => self.run_search().await,
            KeyCode::Backspace => {
                self.state.search_query.pop();
            }
            _ => {
                if let Some(c) = typed_char(&key) {
                    self.state.search_query.push(c);
                }
            }
        }
    }

    async fn run_search(&mut self) {
        let query = self.state.search_query.trim().to_string();
        if query.is_empty() {
            self.status_message = Some("Type something to search".to_string());
            return;
        }
        match self.api.search(&query).await {
            Ok(results) => {
                tracing::info!(
                    "Search {query:?}: {} courses, {} articles",
                    results.all_result_courses.len(),
                    results.all_result_articles.len()
                );
                self.state.search_results = Some(results);
            }
            Err(e) => self.handle_api_error("Search failed", e),
        }
    }

    // ------------------------------------------------------------------
    // Forms
    // ------------------------------------------------------------------

    async fn handle_form_key(&mut self, key: KeyEvent) {
        let Some(form) = self.state.form.as_mut() else {
            return;
        };

        match key.code {
            KeyCode::Esc => self.go_back(),
            KeyCode::Tab => form.next_focus(),
            KeyCode::BackTab => form.prev_focus(),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_form().await;
            }
            KeyCode::Enter => {
                if let Some(button) = form.focused_button() {
                    match button.activate() {
                        Some(action) => self.run_button_action(action).await,
                        None => {
                            self.status_message =
                                Some("Fill in every field correctly first".to_string());
                        }
                    }
                } else if form.is_focused_multiline() {
                    form.handle_edit(InputEdit::Newline);
                } else {
                    form.next_focus();
                }
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                form.handle_edit(InputEdit::Clear);
            }
            KeyCode::Backspace => form.handle_edit(InputEdit::Backspace),
            _ => {
                if let Some(c) = typed_char(&key) {
                    form.handle_edit(InputEdit::Insert(c));
                }
            }
        }
    }

    async fn run_button_action(&mut self, action: ButtonAction) {
        match action {
            ButtonAction::Navigate(view) => self.open(view, ViewParams::default()).await,
            ButtonAction::OpenUrl(href) => {
                self.status_message = Some(format!("Open in your browser: {href}"));
            }
            ButtonAction::Submit => self.submit_form().await,
        }
    }

    /// Send the mounted form if every field is valid
    pub async fn submit_form(&mut self) {
        let Some(form) = self.state.form.as_ref() else {
            return;
        };
        if !form.can_submit() {
            self.status_message = Some("Fill in every field correctly first".to_string());
            return;
        }

        let kind = form.kind;
        let value = |id: &str| form.value(id).trim().to_string();

        match kind {
            FormKind::Login => {
                let identifier = value("identifier");
                // Passwords are sent as typed
                let password = form.value("password").to_string();
                match self.api.login(&identifier, &password).await {
                    Ok(token) => {
                        self.begin_session(token).await;
                        self.open(View::Home, ViewParams::default()).await;
                    }
                    Err(e) => self.handle_api_error("Login failed", e),
                }
            }
            FormKind::Register => {
                let password = form.value("password").to_string();
                let request = RegisterRequest {
                    name: value("name"),
                    username: value("username"),
                    email: value("email"),
                    phone: value("phone"),
                    confirm_password: password.clone(),
                    password,
                };
                match self.api.register(&request).await {
                    Ok(token) => {
                        self.begin_session(token).await;
                        self.open(View::Home, ViewParams::default()).await;
                    }
                    Err(e) => self.handle_api_error("Registration failed", e),
                }
            }
            FormKind::Category => {
                let (title, name) = (value("title"), value("shortname"));
                match self.api.create_category(&title, &name).await {
                    Ok(category) => {
                        tracing::info!("Created category {}", category.id);
                        self.status_message = Some(format!("Category {} created", category.title));
                        self.open(View::Categories, ViewParams::default()).await;
                    }
                    Err(e) => self.handle_api_error("Failed to create category", e),
                }
            }
            FormKind::ContactUs => {
                let request = ContactRequest {
                    name: value("name"),
                    email: value("email"),
                    phone: value("phone"),
                    body: value("body"),
                };
                match self.api.send_contact(&request).await {
                    Ok(()) => {
                        self.status_message = Some("Message sent".to_string());
                        self.navigate(View::Home, ViewParams::default());
                    }
                    Err(e) => self.handle_api_error("Failed to send message", e),
                }
            }
            FormKind::Newsletter => {
                let email = value("email");
                match self.api.subscribe_newsletter(&email).await {
                    Ok(()) => {
                        self.status_message = Some(format!("{email} subscribed"));
                        self.navigate(View::Home, ViewParams::default());
                    }
                    Err(e) => self.handle_api_error("Failed to subscribe", e),
                }
            }
            FormKind::CommentAnswer => {
                let body = value("body");
                let Some(id) = self.state.view_params.comment_id.clone() else {
                    self.push_error("No comment selected");
                    return;
                };
                match self.api.answer_comment(&id, &body).await {
                    Ok(()) => {
                        self.status_message = Some("Answer sent".to_string());
                        self.open(View::Comments, ViewParams::default()).await;
                    }
                    Err(e) => self.handle_api_error("Failed to answer comment", e),
                }
            }
            FormKind::ContactAnswer => {
                let body = value("body");
                let Some(email) = self.state.view_params.contact_email.clone() else {
                    self.push_error("No contact selected");
                    return;
                };
                match self.api.answer_contact(&email, &body).await {
                    Ok(()) => {
                        self.status_message = Some(format!("Answer sent to {email}"));
                        self.open(View::Contacts, ViewParams::default()).await;
                    }
                    Err(e) => self.handle_api_error("Failed to answer contact", e),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockApiClientTrait;
    use crate::state::{Category, Comment, User};
    use mockall::predicate::eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn admin() -> User {
        User {
            id: "u1".to_string(),
            name: "Site Admin".to_string(),
            username: "siteadmin".to_string(),
            email: "admin@mail.com".to_string(),
            phone: "09123456789".to_string(),
            role: "ADMIN".to_string(),
            created_at: None,
        }
    }

    fn mock() -> MockApiClientTrait {
        let mut api = MockApiClientTrait::new();
        api.expect_set_token().return_const(());
        api
    }

    fn app_with(api: MockApiClientTrait) -> App {
        App::new(AdminConfig::default(), Box::new(api), Session::in_memory())
    }

    fn logged_in_app(api: MockApiClientTrait) -> App {
        let mut session = Session::in_memory();
        session.login("token").unwrap();
        App::new(AdminConfig::default(), Box::new(api), session)
    }

    fn fill(app: &mut App, values: &[(&str, &str)]) {
        let form = app.state.form.as_mut().unwrap();
        for (id, value) in values {
            form.set_value(id, value);
        }
    }

    async fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).await.unwrap();
        }
    }

    mod navigation {
        use super::*;

        #[tokio::test]
        async fn test_admin_view_redirects_to_login() {
            let mut app = app_with(mock());
            app.navigate(View::Users, ViewParams::default());
            assert_eq!(app.state.current_view, View::Login);
            assert!(app.state.form.is_some());
        }

        #[tokio::test]
        async fn test_form_is_mounted_and_dropped() {
            let mut app = app_with(mock());
            app.navigate(View::ContactUs, ViewParams::default());
            assert_eq!(app.state.form.as_ref().map(|f| f.kind), Some(FormKind::ContactUs));

            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert_eq!(app.state.current_view, View::Home);
            assert!(app.state.form.is_none());
        }

        #[tokio::test]
        async fn test_tab_cycles_sidebar() {
            let mut api = mock();
            api.expect_list_courses().returning(|| Ok(vec![]));
            let mut app = app_with(api);

            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            assert_eq!(app.state.current_view, View::Courses);
            assert_eq!(app.state.sidebar_index, 1);
        }

        #[tokio::test]
        async fn test_sidebar_hops_do_not_build_history() {
            let mut api = mock();
            api.expect_list_courses().returning(|| Ok(vec![]));
            api.expect_list_articles().returning(|| Ok(vec![]));
            let mut app = app_with(api);

            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            assert_eq!(app.state.current_view, View::Articles);
            assert!(app.state.view_history.is_empty());

            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert_eq!(app.state.current_view, View::Home);
        }

        #[tokio::test]
        async fn test_history_is_capped() {
            let mut app = app_with(mock());
            for _ in 0..MAX_HISTORY {
                app.navigate(View::Login, ViewParams::default());
                app.navigate(View::Register, ViewParams::default());
            }
            assert_eq!(app.state.view_history.len(), MAX_HISTORY);

            app.go_back();
            assert_eq!(app.state.current_view, View::Login);
        }

        #[tokio::test]
        async fn test_logout_key_clears_session() {
            let mut app = logged_in_app(mock());
            app.state.current_user = Some(admin());
            app.navigate(View::Courses, ViewParams::default());

            app.handle_key(key(KeyCode::Char('L'))).await.unwrap();
            assert!(!app.session.is_logged_in());
            assert!(app.state.current_user.is_none());
            assert_eq!(app.state.current_view, View::Home);
            assert_eq!(app.status_message.as_deref(), Some("Logged out"));
        }

        #[test]
        fn test_q_quits() {
            let mut app = app_with(mock());
            tokio_test::block_on(app.handle_key(key(KeyCode::Char('q')))).unwrap();
            assert!(app.should_quit());
        }
    }

    mod forms {
        use super::*;

        #[tokio::test]
        async fn test_invalid_form_is_not_submitted() {
            // No expectation on subscribe_newsletter: calling it would panic
            let mut app = app_with(mock());
            app.navigate(View::NewsletterSubscribe, ViewParams::default());
            type_text(&mut app, "not-an-email").await;

            app.handle_key(ctrl('s')).await.unwrap();
            assert_eq!(app.state.current_view, View::NewsletterSubscribe);
            assert!(app.status_message.is_some());
        }

        #[tokio::test]
        async fn test_valid_newsletter_is_submitted() {
            let mut api = mock();
            api.expect_subscribe_newsletter()
                .with(eq("reader@mail.com"))
                .times(1)
                .returning(|_| Ok(()));
            let mut app = app_with(api);
            app.navigate(View::NewsletterSubscribe, ViewParams::default());
            type_text(&mut app, "reader@mail.com").await;

            app.handle_key(ctrl('s')).await.unwrap();
            assert_eq!(app.state.current_view, View::Home);
            assert_eq!(
                app.status_message.as_deref(),
                Some("reader@mail.com subscribed")
            );
        }

        #[tokio::test]
        async fn test_disabled_submit_button_does_nothing() {
            let mut app = app_with(mock());
            app.navigate(View::NewsletterSubscribe, ViewParams::default());
            // Move focus to the submit button
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(app.state.current_view, View::NewsletterSubscribe);
        }

        #[tokio::test]
        async fn test_link_button_navigates() {
            let mut app = app_with(mock());
            app.navigate(View::Login, ViewParams::default());
            // identifier, password, Login, Register
            for _ in 0..3 {
                app.handle_key(key(KeyCode::Tab)).await.unwrap();
            }
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(app.state.current_view, View::Register);
        }

        #[tokio::test]
        async fn test_login_starts_session() {
            let mut api = mock();
            api.expect_login()
                .with(eq("siteadmin"), eq("password123"))
                .times(1)
                .returning(|_, _| Ok("fresh-token".to_string()));
            api.expect_me().returning(|| Ok(admin()));
            api.expect_list_courses().returning(|| Ok(vec![]));
            let mut app = app_with(api);

            app.navigate(View::Login, ViewParams::default());
            type_text(&mut app, "siteadmin").await;
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            type_text(&mut app, "password123").await;
            app.handle_key(key(KeyCode::Enter)).await.unwrap(); // to the Login button
            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            assert!(app.session.is_logged_in());
            assert_eq!(app.session.token(), Some("fresh-token"));
            assert_eq!(app.state.current_user, Some(admin()));
            assert_eq!(app.state.current_view, View::Home);
        }

        #[tokio::test]
        async fn test_failed_login_shows_error() {
            let mut api = mock();
            api.expect_login().returning(|_, _| {
                Err(ApiError::Status {
                    status: 404,
                    message: "there is no user with this email or username".to_string(),
                })
            });
            let mut app = app_with(api);

            app.navigate(View::Login, ViewParams::default());
            type_text(&mut app, "siteadmin").await;
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            type_text(&mut app, "password123").await;
            app.submit_form().await;

            assert!(!app.session.is_logged_in());
            assert!(app.state.has_errors());
            assert_eq!(app.state.current_view, View::Login);
        }

        #[tokio::test]
        async fn test_modifier_chords_do_not_type() {
            let mut app = app_with(mock());
            app.navigate(View::NewsletterSubscribe, ViewParams::default());
            app.handle_key(ctrl('a')).await.unwrap();
            app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT))
                .await
                .unwrap();
            type_text(&mut app, "A").await;
            assert_eq!(app.state.form.as_ref().unwrap().value("email"), "A");
        }

        #[tokio::test]
        async fn test_register_sends_confirm_password() {
            let mut api = mock();
            api.expect_register()
                .withf(|request: &RegisterRequest| {
                    request.username == "newstudent"
                        && request.password == "secret123"
                        && request.confirm_password == request.password
                })
                .times(1)
                .returning(|_| Ok("reg-token".to_string()));
            api.expect_me().returning(|| Ok(admin()));
            api.expect_list_courses().returning(|| Ok(vec![]));
            let mut app = app_with(api);

            app.navigate(View::Register, ViewParams::default());
            fill(
                &mut app,
                &[
                    ("name", "New Student"),
                    ("username", "newstudent"),
                    ("email", "student@mail.com"),
                    ("phone", "09123456789"),
                    ("password", "secret123"),
                ],
            );
            app.handle_key(ctrl('s')).await.unwrap();

            assert_eq!(app.session.token(), Some("reg-token"));
            assert_eq!(app.state.current_view, View::Home);
        }

        #[tokio::test]
        async fn test_contact_us_is_sent() {
            let mut api = mock();
            api.expect_send_contact()
                .withf(|request: &ContactRequest| {
                    *request
                        == ContactRequest {
                            name: "Sara Ahmadi".to_string(),
                            email: "sara@mail.com".to_string(),
                            phone: "09121234567".to_string(),
                            body: "When does the course start?".to_string(),
                        }
                })
                .times(1)
                .returning(|_| Ok(()));
            let mut app = app_with(api);

            app.navigate(View::ContactUs, ViewParams::default());
            fill(
                &mut app,
                &[
                    ("name", "Sara Ahmadi"),
                    ("email", "sara@mail.com"),
                    ("phone", "09121234567"),
                    ("body", "When does the course start?"),
                ],
            );
            app.handle_key(ctrl('s')).await.unwrap();

            assert_eq!(app.state.current_view, View::Home);
            assert_eq!(app.status_message.as_deref(), Some("Message sent"));
        }

        #[tokio::test]
        async fn test_anchor_button_shows_url() {
            let mut app = app_with(mock());
            app.navigate(View::ContactUs, ViewParams::default());
            // name, email, phone, body, Send, Website
            for _ in 0..5 {
                app.handle_key(key(KeyCode::Tab)).await.unwrap();
            }
            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            assert_eq!(app.state.current_view, View::ContactUs);
            assert_eq!(
                app.status_message.as_deref(),
                Some("Open in your browser: http://localhost:3000")
            );
        }

        #[tokio::test]
        async fn test_contact_answer_goes_to_selected_email() {
            let mut api = mock();
            api.expect_answer_contact()
                .with(eq("sara@mail.com"), eq("Next Monday."))
                .times(1)
                .returning(|_, _| Ok(()));
            api.expect_list_contacts().returning(|| Ok(vec![]));
            let mut app = logged_in_app(api);

            let params = ViewParams {
                contact_email: Some("sara@mail.com".to_string()),
                ..Default::default()
            };
            app.navigate(View::ContactAnswer, params);
            fill(&mut app, &[("body", "Next Monday.")]);
            app.handle_key(ctrl('s')).await.unwrap();

            assert_eq!(app.state.current_view, View::Contacts);
            assert_eq!(
                app.status_message.as_deref(),
                Some("Answer sent to sara@mail.com")
            );
        }

        #[tokio::test]
        async fn test_contact_answer_without_target_is_an_error() {
            // No expectation on answer_contact: calling it would panic
            let mut app = logged_in_app(mock());
            app.navigate(View::ContactAnswer, ViewParams::default());
            fill(&mut app, &[("body", "Next Monday.")]);
            app.handle_key(ctrl('s')).await.unwrap();

            assert_eq!(app.state.current_error(), Some("No contact selected"));
            assert_eq!(app.state.current_view, View::ContactAnswer);
        }

        #[tokio::test]
        async fn test_comment_answer_without_target_is_an_error() {
            let mut app = logged_in_app(mock());
            app.navigate(View::CommentAnswer, ViewParams::default());
            fill(&mut app, &[("body", "Thanks a lot")]);
            app.handle_key(ctrl('s')).await.unwrap();

            assert_eq!(app.state.current_error(), Some("No comment selected"));
        }

        #[tokio::test]
        async fn test_category_create_reloads_list() {
            let mut api = mock();
            api.expect_create_category()
                .with(eq("Frontend"), eq("frontend"))
                .times(1)
                .returning(|title, name| {
                    Ok(Category {
                        id: "c9".to_string(),
                        title: title.to_string(),
                        name: name.to_string(),
                    })
                });
            api.expect_list_categories().times(1).returning(|| {
                Ok(vec![Category {
                    id: "c9".to_string(),
                    title: "Frontend".to_string(),
                    name: "frontend".to_string(),
                }])
            });
            let mut app = logged_in_app(api);

            app.navigate(View::CategoryCreate, ViewParams::default());
            type_text(&mut app, "Frontend").await;
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            type_text(&mut app, "frontend").await;
            app.handle_key(ctrl('s')).await.unwrap();

            assert_eq!(app.state.current_view, View::Categories);
            assert_eq!(app.state.categories.len(), 1);
        }
    }

    mod lists {
        use super::*;

        fn comment(id: &str) -> Comment {
            Comment {
                id: id.to_string(),
                body: "Nice".to_string(),
                creator: None,
                course: None,
                answer: 0,
                is_answer: false,
                score: 5,
                created_at: None,
            }
        }

        #[tokio::test]
        async fn test_accept_comment_refreshes() {
            let mut api = mock();
            api.expect_list_comments()
                .returning(|| Ok(vec![comment("m1"), comment("m2")]));
            api.expect_accept_comment()
                .with(eq("m2"))
                .times(1)
                .returning(|_| Ok(()));
            let mut app = logged_in_app(api);

            app.open(View::Comments, ViewParams::default()).await;
            app.handle_key(key(KeyCode::Down)).await.unwrap();
            app.handle_key(key(KeyCode::Char('a'))).await.unwrap();
            assert_eq!(app.status_message.as_deref(), Some("Comment accepted"));
        }

        #[tokio::test]
        async fn test_delete_requires_confirmation() {
            let mut api = mock();
            api.expect_list_comments()
                .returning(|| Ok(vec![comment("m1")]));
            api.expect_delete_comment()
                .with(eq("m1"))
                .times(1)
                .returning(|_| Ok(()));
            let mut app = logged_in_app(api);

            app.open(View::Comments, ViewParams::default()).await;
            app.handle_key(key(KeyCode::Char('d'))).await.unwrap();
            assert!(app.state.pending_action.is_some());

            // Enter on the default (cancel) option does nothing
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert!(app.state.pending_action.is_none());

            app.handle_key(key(KeyCode::Char('d'))).await.unwrap();
            app.handle_key(key(KeyCode::Char('y'))).await.unwrap();
            assert_eq!(app.status_message.as_deref(), Some("Comment deleted"));
        }

        #[tokio::test]
        async fn test_answer_comment_flow() {
            let mut api = mock();
            api.expect_list_comments()
                .returning(|| Ok(vec![comment("m1")]));
            api.expect_answer_comment()
                .with(eq("m1"), eq("Thank you!"))
                .times(1)
                .returning(|_, _| Ok(()));
            let mut app = logged_in_app(api);

            app.open(View::Comments, ViewParams::default()).await;
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(app.state.current_view, View::CommentAnswer);

            type_text(&mut app, "Thank you!").await;
            app.handle_key(ctrl('s')).await.unwrap();
            assert_eq!(app.state.current_view, View::Comments);
        }

        #[tokio::test]
        async fn test_ban_user_after_confirmation() {
            let mut api = mock();
            api.expect_list_users().returning(|| Ok(vec![admin()]));
            api.expect_ban_user()
                .with(eq("u1"))
                .times(1)
                .returning(|_| Ok(()));
            let mut app = logged_in_app(api);

            app.open(View::Users, ViewParams::default()).await;
            app.handle_key(key(KeyCode::Char('b'))).await.unwrap();
            let pending = app.state.pending_action.as_ref().unwrap();
            assert_eq!(pending.kind, PendingKind::BanUser);
            assert_eq!(pending.entity_id, "u1");

            app.handle_key(key(KeyCode::Char('y'))).await.unwrap();
            assert!(app.state.pending_action.is_none());
            assert_eq!(app.status_message.as_deref(), Some("User banned"));
        }

        #[tokio::test]
        async fn test_forbidden_keeps_session() {
            let mut api = mock();
            api.expect_list_users().returning(|| {
                Err(ApiError::from_response(
                    403,
                    r#"{"message":"This route is accessible only for admins"}"#,
                ))
            });
            let mut app = logged_in_app(api);

            app.open(View::Users, ViewParams::default()).await;
            assert!(app.session.is_logged_in());
            assert_eq!(
                app.state.current_error(),
                Some("Failed to load Users: server returned 403: This route is accessible only for admins")
            );
        }

        #[tokio::test]
        async fn test_unauthorized_ends_session() {
            let mut api = mock();
            api.expect_list_users()
                .returning(|| Err(ApiError::Unauthorized));
            let mut app = logged_in_app(api);

            app.open(View::Users, ViewParams::default()).await;
            assert!(!app.session.is_logged_in());
            assert!(app.state.has_errors());

            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert!(!app.state.has_errors());
        }
    }

    mod search {
        use super::*;
        use crate::state::SearchResults;

        #[tokio::test]
        async fn test_search_fetches_results() {
            let mut api = mock();
            api.expect_search()
                .with(eq("rust"))
                .times(1)
                .returning(|_| Ok(SearchResults::default()));
            let mut app = app_with(api);

            app.navigate(View::Search, ViewParams::default());
            type_text(&mut app, " rust ").await;
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(app.state.search_results, Some(SearchResults::default()));
        }

        #[tokio::test]
        async fn test_ctrl_chord_is_not_typed_into_query() {
            let mut app = app_with(mock());
            app.navigate(View::Search, ViewParams::default());
            type_text(&mut app, "go").await;
            app.handle_key(ctrl('w')).await.unwrap();
            assert_eq!(app.state.search_query, "go");
        }

        #[tokio::test]
        async fn test_blank_search_is_skipped() {
            let mut app = app_with(mock());
            app.navigate(View::Search, ViewParams::default());
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert!(app.state.search_results.is_none());
        }
    }

    mod startup {
        use super::*;

        #[tokio::test]
        async fn test_start_restores_user() {
            let mut api = mock();
            api.expect_me().times(1).returning(|| Ok(admin()));
            api.expect_list_courses().returning(|| Ok(vec![]));
            let mut app = logged_in_app(api);

            app.start().await;
            assert_eq!(app.state.current_user, Some(admin()));
        }

        #[tokio::test]
        async fn test_start_without_session_skips_profile() {
            let mut api = mock();
            api.expect_list_courses().returning(|| Ok(vec![]));
            let mut app = app_with(api);

            app.start().await;
            assert!(app.state.current_user.is_none());
        }
    }
}
