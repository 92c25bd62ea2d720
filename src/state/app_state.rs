//! Application state definitions

use super::forms::ActiveForm;
use super::pagination::Paginator;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current view in the application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Login,
    Register,
    Courses,
    Categories,
    CategoryCreate,
    Articles,
    Comments,
    CommentAnswer,
    Contacts,
    ContactAnswer,
    ContactUs,
    Newsletters,
    NewsletterSubscribe,
    Users,
    Search,
}

impl View {
    /// Views that show a form
    pub fn is_form_view(&self) -> bool {
        matches!(
            self,
            View::Login
                | View::Register
                | View::CategoryCreate
                | View::CommentAnswer
                | View::ContactAnswer
                | View::ContactUs
                | View::NewsletterSubscribe
        )
    }

    /// Views that need a signed-in admin
    pub fn requires_login(&self) -> bool {
        matches!(
            self,
            View::Categories
                | View::CategoryCreate
                | View::Comments
                | View::CommentAnswer
                | View::Contacts
                | View::ContactAnswer
                | View::Newsletters
                | View::Users
        )
    }

    /// Views that show a paginated list
    pub fn is_list_view(&self) -> bool {
        matches!(
            self,
            View::Courses
                | View::Categories
                | View::Articles
                | View::Comments
                | View::Contacts
                | View::Newsletters
                | View::Users
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Login => "Login",
            View::Register => "Register",
            View::Courses => "Courses",
            View::Categories => "Categories",
            View::CategoryCreate => "New Category",
            View::Articles => "Articles",
            View::Comments => "Comments",
            View::CommentAnswer => "Answer Comment",
            View::Contacts => "Contacts",
            View::ContactAnswer => "Answer Contact",
            View::ContactUs => "Contact Us",
            View::Newsletters => "Newsletters",
            View::NewsletterSubscribe => "Subscribe",
            View::Users => "Users",
            View::Search => "Search",
        }
    }
}

/// Sidebar entries in display order
pub const SIDEBAR_VIEWS: &[View] = &[
    View::Home,
    View::Courses,
    View::Articles,
    View::Search,
    View::Categories,
    View::Comments,
    View::Contacts,
    View::Newsletters,
    View::Users,
    View::ContactUs,
    View::NewsletterSubscribe,
];

/// Entity a form acts on, such as the comment being answered
#[derive(Debug, Clone, Default)]
pub struct ViewParams {
    pub comment_id: Option<String>,
    pub contact_email: Option<String>,
}

/// Destructive list action waiting for confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingKind {
    DeleteCategory,
    DeleteComment,
    DeleteUser,
    BanUser,
}

impl PendingKind {
    pub fn verb(&self) -> &'static str {
        match self {
            Self::BanUser => "ban",
            _ => "delete",
        }
    }
}

/// State of the confirmation dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAction {
    pub kind: PendingKind,
    pub entity_id: String,
    pub entity_display: String,
    /// true when the confirm option is highlighted
    pub selected_option: bool,
}

impl PendingAction {
    pub fn new(kind: PendingKind, entity_id: &str, entity_display: &str) -> Self {
        Self {
            kind,
            entity_id: entity_id.to_string(),
            entity_display: entity_display.to_string(),
            selected_option: false,
        }
    }
}

/// Reference to a user embedded in other documents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRef {
    #[serde(default)]
    pub name: String,
}

/// Reference to a course embedded in other documents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRef {
    #[serde(default)]
    pub name: String,
}

/// Course listing entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub registers: u32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Course {
    pub fn is_free(&self) -> bool {
        self.price == 0.0
    }

    pub fn price_label(&self) -> String {
        if self.is_free() {
            "Free".to_string()
        } else {
            format!("{:.0}", self.price)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub publish: u8,
    #[serde(default)]
    pub creator: Option<UserRef>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Article {
    pub fn is_published(&self) -> bool {
        self.publish == 1
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: String,
    pub body: String,
    #[serde(default)]
    pub creator: Option<UserRef>,
    #[serde(default)]
    pub course: Option<CourseRef>,
    /// 1 once an admin accepted the comment
    #[serde(default)]
    pub answer: u8,
    #[serde(default)]
    pub is_answer: bool,
    #[serde(default)]
    pub score: u8,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Comment {
    pub fn is_accepted(&self) -> bool {
        self.answer == 1
    }

    pub fn author(&self) -> &str {
        self.creator.as_ref().map(|c| c.name.as_str()).unwrap_or("-")
    }

    pub fn course_name(&self) -> &str {
        self.course.as_ref().map(|c| c.name.as_str()).unwrap_or("-")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub body: String,
    /// 1 once an answer was sent
    #[serde(default)]
    pub answer: u8,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Contact {
    pub fn is_answered(&self) -> bool {
        self.answer == 1
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Newsletter {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role.eq_ignore_ascii_case("admin")
    }
}

/// Response of the search endpoint
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    #[serde(default)]
    pub all_result_courses: Vec<Course>,
    #[serde(default)]
    pub all_result_articles: Vec<Article>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.all_result_courses.is_empty() && self.all_result_articles.is_empty()
    }
}

/// Main application state
#[derive(Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_params: ViewParams,
    pub view_history: Vec<(View, ViewParams)>,
    pub sidebar_index: usize,

    // Data
    pub courses: Vec<Course>,
    pub categories: Vec<Category>,
    pub articles: Vec<Article>,
    pub comments: Vec<Comment>,
    pub contacts: Vec<Contact>,
    pub newsletters: Vec<Newsletter>,
    pub users: Vec<User>,
    pub current_user: Option<User>,

    // Search
    pub search_query: String,
    pub search_results: Option<SearchResults>,

    // Lists
    pub selected_index: usize,
    pub paginator: Paginator,

    // Form mounted in the current view
    pub form: Option<ActiveForm>,

    // Confirmation dialog
    pub pending_action: Option<PendingAction>,

    // Errors waiting to be shown, oldest first
    error_queue: Vec<String>,
}

impl AppState {
    pub fn push_error(&mut self, message: String) {
        self.error_queue.push(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.first().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        if !self.error_queue.is_empty() {
            self.error_queue.remove(0);
        }
    }

    /// Number of rows in the current list view
    pub fn list_len(&self) -> usize {
        match self.current_view {
            View::Courses => self.courses.len(),
            View::Categories => self.categories.len(),
            View::Articles => self.articles.len(),
            View::Comments => self.comments.len(),
            View::Contacts => self.contacts.len(),
            View::Newsletters => self.newsletters.len(),
            View::Users => self.users.len(),
            _ => 0,
        }
    }

    /// Index into the full list of the selected row on the current page
    pub fn selected_item_index(&self) -> Option<usize> {
        let index = self.paginator.offset() + self.selected_index;
        (index < self.list_len()).then_some(index)
    }

    pub fn move_selection_down(&mut self) {
        let rows = self.paginator.rows_on_page(self.list_len());
        if self.selected_index + 1 < rows {
            self.selected_index += 1;
        }
    }

    pub fn move_selection_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn next_page(&mut self) {
        let len = self.list_len();
        self.paginator.next(len);
        self.selected_index = 0;
    }

    pub fn prev_page(&mut self) {
        self.paginator.prev();
        self.selected_index = 0;
    }

    pub fn reset_selection(&mut self) {
        self.selected_index = 0;
        self.paginator.reset();
    }

    /// Clamp selection after the list shrank
    pub fn clamp_selection(&mut self) {
        let len = self.list_len();
        self.paginator.clamp(len);
        let rows = self.paginator.rows_on_page(len);
        if self.selected_index >= rows {
            self.selected_index = rows.saturating_sub(1);
        }
    }
}
