//! Trait abstraction for the backend client to enable mocking in tests

use super::client::{ContactRequest, RegisterRequest};
use super::error::ApiError;
use crate::state::{Article, Category, Comment, Contact, Course, Newsletter, SearchResults, User};
use async_trait::async_trait;

/// Backend operations used by the console
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApiClientTrait: Send + Sync {
    /// Set or clear the bearer token sent with every request
    fn set_token(&mut self, token: Option<String>);

    /// Log in, returning the access token
    async fn login(&self, identifier: &str, password: &str) -> Result<String, ApiError>;

    /// Register a user, returning the access token
    async fn register(&self, request: &RegisterRequest) -> Result<String, ApiError>;

    /// Current user for the bearer token
    async fn me(&self) -> Result<User, ApiError>;

    async fn list_courses(&self) -> Result<Vec<Course>, ApiError>;

    async fn list_categories(&self) -> Result<Vec<Category>, ApiError>;

    async fn create_category(&self, title: &str, name: &str) -> Result<Category, ApiError>;

    async fn delete_category(&self, id: &str) -> Result<(), ApiError>;

    async fn list_articles(&self) -> Result<Vec<Article>, ApiError>;

    async fn list_comments(&self) -> Result<Vec<Comment>, ApiError>;

    /// Publish a comment
    async fn accept_comment(&self, id: &str) -> Result<(), ApiError>;

    /// Hide a comment
    async fn reject_comment(&self, id: &str) -> Result<(), ApiError>;

    async fn answer_comment(&self, id: &str, body: &str) -> Result<(), ApiError>;

    async fn delete_comment(&self, id: &str) -> Result<(), ApiError>;

    async fn list_contacts(&self) -> Result<Vec<Contact>, ApiError>;

    /// Public contact form submission
    async fn send_contact(&self, request: &ContactRequest) -> Result<(), ApiError>;

    /// Email an answer to a contact
    async fn answer_contact(&self, email: &str, answer: &str) -> Result<(), ApiError>;

    async fn list_newsletters(&self) -> Result<Vec<Newsletter>, ApiError>;

    async fn subscribe_newsletter(&self, email: &str) -> Result<(), ApiError>;

    async fn list_users(&self) -> Result<Vec<User>, ApiError>;

    async fn ban_user(&self, id: &str) -> Result<(), ApiError>;

    async fn delete_user(&self, id: &str) -> Result<(), ApiError>;

    /// Search courses and articles by keyword
    async fn search(&self, query: &str) -> Result<SearchResults, ApiError>;
}
