//! HTTP client for the marketplace REST API
//!
//! All routes live under `{api_base_url}/v1`. Responses are JSON; list
//! endpoints return bare arrays.

use super::error::ApiError;
use super::traits::ApiClientTrait;
use crate::config::AdminConfig;
use crate::state::{Article, Category, Comment, Contact, Course, Newsletter, SearchResults, User};
use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Body of `POST /auth/register`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

/// Body of `POST /contact`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub body: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenResponse {
    access_token: String,
}

/// Client for the marketplace backend
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    token: Option<String>,
}

impl ApiClient {
    /// Create a client from the console configuration
    pub fn new(config: &AdminConfig) -> Result<Self, ApiError> {
        let base_url = Url::parse(&config.api_base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {e}", config.api_base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(config.api_base_url.clone()));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(concat!("course-admin-tui/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url,
            token: None,
        })
    }

    /// Build `{base}/v1/{segments...}`, percent-encoding each segment
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push("v1")
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder, ApiError> {
        let url = self.endpoint(segments)?;
        tracing::debug!("{method} {url}");
        let builder = self.http.request(method, url);
        Ok(match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        })
    }

    async fn send(&self, builder: RequestBuilder) -> Result<String, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;
        if status.is_success() {
            Ok(body)
        } else {
            tracing::warn!("request failed with {status}");
            Err(ApiError::from_response(status.as_u16(), &body))
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ApiError> {
        let body = self.send(self.request(Method::GET, segments)?).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn send_json<B, T>(
        &self,
        method: Method,
        segments: &[&str],
        body: &B,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let body = self.send(self.request(method, segments)?.json(body)).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn send_empty(&self, method: Method, segments: &[&str]) -> Result<(), ApiError> {
        self.send(self.request(method, segments)?).await.map(|_| ())
    }

    async fn send_body<B>(
        &self,
        method: Method,
        segments: &[&str],
        body: &B,
    ) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized + Sync,
    {
        self.send(self.request(method, segments)?.json(body))
            .await
            .map(|_| ())
    }
}

#[async_trait]
impl ApiClientTrait for ApiClient {
    fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    async fn login(&self, identifier: &str, password: &str) -> Result<String, ApiError> {
        let body = serde_json::json!({ "identifier": identifier, "password": password });
        let response: TokenResponse = self
            .send_json(Method::POST, &["auth", "login"], &body)
            .await?;
        Ok(response.access_token)
    }

    async fn register(&self, request: &RegisterRequest) -> Result<String, ApiError> {
        let response: TokenResponse = self
            .send_json(Method::POST, &["auth", "register"], request)
            .await?;
        Ok(response.access_token)
    }

    async fn me(&self) -> Result<User, ApiError> {
        self.get_json(&["auth", "me"]).await
    }

    async fn list_courses(&self) -> Result<Vec<Course>, ApiError> {
        self.get_json(&["courses"]).await
    }

    async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get_json(&["category"]).await
    }

    async fn create_category(&self, title: &str, name: &str) -> Result<Category, ApiError> {
        let body = serde_json::json!({ "title": title, "name": name });
        self.send_json(Method::POST, &["category"], &body).await
    }

    async fn delete_category(&self, id: &str) -> Result<(), ApiError> {
        self.send_empty(Method::DELETE, &["category", id]).await
    }

    async fn list_articles(&self) -> Result<Vec<Article>, ApiError> {
        self.get_json(&["articles"]).await
    }

    async fn list_comments(&self) -> Result<Vec<Comment>, ApiError> {
        self.get_json(&["comments"]).await
    }

    async fn accept_comment(&self, id: &str) -> Result<(), ApiError> {
        self.send_empty(Method::PUT, &["comments", "accept", id]).await
    }

    async fn reject_comment(&self, id: &str) -> Result<(), ApiError> {
        self.send_empty(Method::PUT, &["comments", "reject", id]).await
    }

    async fn answer_comment(&self, id: &str, body: &str) -> Result<(), ApiError> {
        let payload = serde_json::json!({ "body": body });
        self.send_body(Method::POST, &["comments", "answer", id], &payload)
            .await
    }

    async fn delete_comment(&self, id: &str) -> Result<(), ApiError> {
        self.send_empty(Method::DELETE, &["comments", id]).await
    }

    async fn list_contacts(&self) -> Result<Vec<Contact>, ApiError> {
        self.get_json(&["contact"]).await
    }

    async fn send_contact(&self, request: &ContactRequest) -> Result<(), ApiError> {
        self.send_body(Method::POST, &["contact"], request).await
    }

    async fn answer_contact(&self, email: &str, answer: &str) -> Result<(), ApiError> {
        let payload = serde_json::json!({ "email": email, "answer": answer });
        self.send_body(Method::POST, &["contact", "answer"], &payload)
            .await
    }

    async fn list_newsletters(&self) -> Result<Vec<Newsletter>, ApiError> {
        self.get_json(&["newsletters"]).await
    }

    async fn subscribe_newsletter(&self, email: &str) -> Result<(), ApiError> {
        let payload = serde_json::json!({ "email": email });
        self.send_body(Method::POST, &["newsletters"], &payload).await
    }

    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.get_json(&["users"]).await
    }

    async fn ban_user(&self, id: &str) -> Result<(), ApiError> {
        self.send_empty(Method::PUT, &["users", "ban", id]).await
    }

    async fn delete_user(&self, id: &str) -> Result<(), ApiError> {
        self.send_empty(Method::DELETE, &["users", id]).await
    }

    async fn search(&self, query: &str) -> Result<SearchResults, ApiError> {
        self.get_json(&["search", query]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(&AdminConfig {
            api_base_url: base.to_string(),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_endpoint_adds_version_prefix() {
        let url = client("http://localhost:4000").endpoint(&["courses"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:4000/v1/courses");
    }

    #[test]
    fn test_endpoint_handles_trailing_slash_and_base_path() {
        let url = client("https://example.com/api/")
            .endpoint(&["comments", "accept", "42"])
            .unwrap();
        assert_eq!(url.as_str(), "https://example.com/api/v1/comments/accept/42");
    }

    #[test]
    fn test_endpoint_encodes_search_terms() {
        let url = client("http://localhost:4000")
            .endpoint(&["search", "rust/async basics"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:4000/v1/search/rust%2Fasync%20basics"
        );
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let result = ApiClient::new(&AdminConfig {
            api_base_url: "not a url".to_string(),
            ..Default::default()
        });
        assert!(matches!(result, Err(ApiError::InvalidUrl(_))));
    }

    #[test]
    fn test_register_request_is_camel_case() {
        let request = RegisterRequest {
            name: "Ali Rezaei".to_string(),
            username: "alirezaei".to_string(),
            email: "ali@mail.com".to_string(),
            phone: "09123456789".to_string(),
            password: "password1".to_string(),
            confirm_password: "password1".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["confirmPassword"], "password1");
        assert!(json.get("confirm_password").is_none());
    }

    #[test]
    fn test_token_response_parses() {
        let parsed: TokenResponse = serde_json::from_str(r#"{"accessToken":"t0k"}"#).unwrap();
        assert_eq!(parsed.access_token, "t0k");
    }
}
