//! REST client for the marketplace backend

mod client;
mod error;
mod traits;

pub use client::{ApiClient, ContactRequest, RegisterRequest};
pub use error::ApiError;
pub use traits::ApiClientTrait;

#[cfg(test)]
pub use traits::MockApiClientTrait;
