//! Client for the recommendation backend.
//!
//! This module exposes the three remote operations the client depends on
//! (diary recommendation, title search, movie detail) behind the [`MovieApi`]
//! trait, with transport and HTTP failures normalized into [`ApiError`].

mod http;
mod types;

pub use http::HttpMovieApi;
pub use types::*;

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when calling the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed (connection, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend returned a non-success status, optionally with a
    /// server-supplied detail message.
    #[error("API error: status {status}")]
    Api { status: u16, detail: Option<String> },

    /// Failed to parse a response body.
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl ApiError {
    /// Human-readable message for the shared error slot.
    ///
    /// Prefers the server-supplied detail; falls back to a generic message
    /// per failure class.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Api {
                detail: Some(detail),
                ..
            } => detail.clone(),
            ApiError::Api { status, .. } => {
                format!("The server returned an error (status {}).", status)
            }
            ApiError::Http(_) => {
                "Could not reach the server. Check your connection and try again.".to_string()
            }
            ApiError::Parse(_) => "The server returned an unexpected response.".to_string(),
        }
    }
}

/// The three remote operations of the recommendation backend.
///
/// Implemented by [`HttpMovieApi`] for production and by
/// `testing::MockMovieApi` for tests.
#[async_trait]
pub trait MovieApi: Send + Sync {
    /// Submit a diary entry and receive emotion-tagged recommendations.
    async fn recommend(&self, diary: &str) -> Result<RecommendationResult, ApiError>;

    /// Search the movie catalogue by title.
    async fn search(&self, query: &str) -> Result<Vec<MovieSummary>, ApiError>;

    /// Fetch the full detail for one movie, normalized per the consulted
    /// watch-provider region.
    async fn get_detail(&self, movie_id: u32) -> Result<MovieDetail, ApiError>;
}
