//! Mock backend API for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::api::{ApiError, MovieApi, MovieDetail, MovieSummary, RecommendationResult};

/// A recorded API call for test assertions.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedApiCall {
    Recommend { diary: String },
    Search { query: String },
    GetDetail { movie_id: u32 },
}

/// Mock implementation of the [`MovieApi`] trait.
///
/// Provides controllable behavior for testing:
/// - Return a configurable recommendation and searchable movie summaries
/// - Serve movie details by ID
/// - Track calls for assertions
/// - Simulate failures
///
/// # Example
///
/// ```rust,ignore
/// use cinemood_core::testing::{fixtures, MockMovieApi};
///
/// let api = MockMovieApi::new();
/// api.add_summary(fixtures::movie_summary(603, "The Matrix")).await;
///
/// let results = api.search("matrix").await?;
/// assert_eq!(results.len(), 1);
/// ```
#[derive(Debug)]
pub struct MockMovieApi {
    /// Recommendation returned by `recommend`.
    recommendation: Arc<RwLock<Option<RecommendationResult>>>,
    /// Summaries matched against search queries.
    summaries: Arc<RwLock<Vec<MovieSummary>>>,
    /// Movie details by ID.
    details: Arc<RwLock<HashMap<u32, MovieDetail>>>,
    /// Recorded calls.
    calls: Arc<RwLock<Vec<RecordedApiCall>>>,
    /// If set, the next operation will fail with this error.
    next_error: Arc<RwLock<Option<ApiError>>>,
}

impl Default for MockMovieApi {
    fn default() -> Self {
        Self::new()
    }
}

impl MockMovieApi {
    /// Create a new empty mock API.
    pub fn new() -> Self {
        Self {
            recommendation: Arc::new(RwLock::new(None)),
            summaries: Arc::new(RwLock::new(Vec::new())),
            details: Arc::new(RwLock::new(HashMap::new())),
            calls: Arc::new(RwLock::new(Vec::new())),
            next_error: Arc::new(RwLock::new(None)),
        }
    }

    // =========================================================================
    // Response Configuration
    // =========================================================================

    /// Set the recommendation returned by `recommend`. When unset, an empty
    /// default result is returned.
    pub async fn set_recommendation(&self, result: RecommendationResult) {
        *self.recommendation.write().await = Some(result);
    }

    /// Add a summary to the searchable catalogue.
    pub async fn add_summary(&self, summary: MovieSummary) {
        self.summaries.write().await.push(summary);
    }

    /// Replace the searchable catalogue.
    pub async fn set_summaries(&self, summaries: Vec<MovieSummary>) {
        *self.summaries.write().await = summaries;
    }

    /// Add a movie detail served by `get_detail`.
    pub async fn add_detail(&self, detail: MovieDetail) {
        self.details.write().await.insert(detail.id, detail);
    }

    // =========================================================================
    // Call Recording
    // =========================================================================

    /// Get all recorded calls.
    pub async fn recorded_calls(&self) -> Vec<RecordedApiCall> {
        self.calls.read().await.clone()
    }

    /// Get the number of calls performed.
    pub async fn call_count(&self) -> usize {
        self.calls.read().await.len()
    }

    /// Clear recorded calls.
    pub async fn clear_recorded(&self) {
        self.calls.write().await.clear();
    }

    // =========================================================================
    // Error Injection
    // =========================================================================

    /// Configure the next operation to fail with the given error.
    pub async fn set_next_error(&self, error: ApiError) {
        *self.next_error.write().await = Some(error);
    }

    /// Take the next error if set.
    async fn take_error(&self) -> Option<ApiError> {
        self.next_error.write().await.take()
    }

    /// Record a call.
    async fn record(&self, call: RecordedApiCall) {
        self.calls.write().await.push(call);
    }
}

#[async_trait]
impl MovieApi for MockMovieApi {
    async fn recommend(&self, diary: &str) -> Result<RecommendationResult, ApiError> {
        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        self.record(RecordedApiCall::Recommend {
            diary: diary.to_string(),
        })
        .await;

        Ok(self
            .recommendation
            .read()
            .await
            .clone()
            .unwrap_or_default())
    }

    async fn search(&self, query: &str) -> Result<Vec<MovieSummary>, ApiError> {
        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        self.record(RecordedApiCall::Search {
            query: query.to_string(),
        })
        .await;

        let summaries = self.summaries.read().await;
        let query_lower = query.to_lowercase();

        let results: Vec<MovieSummary> = summaries
            .iter()
            .filter(|s| s.title.to_lowercase().contains(&query_lower))
            .cloned()
            .collect();

        Ok(results)
    }

    async fn get_detail(&self, movie_id: u32) -> Result<MovieDetail, ApiError> {
        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        self.record(RecordedApiCall::GetDetail { movie_id }).await;

        self.details
            .read()
            .await
            .get(&movie_id)
            .cloned()
            .ok_or_else(|| ApiError::Api {
                status: 404,
                detail: Some(format!("Movie {} not found", movie_id)),
            })
    }
}
