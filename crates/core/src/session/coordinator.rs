//! Coordinates the two mutually exclusive workflows and the shared error
//! slot.
//!
//! The coordinator stores no derived state: the per-workflow display state
//! is computed on every read from the workflow's attempt flag, request
//! status, and result.

use thiserror::Error;
use tracing::debug;

use crate::api::{ApiError, MovieSummary, RecommendationResult};

use super::lifecycle::{RequestStatus, RequestToken, Resolution};
use super::recommend::RecommendationWorkflow;
use super::search::SearchWorkflow;

/// Message shown when a recommendation is submitted without a diary entry.
const EMPTY_DIARY_MESSAGE: &str = "Write a diary entry before asking for recommendations.";
/// Message shown when a search is submitted without a query.
const EMPTY_QUERY_MESSAGE: &str = "Enter a movie title to search for.";

/// Raised when a submission is attempted with empty or whitespace-only
/// input. Caught before any network call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("diary text is empty")]
    EmptyDiary,
    #[error("search query is empty")]
    EmptyQuery,
}

/// Display state derived for one workflow on every read.
///
/// At most one workflow is in a state other than `Untouched` at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowState {
    /// No attempt yet; render nothing.
    Untouched,
    /// A request is in flight.
    Pending,
    /// An attempt succeeded with zero items; render a "no results" notice.
    EmptyResult,
    /// An attempt succeeded with one or more items.
    Populated,
    /// The most recent attempt failed; the shared error message is shown.
    Failed,
}

/// Owns both workflows and the single visible error message.
#[derive(Debug, Default)]
pub struct WorkflowCoordinator {
    recommendation: RecommendationWorkflow,
    search: SearchWorkflow,
    error: Option<String>,
}

impl WorkflowCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Input text
    // ========================================================================

    pub fn set_diary_text(&mut self, text: impl Into<String>) {
        self.recommendation.set_diary(text);
    }

    pub fn diary_text(&self) -> &str {
        self.recommendation.diary()
    }

    pub fn set_search_query(&mut self, text: impl Into<String>) {
        self.search.set_query(text);
    }

    pub fn search_query(&self) -> &str {
        self.search.query()
    }

    // ========================================================================
    // Recommendation workflow
    // ========================================================================

    /// Begin a recommendation submission.
    ///
    /// Fails fast with no network call when the trimmed diary is empty.
    /// Otherwise deactivates the search workflow, clears the error slot,
    /// and returns the request token plus a snapshot of the diary text for
    /// the `recommend` call.
    pub fn begin_recommendation(&mut self) -> Result<(RequestToken, String), ValidationError> {
        if self.recommendation.diary().trim().is_empty() {
            self.error = Some(EMPTY_DIARY_MESSAGE.to_string());
            return Err(ValidationError::EmptyDiary);
        }

        self.search.deactivate();
        self.error = None;
        let token = self.recommendation.begin_attempt();

        debug!("recommendation attempt started");
        Ok((token, self.recommendation.diary().to_string()))
    }

    /// Apply a recommendation outcome. Stale outcomes are discarded without
    /// touching the workflow or the error slot.
    pub fn finish_recommendation(
        &mut self,
        token: RequestToken,
        outcome: Result<RecommendationResult, ApiError>,
    ) -> Resolution {
        match outcome {
            Ok(result) => self.recommendation.resolve_success(token, result),
            Err(err) => {
                let resolution = self.recommendation.resolve_failure(token);
                if resolution == Resolution::Applied {
                    self.error = Some(err.user_message());
                }
                resolution
            }
        }
    }

    pub fn recommendation_result(&self) -> Option<&RecommendationResult> {
        self.recommendation.result()
    }

    pub fn recommendation_state(&self) -> WorkflowState {
        derive_state(
            self.recommendation.attempted(),
            self.recommendation.status(),
            self.recommendation.result().map(|r| r.movies.len()),
        )
    }

    // ========================================================================
    // Search workflow
    // ========================================================================

    /// Begin a search submission. Symmetric to [`begin_recommendation`],
    /// with the mutual-exclusion direction reversed.
    ///
    /// [`begin_recommendation`]: WorkflowCoordinator::begin_recommendation
    pub fn begin_search(&mut self) -> Result<(RequestToken, String), ValidationError> {
        if self.search.query().trim().is_empty() {
            self.error = Some(EMPTY_QUERY_MESSAGE.to_string());
            return Err(ValidationError::EmptyQuery);
        }

        self.recommendation.deactivate();
        self.error = None;
        let token = self.search.begin_attempt();

        debug!("search attempt started");
        Ok((token, self.search.query().to_string()))
    }

    /// Apply a search outcome. Stale outcomes are discarded.
    pub fn finish_search(
        &mut self,
        token: RequestToken,
        outcome: Result<Vec<MovieSummary>, ApiError>,
    ) -> Resolution {
        match outcome {
            Ok(results) => self.search.resolve_success(token, results),
            Err(err) => {
                let resolution = self.search.resolve_failure(token);
                if resolution == Resolution::Applied {
                    self.error = Some(err.user_message());
                }
                resolution
            }
        }
    }

    pub fn search_results(&self) -> Option<&[MovieSummary]> {
        self.search.results()
    }

    pub fn search_state(&self) -> WorkflowState {
        derive_state(
            self.search.attempted(),
            self.search.status(),
            self.search.results().map(|r| r.len()),
        )
    }

    // ========================================================================
    // Shared error slot
    // ========================================================================

    /// The single visible error message, if any.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Clear the error slot at the start of a new operation attempt.
    pub(crate) fn clear_error(&mut self) {
        self.error = None;
    }

    /// Overwrite the error slot with the most recent failure.
    pub(crate) fn set_error(&mut self, message: String) {
        self.error = Some(message);
    }
}

fn derive_state(attempted: bool, status: RequestStatus, item_count: Option<usize>) -> WorkflowState {
    if !attempted {
        return WorkflowState::Untouched;
    }

    match status {
        RequestStatus::Idle => WorkflowState::Untouched,
        RequestStatus::Pending => WorkflowState::Pending,
        RequestStatus::Failed => WorkflowState::Failed,
        RequestStatus::Succeeded => match item_count {
            Some(0) => WorkflowState::EmptyResult,
            Some(_) => WorkflowState::Populated,
            // Succeeded without a stored result cannot happen through the
            // public API.
            None => WorkflowState::Untouched,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MovieSummary;

    fn recommendation(movies: u32) -> RecommendationResult {
        RecommendationResult {
            emotion: "기쁨".to_string(),
            reason: "reason".to_string(),
            movies: (1..=movies)
                .map(|i| MovieSummary {
                    id: i,
                    title: format!("Movie {}", i),
                    overview: String::new(),
                    poster_path: None,
                })
                .collect(),
        }
    }

    fn api_error(detail: &str) -> ApiError {
        ApiError::Api {
            status: 500,
            detail: Some(detail.to_string()),
        }
    }

    #[test]
    fn test_both_workflows_start_untouched() {
        let coordinator = WorkflowCoordinator::new();
        assert_eq!(coordinator.recommendation_state(), WorkflowState::Untouched);
        assert_eq!(coordinator.search_state(), WorkflowState::Untouched);
        assert!(coordinator.error_message().is_none());
    }

    #[test]
    fn test_empty_diary_fails_validation() {
        let mut coordinator = WorkflowCoordinator::new();
        coordinator.set_diary_text("   \n\t ");

        let result = coordinator.begin_recommendation();
        assert_eq!(result.unwrap_err(), ValidationError::EmptyDiary);
        assert_eq!(coordinator.error_message(), Some(EMPTY_DIARY_MESSAGE));
        // Validation failure is not an attempt.
        assert_eq!(coordinator.recommendation_state(), WorkflowState::Untouched);
    }

    #[test]
    fn test_empty_query_fails_validation() {
        let mut coordinator = WorkflowCoordinator::new();

        let result = coordinator.begin_search();
        assert_eq!(result.unwrap_err(), ValidationError::EmptyQuery);
        assert_eq!(coordinator.error_message(), Some(EMPTY_QUERY_MESSAGE));
    }

    #[test]
    fn test_begin_clears_error_slot() {
        let mut coordinator = WorkflowCoordinator::new();
        coordinator.begin_search().unwrap_err();
        assert!(coordinator.error_message().is_some());

        coordinator.set_diary_text("some diary");
        coordinator.begin_recommendation().unwrap();
        assert!(coordinator.error_message().is_none());
    }

    #[test]
    fn test_successful_recommendation_is_populated() {
        let mut coordinator = WorkflowCoordinator::new();
        coordinator.set_diary_text("오늘은 행복했다");

        let (token, diary) = coordinator.begin_recommendation().unwrap();
        assert_eq!(diary, "오늘은 행복했다");
        assert_eq!(coordinator.recommendation_state(), WorkflowState::Pending);

        coordinator.finish_recommendation(token, Ok(recommendation(3)));
        assert_eq!(coordinator.recommendation_state(), WorkflowState::Populated);
        assert_eq!(coordinator.recommendation_result().unwrap().emotion, "기쁨");
    }

    #[test]
    fn test_zero_movies_is_empty_result_not_untouched() {
        let mut coordinator = WorkflowCoordinator::new();
        coordinator.set_diary_text("diary");

        let (token, _) = coordinator.begin_recommendation().unwrap();
        coordinator.finish_recommendation(token, Ok(recommendation(0)));
        assert_eq!(coordinator.recommendation_state(), WorkflowState::EmptyResult);
    }

    #[test]
    fn test_empty_search_results_is_empty_result() {
        let mut coordinator = WorkflowCoordinator::new();
        coordinator.set_search_query("Matrix");

        let (token, _) = coordinator.begin_search().unwrap();
        coordinator.finish_search(token, Ok(vec![]));
        assert_eq!(coordinator.search_state(), WorkflowState::EmptyResult);
    }

    #[test]
    fn test_failure_sets_error_from_server_detail() {
        let mut coordinator = WorkflowCoordinator::new();
        coordinator.set_search_query("Matrix");

        let (token, _) = coordinator.begin_search().unwrap();
        coordinator.finish_search(token, Err(api_error("search is down")));

        assert_eq!(coordinator.search_state(), WorkflowState::Failed);
        assert_eq!(coordinator.error_message(), Some("search is down"));
    }

    #[test]
    fn test_search_deactivates_populated_recommendation() {
        let mut coordinator = WorkflowCoordinator::new();
        coordinator.set_diary_text("diary");
        let (token, _) = coordinator.begin_recommendation().unwrap();
        coordinator.finish_recommendation(token, Ok(recommendation(2)));
        assert_eq!(coordinator.recommendation_state(), WorkflowState::Populated);

        coordinator.set_search_query("Matrix");
        let (token, _) = coordinator.begin_search().unwrap();

        assert_eq!(coordinator.recommendation_state(), WorkflowState::Untouched);
        assert!(coordinator.recommendation_result().is_none());
        // Typed diary text survives the deactivation.
        assert_eq!(coordinator.diary_text(), "diary");

        coordinator.finish_search(token, Ok(vec![]));
        assert_eq!(coordinator.search_state(), WorkflowState::EmptyResult);
    }

    #[test]
    fn test_recommendation_deactivates_search() {
        let mut coordinator = WorkflowCoordinator::new();
        coordinator.set_search_query("Matrix");
        let (token, _) = coordinator.begin_search().unwrap();
        coordinator.finish_search(
            token,
            Ok(vec![MovieSummary {
                id: 1,
                title: "The Matrix".to_string(),
                overview: String::new(),
                poster_path: None,
            }]),
        );
        assert_eq!(coordinator.search_state(), WorkflowState::Populated);

        coordinator.set_diary_text("diary");
        coordinator.begin_recommendation().unwrap();

        assert_eq!(coordinator.search_state(), WorkflowState::Untouched);
        assert!(coordinator.search_results().is_none());
        assert_eq!(coordinator.search_query(), "Matrix");
    }

    #[test]
    fn test_stale_outcome_preserves_second_result() {
        let mut coordinator = WorkflowCoordinator::new();
        coordinator.set_diary_text("diary");

        let (first, _) = coordinator.begin_recommendation().unwrap();
        let (second, _) = coordinator.begin_recommendation().unwrap();

        // Second submission resolves first.
        coordinator.finish_recommendation(second, Ok(recommendation(1)));
        // First submission's late response must not overwrite it.
        let resolution = coordinator.finish_recommendation(first, Ok(recommendation(5)));

        assert_eq!(resolution, Resolution::Stale);
        assert_eq!(
            coordinator.recommendation_result().unwrap().movies.len(),
            1
        );
    }

    #[test]
    fn test_stale_failure_raises_no_error() {
        let mut coordinator = WorkflowCoordinator::new();
        coordinator.set_diary_text("diary");

        let (first, _) = coordinator.begin_recommendation().unwrap();
        let (second, _) = coordinator.begin_recommendation().unwrap();

        coordinator.finish_recommendation(second, Ok(recommendation(1)));
        coordinator.finish_recommendation(first, Err(api_error("late failure")));

        assert_eq!(coordinator.recommendation_state(), WorkflowState::Populated);
        assert!(coordinator.error_message().is_none());
    }

    #[test]
    fn test_resubmission_replaces_result_wholesale() {
        let mut coordinator = WorkflowCoordinator::new();
        coordinator.set_diary_text("diary");

        let (token, _) = coordinator.begin_recommendation().unwrap();
        coordinator.finish_recommendation(token, Ok(recommendation(3)));

        let (token, _) = coordinator.begin_recommendation().unwrap();
        assert_eq!(coordinator.recommendation_state(), WorkflowState::Pending);
        assert!(coordinator.recommendation_result().is_none());

        coordinator.finish_recommendation(token, Ok(recommendation(1)));
        assert_eq!(
            coordinator.recommendation_result().unwrap().movies.len(),
            1
        );
    }
}
