//! Client session state: workflows, overlay, and the async glue driving
//! them.
//!
//! All state transitions are synchronous; the only suspension points are
//! the three network calls. [`Session`] sequences begin → call → finish for
//! each operation. Callers that issue calls concurrently still get the
//! stale-discard guarantee, because every finish goes through the lifecycle
//! token check.

mod coordinator;
mod lifecycle;
mod overlay;
mod recommend;
mod search;

pub use coordinator::{ValidationError, WorkflowCoordinator, WorkflowState};
pub use lifecycle::{RequestLifecycle, RequestOutcome, RequestStatus, RequestToken, Resolution};
pub use overlay::{DetailOverlay, DismissSignal};
pub use recommend::RecommendationWorkflow;
pub use search::SearchWorkflow;

use std::sync::Arc;

use tracing::debug;

use crate::api::MovieApi;

/// One interactive client session.
///
/// Owns the coordinator and the overlay, holds the API client, and wires
/// overlay failures into the coordinator's shared error slot (the overlay
/// itself never touches the coordinator).
pub struct Session {
    coordinator: WorkflowCoordinator,
    overlay: DetailOverlay,
    api: Arc<dyn MovieApi>,
}

impl Session {
    pub fn new(api: Arc<dyn MovieApi>) -> Self {
        Self {
            coordinator: WorkflowCoordinator::new(),
            overlay: DetailOverlay::new(),
            api,
        }
    }

    /// Read-only view of the workflows and error slot.
    pub fn coordinator(&self) -> &WorkflowCoordinator {
        &self.coordinator
    }

    /// Read-only view of the overlay.
    pub fn overlay(&self) -> &DetailOverlay {
        &self.overlay
    }

    pub fn set_diary_text(&mut self, text: impl Into<String>) {
        self.coordinator.set_diary_text(text);
    }

    pub fn set_search_query(&mut self, text: impl Into<String>) {
        self.coordinator.set_search_query(text);
    }

    /// Submit the current diary text for recommendations.
    ///
    /// On validation failure the message is already in the error slot and
    /// no network call is made.
    pub async fn submit_recommendation(&mut self) -> Result<(), ValidationError> {
        let (token, diary) = self.coordinator.begin_recommendation()?;
        let outcome = self.api.recommend(&diary).await;
        self.coordinator.finish_recommendation(token, outcome);
        Ok(())
    }

    /// Submit the current query for a title search.
    pub async fn submit_search(&mut self) -> Result<(), ValidationError> {
        let (token, query) = self.coordinator.begin_search()?;
        let outcome = self.api.search(&query).await;
        self.coordinator.finish_search(token, outcome);
        Ok(())
    }

    /// Activate a result card: fetch the movie's detail and show the
    /// overlay on success. On failure the overlay stays hidden and the
    /// error slot carries the message.
    pub async fn open_detail(&mut self, movie_id: u32) {
        self.coordinator.clear_error();
        let token = self.overlay.begin_open(movie_id);

        match self.api.get_detail(movie_id).await {
            Ok(detail) => {
                self.overlay.resolve_success(token, detail);
            }
            Err(err) => {
                if self.overlay.resolve_failure(token) == Resolution::Applied {
                    self.coordinator.set_error(err.user_message());
                } else {
                    debug!("discarding stale detail failure for movie {}", movie_id);
                }
            }
        }
    }

    /// Dismiss the overlay, regardless of trigger.
    pub fn dismiss_overlay(&mut self, signal: DismissSignal) {
        self.overlay.dismiss(signal);
    }
}
