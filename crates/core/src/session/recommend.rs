//! Diary-driven recommendation workflow.

use crate::api::RecommendationResult;

use super::lifecycle::{RequestLifecycle, RequestOutcome, RequestStatus, RequestToken, Resolution};

/// Owns the diary text, the recommendation result, and their request
/// lifecycle. Mutual exclusion with the search workflow is enforced by the
/// coordinator.
#[derive(Debug, Default)]
pub struct RecommendationWorkflow {
    diary: String,
    result: Option<RecommendationResult>,
    attempted: bool,
    lifecycle: RequestLifecycle,
}

impl RecommendationWorkflow {
    /// Pure state update; no side effects.
    pub fn set_diary(&mut self, text: impl Into<String>) {
        self.diary = text.into();
    }

    pub fn diary(&self) -> &str {
        &self.diary
    }

    pub fn result(&self) -> Option<&RecommendationResult> {
        self.result.as_ref()
    }

    /// True once a submission has been issued, until deactivation.
    /// Distinguishes "never tried" from "tried, zero results".
    pub fn attempted(&self) -> bool {
        self.attempted
    }

    pub fn status(&self) -> RequestStatus {
        self.lifecycle.status()
    }

    /// Begin a submission attempt: clear the prior result, mark the attempt,
    /// and start a new request cycle. Validation and mutual exclusion have
    /// already happened in the coordinator.
    pub(crate) fn begin_attempt(&mut self) -> RequestToken {
        self.result = None;
        self.attempted = true;
        self.lifecycle.start()
    }

    pub(crate) fn resolve_success(
        &mut self,
        token: RequestToken,
        result: RecommendationResult,
    ) -> Resolution {
        let resolution = self.lifecycle.try_resolve(token, RequestOutcome::Success);
        if resolution == Resolution::Applied {
            self.result = Some(result);
        }
        resolution
    }

    pub(crate) fn resolve_failure(&mut self, token: RequestToken) -> Resolution {
        self.lifecycle.try_resolve(token, RequestOutcome::Failure)
    }

    /// Drop the result, attempt flag, and any in-flight request when the
    /// search workflow activates. Typed diary text is retained.
    pub(crate) fn deactivate(&mut self) {
        self.result = None;
        self.attempted = false;
        self.lifecycle.reset();
    }
}
