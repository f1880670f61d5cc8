//! Title search workflow.

use crate::api::MovieSummary;

use super::lifecycle::{RequestLifecycle, RequestOutcome, RequestStatus, RequestToken, Resolution};

/// Owns the search query, the result set, and their request lifecycle.
/// Symmetric to the recommendation workflow with the mutual-exclusion
/// direction reversed.
#[derive(Debug, Default)]
pub struct SearchWorkflow {
    query: String,
    results: Option<Vec<MovieSummary>>,
    attempted: bool,
    lifecycle: RequestLifecycle,
}

impl SearchWorkflow {
    /// Pure state update; no side effects.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> Option<&[MovieSummary]> {
        self.results.as_deref()
    }

    pub fn attempted(&self) -> bool {
        self.attempted
    }

    pub fn status(&self) -> RequestStatus {
        self.lifecycle.status()
    }

    pub(crate) fn begin_attempt(&mut self) -> RequestToken {
        self.results = None;
        self.attempted = true;
        self.lifecycle.start()
    }

    pub(crate) fn resolve_success(
        &mut self,
        token: RequestToken,
        results: Vec<MovieSummary>,
    ) -> Resolution {
        let resolution = self.lifecycle.try_resolve(token, RequestOutcome::Success);
        if resolution == Resolution::Applied {
            self.results = Some(results);
        }
        resolution
    }

    pub(crate) fn resolve_failure(&mut self, token: RequestToken) -> Resolution {
        self.lifecycle.try_resolve(token, RequestOutcome::Failure)
    }

    /// Drop the results, attempt flag, and any in-flight request when the
    /// recommendation workflow activates. Typed query text is retained.
    pub(crate) fn deactivate(&mut self) {
        self.results = None;
        self.attempted = false;
        self.lifecycle.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summaries(count: u32) -> Vec<MovieSummary> {
        (1..=count)
            .map(|i| MovieSummary {
                id: i,
                title: format!("Result {}", i),
                overview: String::new(),
                poster_path: None,
            })
            .collect()
    }

    #[test]
    fn test_empty_results_still_stored() {
        let mut workflow = SearchWorkflow::default();
        let token = workflow.begin_attempt();
        workflow.resolve_success(token, vec![]);

        // An empty result set is a real outcome, distinct from "no result".
        assert_eq!(workflow.results(), Some(&[][..]));
        assert_eq!(workflow.status(), RequestStatus::Succeeded);
    }

    #[test]
    fn test_stale_results_discarded() {
        let mut workflow = SearchWorkflow::default();
        let first = workflow.begin_attempt();
        let second = workflow.begin_attempt();

        workflow.resolve_success(second, summaries(2));
        let resolution = workflow.resolve_success(first, summaries(5));

        assert_eq!(resolution, Resolution::Stale);
        assert_eq!(workflow.results().unwrap().len(), 2);
    }

    #[test]
    fn test_deactivate_retains_query_text() {
        let mut workflow = SearchWorkflow::default();
        workflow.set_query("Matrix");
        let token = workflow.begin_attempt();
        workflow.resolve_success(token, summaries(1));

        workflow.deactivate();
        assert_eq!(workflow.query(), "Matrix");
        assert!(workflow.results().is_none());
        assert!(!workflow.attempted());
    }
}
