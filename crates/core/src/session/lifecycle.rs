//! Request lifecycle tracking with stale-response protection.
//!
//! Each asynchronous operation owns one [`RequestLifecycle`]. Starting a new
//! request supersedes any outstanding one; a superseded outcome arriving late
//! is discarded without touching state. This is how a fast second submission
//! can never have its result overwritten by the first request's late
//! response.

/// Status of one asynchronous operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RequestStatus {
    /// No request started since creation or the last reset.
    #[default]
    Idle,
    /// A request is in flight.
    Pending,
    /// The most recent request completed successfully.
    Succeeded,
    /// The most recent request failed.
    Failed,
}

/// Opaque handle identifying one started request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Whether an outcome was applied or discarded as superseded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    /// The token no longer matches the most recently issued one. Not an
    /// error; the outcome is simply dropped.
    Stale,
}

/// Outcome classification fed back into the lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    Success,
    Failure,
}

/// Tracks one operation's status and guards against stale resolutions.
#[derive(Debug, Default)]
pub struct RequestLifecycle {
    status: RequestStatus,
    issued: u64,
    current: Option<u64>,
}

impl RequestLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> RequestStatus {
        self.status
    }

    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending
    }

    /// Start a new request cycle, superseding any outstanding one.
    ///
    /// Tokens increase monotonically for the lifetime of the lifecycle.
    pub fn start(&mut self) -> RequestToken {
        self.issued += 1;
        self.current = Some(self.issued);
        self.status = RequestStatus::Pending;
        RequestToken(self.issued)
    }

    /// Apply an outcome if `token` is still the most recently issued one.
    ///
    /// An applied resolution consumes the token, so at most one outcome per
    /// started request is ever applied. Stale outcomes leave status
    /// untouched.
    pub fn try_resolve(&mut self, token: RequestToken, outcome: RequestOutcome) -> Resolution {
        if self.current != Some(token.0) {
            return Resolution::Stale;
        }

        self.current = None;
        self.status = match outcome {
            RequestOutcome::Success => RequestStatus::Succeeded,
            RequestOutcome::Failure => RequestStatus::Failed,
        };
        Resolution::Applied
    }

    /// Return to Idle and invalidate any outstanding token.
    ///
    /// Used when a workflow deactivates and when the overlay closes with a
    /// fetch still in flight.
    pub fn reset(&mut self) {
        self.current = None;
        self.status = RequestStatus::Idle;
    }
}
