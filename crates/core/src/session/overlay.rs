//! On-demand movie detail overlay.
//!
//! Independent of which workflow surfaced the movie. The overlay is not
//! visible while the detail fetch is pending; only a full-detail display or
//! a failure is observable. Closing discards the stored detail (reopening
//! re-fetches) and invalidates any in-flight fetch so a late response is
//! silently dropped.

use tracing::debug;

use crate::api::MovieDetail;

use super::lifecycle::{RequestLifecycle, RequestOutcome, RequestStatus, RequestToken, Resolution};

/// How a dismissal was requested. Every variant routes through the same
/// [`DetailOverlay::close`] contract, so there is no divergent cleanup path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissSignal {
    /// The explicit close control.
    CloseAction,
    /// The dedicated dismiss key (Escape).
    EscapeKey,
    /// A click on the background region outside the overlay content.
    Backdrop,
}

/// Owns the inspected movie detail and the overlay's visibility flag.
#[derive(Debug, Default)]
pub struct DetailOverlay {
    detail: Option<MovieDetail>,
    visible: bool,
    lifecycle: RequestLifecycle,
}

impl DetailOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The inspected movie, present only while the overlay is visible.
    pub fn detail(&self) -> Option<&MovieDetail> {
        self.detail.as_ref()
    }

    pub fn status(&self) -> RequestStatus {
        self.lifecycle.status()
    }

    /// Start a detail fetch. The overlay stays hidden until the fetch
    /// succeeds.
    pub fn begin_open(&mut self, movie_id: u32) -> RequestToken {
        debug!("opening detail overlay for movie {}", movie_id);
        self.lifecycle.start()
    }

    /// Apply a successful detail fetch: store the detail and show the
    /// overlay. Stale outcomes are discarded.
    pub fn resolve_success(&mut self, token: RequestToken, detail: MovieDetail) -> Resolution {
        let resolution = self.lifecycle.try_resolve(token, RequestOutcome::Success);
        if resolution == Resolution::Applied {
            self.detail = Some(detail);
            self.visible = true;
        }
        resolution
    }

    /// Apply a failed detail fetch.
    pub fn resolve_failure(&mut self, token: RequestToken) -> Resolution {
        // Visibility stays false; the caller routes the message to the
        // shared error slot.
        self.lifecycle.try_resolve(token, RequestOutcome::Failure)
    }

    /// Hide the overlay and discard the stored detail. Any in-flight fetch
    /// is invalidated, so its eventual response is dropped as stale.
    pub fn close(&mut self) {
        self.visible = false;
        self.detail = None;
        self.lifecycle.reset();
    }

    /// Dismissal entry point for all three trigger kinds.
    pub fn dismiss(&mut self, signal: DismissSignal) {
        debug!(?signal, "detail overlay dismissed");
        self.close();
    }
}
