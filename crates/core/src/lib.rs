//! Orchestration core for the cinemood client.
//!
//! Owns the state machine behind the two mutually exclusive workflows
//! (diary recommendation and title search), the request lifecycles guarding
//! against stale responses, the detail overlay, and the HTTP client for the
//! recommendation backend.

pub mod api;
pub mod config;
pub mod session;
pub mod testing;

pub use api::{
    ApiError, Genre, HttpMovieApi, MovieApi, MovieDetail, MovieSummary, Provider,
    RecommendationResult, WatchProviders,
};
pub use config::{
    load_config, load_config_from_str, validate_config, ApiConfig, Config, ConfigError,
    ImageConfig, ImageSize,
};
pub use session::{
    DetailOverlay, DismissSignal, RequestStatus, RequestToken, Resolution, Session,
    ValidationError, WorkflowCoordinator, WorkflowState,
};
