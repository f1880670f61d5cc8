//! Testing utilities and mock implementations for E2E tests.
//!
//! Provides a mock implementation of the [`MovieApi`] trait so session
//! behavior can be tested end-to-end without a running backend.
//!
//! [`MovieApi`]: crate::api::MovieApi

mod mock_api;

pub use mock_api::{MockMovieApi, RecordedApiCall};

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::api::{
        Genre, MovieDetail, MovieSummary, Provider, RecommendationResult, WatchProviders,
    };

    /// Create a test movie summary with reasonable defaults.
    pub fn movie_summary(id: u32, title: &str) -> MovieSummary {
        MovieSummary {
            id,
            title: title.to_string(),
            overview: format!("A movie about {}.", title.to_lowercase()),
            poster_path: Some("/poster.jpg".to_string()),
        }
    }

    /// Create a test recommendation result.
    pub fn recommendation(
        emotion: &str,
        reason: &str,
        movies: Vec<MovieSummary>,
    ) -> RecommendationResult {
        RecommendationResult {
            emotion: emotion.to_string(),
            reason: reason.to_string(),
            movies,
        }
    }

    /// Create a test watch provider.
    pub fn provider(id: u32, name: &str) -> Provider {
        Provider {
            id,
            name: name.to_string(),
            logo_path: Some(format!("/{}.png", name.to_lowercase())),
        }
    }

    /// Create a test movie detail with credits already normalized.
    pub fn movie_detail(id: u32, title: &str) -> MovieDetail {
        MovieDetail {
            id,
            title: title.to_string(),
            overview: format!("A movie about {}.", title.to_lowercase()),
            poster_path: Some("/poster.jpg".to_string()),
            release_date: Some("1999-03-30".to_string()),
            vote_average: Some(8.2),
            vote_count: 21000,
            runtime_minutes: Some(136),
            genres: vec![Genre {
                id: 28,
                name: "Action".to_string(),
            }],
            director: Some("Lana Wachowski".to_string()),
            top_cast: vec!["Keanu Reeves".to_string(), "Carrie-Anne Moss".to_string()],
            watch_providers: Some(WatchProviders {
                subscription: vec![provider(8, "Netflix")],
                purchase: vec![],
                rental: vec![],
                more_info: Some("https://example.com/watch".to_string()),
            }),
        }
    }
}
