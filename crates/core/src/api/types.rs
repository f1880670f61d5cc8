//! Domain types for recommendation, search, and detail responses.

use serde::{Deserialize, Serialize};

/// Compact movie representation used in recommendation and search results.
///
/// Immutable once received; `id` is the stable identifier used to request
/// full detail.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieSummary {
    /// Backend movie ID.
    pub id: u32,
    /// Movie title.
    pub title: String,
    /// Plot overview (may be empty).
    #[serde(default)]
    pub overview: String,
    /// Poster path fragment, resolved against the image base URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
}

/// Result of a successful diary recommendation.
///
/// Replaced wholesale on each new successful response; cleared when the
/// search workflow activates.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RecommendationResult {
    /// Emotion label derived from the diary.
    pub emotion: String,
    /// Human-readable rationale for the recommendations.
    pub reason: String,
    /// Recommended movies, in ranked order.
    pub movies: Vec<MovieSummary>,
}

/// A movie genre.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Genre {
    pub id: u32,
    pub name: String,
}

/// A watch provider (streaming service, store, or rental outlet).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Provider {
    pub id: u32,
    pub name: String,
    /// Logo path fragment, resolved against the image base URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_path: Option<String>,
}

/// Watch-provider availability for the one consulted region.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WatchProviders {
    /// Subscription (flatrate) providers.
    #[serde(default)]
    pub subscription: Vec<Provider>,
    /// Purchase providers.
    #[serde(default)]
    pub purchase: Vec<Provider>,
    /// Rental providers.
    #[serde(default)]
    pub rental: Vec<Provider>,
    /// External link with full availability information.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub more_info: Option<String>,
}

impl WatchProviders {
    /// True when all three provider categories are empty.
    pub fn is_empty(&self) -> bool {
        self.subscription.is_empty() && self.purchase.is_empty() && self.rental.is_empty()
    }
}

/// Full detail for one movie, normalized for display.
///
/// `director` and `top_cast` are derived from the raw credits; the
/// watch-provider section is omitted entirely when every category for the
/// consulted region is empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieDetail {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
    /// Release date (YYYY-MM-DD or partial).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    /// Vote average on a 0-10 scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vote_average: Option<f32>,
    /// Number of votes behind the average.
    #[serde(default)]
    pub vote_count: u32,
    /// Runtime in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime_minutes: Option<u32>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    /// First crew member credited as "Director", if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    /// Up to the first three cast names, in billing order.
    #[serde(default)]
    pub top_cast: Vec<String>,
    /// Regional availability; `None` when no category has providers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watch_providers: Option<WatchProviders>,
}
