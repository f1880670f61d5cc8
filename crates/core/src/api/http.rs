//! HTTP implementation of the [`MovieApi`] trait.
//!
//! Wire DTOs are private to this module; responses are normalized into the
//! domain types before they leave it. Non-success responses are probed for a
//! JSON `detail` field so the server's own message can be surfaced.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ApiConfig;

use super::types::{Genre, MovieDetail, MovieSummary, Provider, RecommendationResult, WatchProviders};
use super::{ApiError, MovieApi};

/// HTTP client for the recommendation backend.
pub struct HttpMovieApi {
    client: Client,
    base_url: String,
    region: String,
}

impl HttpMovieApi {
    /// Create a new client from configuration.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs as u64))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            region: config.region.clone(),
        })
    }
}

/// Extract an [`ApiError`] from a non-success response, surfacing the
/// server-supplied `detail` message when the body carries one.
async fn error_from_response(response: reqwest::Response) -> ApiError {
    let status = response.status().as_u16();
    let detail = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.detail);
    ApiError::Api { status, detail }
}

#[async_trait]
impl MovieApi for HttpMovieApi {
    async fn recommend(&self, diary: &str) -> Result<RecommendationResult, ApiError> {
        let url = format!("{}/api/recommend-movie", self.base_url);

        debug!("recommend request: {} diary chars", diary.chars().count());

        let response = self
            .client
            .post(&url)
            .json(&RecommendRequest { diary })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let body: RecommendResponse = response.json().await.map_err(|e| {
            ApiError::Parse(format!("Failed to parse recommendation response: {}", e))
        })?;

        Ok(body.into())
    }

    async fn search(&self, query: &str) -> Result<Vec<MovieSummary>, ApiError> {
        let url = format!("{}/api/search-movies", self.base_url);

        debug!("search request: query='{}'", query);

        let response = self
            .client
            .get(&url)
            .query(&[("query", query)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(format!("Failed to parse search response: {}", e)))?;

        Ok(body.results.into_iter().map(|r| r.into()).collect())
    }

    async fn get_detail(&self, movie_id: u32) -> Result<MovieDetail, ApiError> {
        let url = format!("{}/api/movie-details/{}", self.base_url, movie_id);

        debug!("detail request: id={}", movie_id);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let body: MovieDetailResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(format!("Failed to parse detail response: {}", e)))?;

        Ok(normalize_detail(body, &self.region))
    }
}

// ============================================================================
// Wire DTOs (private)
// ============================================================================

#[derive(Debug, Serialize)]
struct RecommendRequest<'a> {
    diary: &'a str,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RecommendResponse {
    emotion: String,
    reason: String,
    #[serde(default)]
    movies: Vec<MovieSummaryResult>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<MovieSummaryResult>,
}

#[derive(Debug, Deserialize)]
struct MovieSummaryResult {
    id: u32,
    title: String,
    overview: Option<String>,
    poster_path: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MovieDetailResponse {
    id: u32,
    title: String,
    overview: Option<String>,
    poster_path: Option<String>,
    release_date: Option<String>,
    vote_average: Option<f32>,
    vote_count: Option<u32>,
    runtime: Option<u32>,
    #[serde(default)]
    genres: Vec<GenreResult>,
    credits: Option<CreditsResult>,
    #[serde(rename = "watch/providers")]
    watch_providers: Option<WatchProvidersResult>,
}

#[derive(Debug, Deserialize)]
struct GenreResult {
    id: u32,
    name: String,
}

#[derive(Debug, Deserialize)]
struct CreditsResult {
    #[serde(default)]
    cast: Vec<CastResult>,
    #[serde(default)]
    crew: Vec<CrewResult>,
}

#[derive(Debug, Deserialize)]
struct CastResult {
    name: String,
}

#[derive(Debug, Deserialize)]
struct CrewResult {
    #[serde(default)]
    job: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct WatchProvidersResult {
    #[serde(default)]
    results: HashMap<String, RegionProvidersResult>,
}

#[derive(Debug, Default, Deserialize)]
struct RegionProvidersResult {
    link: Option<String>,
    #[serde(default)]
    flatrate: Vec<ProviderResult>,
    #[serde(default)]
    buy: Vec<ProviderResult>,
    #[serde(default)]
    rent: Vec<ProviderResult>,
}

#[derive(Debug, Deserialize)]
struct ProviderResult {
    provider_id: u32,
    provider_name: String,
    logo_path: Option<String>,
}

// ============================================================================
// Conversions
// ============================================================================

impl From<MovieSummaryResult> for MovieSummary {
    fn from(r: MovieSummaryResult) -> Self {
        Self {
            id: r.id,
            title: r.title,
            overview: r.overview.unwrap_or_default(),
            poster_path: r.poster_path,
        }
    }
}

impl From<RecommendResponse> for RecommendationResult {
    fn from(r: RecommendResponse) -> Self {
        Self {
            emotion: r.emotion,
            reason: r.reason,
            movies: r.movies.into_iter().map(|m| m.into()).collect(),
        }
    }
}

impl From<ProviderResult> for Provider {
    fn from(p: ProviderResult) -> Self {
        Self {
            id: p.provider_id,
            name: p.provider_name,
            logo_path: p.logo_path,
        }
    }
}

/// Normalize a raw detail payload for the given watch-provider region.
///
/// Director is the first crew entry credited as "Director"; top cast is the
/// first three cast names; the provider section collapses to `None` when all
/// three categories for the region are empty.
fn normalize_detail(d: MovieDetailResponse, region: &str) -> MovieDetail {
    let director = d
        .credits
        .as_ref()
        .and_then(|c| c.crew.iter().find(|member| member.job == "Director"))
        .map(|member| member.name.clone());

    let top_cast = d
        .credits
        .map(|c| c.cast.into_iter().take(3).map(|member| member.name).collect())
        .unwrap_or_default();

    let watch_providers = d
        .watch_providers
        .and_then(|mut wp| wp.results.remove(region))
        .map(|r| WatchProviders {
            subscription: r.flatrate.into_iter().map(|p| p.into()).collect(),
            purchase: r.buy.into_iter().map(|p| p.into()).collect(),
            rental: r.rent.into_iter().map(|p| p.into()).collect(),
            more_info: r.link,
        })
        .filter(|providers| !providers.is_empty());

    MovieDetail {
        id: d.id,
        title: d.title,
        overview: d.overview.unwrap_or_default(),
        poster_path: d.poster_path,
        release_date: d.release_date,
        vote_average: d.vote_average,
        vote_count: d.vote_count.unwrap_or(0),
        runtime_minutes: d.runtime,
        genres: d
            .genres
            .into_iter()
            .map(|g| Genre {
                id: g.id,
                name: g.name,
            })
            .collect(),
        director,
        top_cast,
        watch_providers,
    }
}
