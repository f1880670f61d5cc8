//! Plain-text rendering of the session's derived state.
//!
//! The core only derives states; everything user-facing about them (copy,
//! ordering, fallbacks) lives here.

use cinemood_core::{
    DetailOverlay, ImageConfig, ImageSize, MovieSummary, Provider, WorkflowCoordinator,
    WorkflowState,
};

/// Render the shared error line, both workflow panels, and nothing else.
pub fn render_workflows(coordinator: &WorkflowCoordinator, images: &ImageConfig) -> String {
    let mut out = String::new();

    if let Some(message) = coordinator.error_message() {
        out.push_str(&format!("! {}\n", message));
    }

    match coordinator.recommendation_state() {
        WorkflowState::Untouched => {}
        WorkflowState::Pending => out.push_str("Analyzing your diary...\n"),
        WorkflowState::EmptyResult => {
            out.push_str("No movies matched your day. Try writing a different entry.\n")
        }
        WorkflowState::Failed => {}
        WorkflowState::Populated => {
            if let Some(result) = coordinator.recommendation_result() {
                out.push_str(&format!("Today you felt: {}!\n", result.emotion));
                out.push_str(&format!("{}\n", result.reason));
                out.push_str("Recommended for your day:\n");
                for movie in &result.movies {
                    out.push_str(&render_card(movie, images));
                }
            }
        }
    }

    match coordinator.search_state() {
        WorkflowState::Untouched => {}
        WorkflowState::Pending => out.push_str("Searching...\n"),
        WorkflowState::EmptyResult => out.push_str("No results found.\n"),
        WorkflowState::Failed => {}
        WorkflowState::Populated => {
            out.push_str("Search results:\n");
            for movie in coordinator.search_results().unwrap_or_default() {
                out.push_str(&render_card(movie, images));
            }
        }
    }

    out
}

fn render_card(movie: &MovieSummary, images: &ImageConfig) -> String {
    let mut out = format!("  [{}] {}\n", movie.id, movie.title);
    if let Some(path) = &movie.poster_path {
        out.push_str(&format!("      poster: {}\n", images.url(ImageSize::W200, path)));
    }
    if !movie.overview.is_empty() {
        out.push_str(&format!("      {}\n", movie.overview));
    }
    out
}

/// Render the detail overlay, or an empty string while it is hidden.
pub fn render_overlay(overlay: &DetailOverlay, images: &ImageConfig) -> String {
    let Some(detail) = overlay.detail().filter(|_| overlay.is_visible()) else {
        return String::new();
    };

    let mut out = String::new();
    out.push_str(&format!("=== {} ===\n", detail.title));

    if let Some(path) = &detail.poster_path {
        out.push_str(&format!("Poster: {}\n", images.url(ImageSize::W300, path)));
    }
    if let Some(date) = &detail.release_date {
        out.push_str(&format!("Released: {}\n", date));
    }

    let rating = match detail.vote_average {
        Some(average) => format!("{:.1}", average),
        None => "N/A".to_string(),
    };
    out.push_str(&format!("Rating: {} ({} votes)\n", rating, detail.vote_count));

    if let Some(runtime) = detail.runtime_minutes {
        out.push_str(&format!("Runtime: {} min\n", runtime));
    }
    if !detail.genres.is_empty() {
        let names: Vec<&str> = detail.genres.iter().map(|g| g.name.as_str()).collect();
        out.push_str(&format!("Genres: {}\n", names.join(", ")));
    }
    if let Some(director) = &detail.director {
        out.push_str(&format!("Director: {}\n", director));
    }
    if !detail.top_cast.is_empty() {
        out.push_str(&format!("Starring: {}\n", detail.top_cast.join(", ")));
    }

    if let Some(providers) = &detail.watch_providers {
        out.push_str("Where to watch:\n");
        out.push_str(&render_provider_row("Subscription", &providers.subscription, images));
        out.push_str(&render_provider_row("Purchase", &providers.purchase, images));
        out.push_str(&render_provider_row("Rental", &providers.rental, images));
        if let Some(link) = &providers.more_info {
            out.push_str(&format!("  More info: {}\n", link));
        }
    }

    out.push_str("Plot:\n");
    if detail.overview.is_empty() {
        out.push_str("  No overview available.\n");
    } else {
        out.push_str(&format!("  {}\n", detail.overview));
    }

    out
}

fn render_provider_row(label: &str, providers: &[Provider], images: &ImageConfig) -> String {
    if providers.is_empty() {
        return String::new();
    }

    let names: Vec<String> = providers
        .iter()
        .map(|p| match &p.logo_path {
            Some(path) => format!("{} ({})", p.name, images.url(ImageSize::Original, path)),
            None => p.name.clone(),
        })
        .collect();
    format!("  {}: {}\n", label, names.join(", "))
}
