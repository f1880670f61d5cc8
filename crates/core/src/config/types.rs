use serde::{Deserialize, Serialize};

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub images: ImageConfig,
}

/// Backend API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the recommendation backend.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u32,
    /// Watch-provider region consulted for availability (default: KR).
    #[serde(default = "default_region")]
    pub region: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            region: default_region(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_region() -> String {
    "KR".to_string()
}

/// Image base URL configuration for posters and provider logos.
///
/// Path fragments returned by the API are resolved against this base.
/// Load failures and placeholder substitution are a presentation concern.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ImageConfig {
    #[serde(default = "default_image_base_url")]
    pub base_url: String,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            base_url: default_image_base_url(),
        }
    }
}

fn default_image_base_url() -> String {
    "https://image.tmdb.org/t/p".to_string()
}

/// Image size variant segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSize {
    /// 200px wide, used for result cards.
    W200,
    /// 300px wide, used for the overlay poster.
    W300,
    /// Full resolution, used for provider logos.
    Original,
}

impl ImageSize {
    pub fn as_segment(&self) -> &'static str {
        match self {
            ImageSize::W200 => "w200",
            ImageSize::W300 => "w300",
            ImageSize::Original => "original",
        }
    }
}

impl ImageConfig {
    /// Resolve a relative path fragment to a full image URL.
    pub fn url(&self, size: ImageSize, path: &str) -> String {
        format!(
            "{}/{}{}",
            self.base_url.trim_end_matches('/'),
            size.as_segment(),
            path
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.api.region, "KR");
        assert_eq!(config.images.base_url, "https://image.tmdb.org/t/p");
    }

    #[test]
    fn test_image_url_resolution() {
        let images = ImageConfig::default();
        assert_eq!(
            images.url(ImageSize::W200, "/poster.jpg"),
            "https://image.tmdb.org/t/p/w200/poster.jpg"
        );
        assert_eq!(
            images.url(ImageSize::Original, "/logo.png"),
            "https://image.tmdb.org/t/p/original/logo.png"
        );
    }

    #[test]
    fn test_image_url_trims_trailing_slash() {
        let images = ImageConfig {
            base_url: "https://img.example.com/".to_string(),
        };
        assert_eq!(
            images.url(ImageSize::W300, "/p.jpg"),
            "https://img.example.com/w300/p.jpg"
        );
    }
}
