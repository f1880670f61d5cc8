use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - API base URL is an http(s) URL
/// - Request timeout is not 0
/// - Watch-provider region is not empty
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if !config.api.base_url.starts_with("http://") && !config.api.base_url.starts_with("https://") {
        return Err(ConfigError::ValidationError(format!(
            "api.base_url must be an http(s) URL, got '{}'",
            config.api.base_url
        )));
    }

    if config.api.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "api.timeout_secs cannot be 0".to_string(),
        ));
    }

    if config.api.region.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "api.region cannot be empty".to_string(),
        ));
    }

    Ok(())
}
