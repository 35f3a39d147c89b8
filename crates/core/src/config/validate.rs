use reqwest::Url;

use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Artsy base URL is an absolute http(s) URL
/// - Artsy timeout is not 0
///
/// Empty credentials are accepted; token exchange reports them at request time.
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    let url = Url::parse(&config.artsy.base_url).map_err(|e| {
        ConfigError::ValidationError(format!(
            "artsy.base_url '{}' is not a valid URL: {}",
            config.artsy.base_url, e
        ))
    })?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::ValidationError(format!(
            "artsy.base_url must use http or https, got '{}'",
            url.scheme()
        )));
    }

    if config.artsy.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "artsy.timeout_secs cannot be 0".to_string(),
        ));
    }

    Ok(())
}
