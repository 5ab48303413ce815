//! Last.fm catalog configuration types

use crate::{get_env_or_default, get_required_env, parse_env, ConfigError, ConfigResult};

/// Last.fm API configuration
#[derive(Debug, Clone)]
pub struct LastfmConfig {
    /// API key
    pub api_key: String,

    /// API base URL
    pub api_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl LastfmConfig {
    /// Load Last.fm configuration from environment variables
    ///
    /// Returns an error if `LASTFM_API_KEY` is unset or empty. This allows
    /// consumers to call `.ok()` to get `Option<LastfmConfig>` when Last.fm
    /// is not the selected provider.
    pub fn from_env() -> ConfigResult<Self> {
        let api_key = get_required_env("LASTFM_API_KEY")?;

        if api_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "LASTFM_API_KEY".to_string(),
                "API key cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            api_key,
            api_url: get_env_or_default("LASTFM_API_URL", "https://ws.audioscrobbler.com/2.0/"),
            timeout_secs: parse_env("LASTFM_TIMEOUT", 20)?,
        })
    }

    /// Create a configuration with a custom API key (useful for testing)
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: "https://ws.audioscrobbler.com/2.0/".to_string(),
            timeout_secs: 20,
        }
    }

    /// Point the API endpoint at a custom base URL (useful for testing)
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }
}
