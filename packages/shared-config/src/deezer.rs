//! Deezer catalog configuration types

use crate::{get_env_or_default, parse_env, ConfigResult};

/// Deezer API configuration
///
/// The public Deezer API is anonymous, so this configuration never fails
/// on missing credentials.
#[derive(Debug, Clone)]
pub struct DeezerConfig {
    /// API base URL
    pub api_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl DeezerConfig {
    /// Load Deezer configuration from environment variables
    pub fn from_env() -> ConfigResult<Self> {
        Ok(Self {
            api_url: get_env_or_default("DEEZER_API_URL", "https://api.deezer.com"),
            timeout_secs: parse_env("DEEZER_TIMEOUT", 20)?,
        })
    }

    /// Create a configuration with a custom base URL (useful for testing)
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            api_url: url.into(),
            timeout_secs: 20,
        }
    }

    /// Get the full URL for an API endpoint path
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.api_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }
}

impl Default for DeezerConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.deezer.com".to_string(),
            timeout_secs: 20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DeezerConfig::default();
        assert_eq!(config.api_url, "https://api.deezer.com");
        assert_eq!(config.timeout_secs, 20);
    }

    #[test]
    fn test_endpoint() {
        let config = DeezerConfig::with_url("http://localhost:8080/");
        assert_eq!(config.endpoint("search"), "http://localhost:8080/search");
        assert_eq!(
            config.endpoint("/artist/123/top"),
            "http://localhost:8080/artist/123/top"
        );
    }
}
