//! Spotify catalog configuration types

use crate::{get_required_env, parse_env, ConfigError, ConfigResult};

/// Spotify Web API configuration
///
/// Uses the client-credentials flow, so both a client id and secret are
/// required. Absence of either is a fatal startup condition.
#[derive(Debug, Clone)]
pub struct SpotifyConfig {
    /// Application client id
    pub client_id: String,

    /// Application client secret
    pub client_secret: String,

    /// Web API base URL
    pub api_url: String,

    /// Token endpoint URL (client-credentials flow)
    pub token_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl SpotifyConfig {
    /// Load Spotify configuration from environment variables
    ///
    /// Returns an error if `SPOTIFY_CLIENT_ID` or `SPOTIFY_CLIENT_SECRET`
    /// is unset or empty. This allows consumers to call `.ok()` to get
    /// `Option<SpotifyConfig>` when Spotify is not the selected provider.
    pub fn from_env() -> ConfigResult<Self> {
        let client_id = get_required_env("SPOTIFY_CLIENT_ID")?;
        let client_secret = get_required_env("SPOTIFY_CLIENT_SECRET")?;

        if client_id.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "SPOTIFY_CLIENT_ID".to_string(),
                "client id cannot be empty".to_string(),
            ));
        }

        if client_secret.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "SPOTIFY_CLIENT_SECRET".to_string(),
                "client secret cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            client_id,
            client_secret,
            api_url: crate::get_env_or_default("SPOTIFY_API_URL", "https://api.spotify.com/v1"),
            token_url: crate::get_env_or_default(
                "SPOTIFY_TOKEN_URL",
                "https://accounts.spotify.com/api/token",
            ),
            timeout_secs: parse_env("SPOTIFY_TIMEOUT", 20)?,
        })
    }

    /// Create a configuration with custom credentials (useful for testing)
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            api_url: "https://api.spotify.com/v1".to_string(),
            token_url: "https://accounts.spotify.com/api/token".to_string(),
            timeout_secs: 20,
        }
    }

    /// Point both the API and token endpoints at a custom base URL
    /// (useful for testing against a mock server)
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let base = url.into();
        self.api_url = format!("{}/v1", base.trim_end_matches('/'));
        self.token_url = format!("{}/api/token", base.trim_end_matches('/'));
        self
    }

    /// Get the full URL for an API endpoint path
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.api_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_config() {
        let config = SpotifyConfig::new("id", "secret");
        assert_eq!(config.client_id, "id");
        assert_eq!(config.client_secret, "secret");
        assert_eq!(config.timeout_secs, 20);
    }

    #[test]
    fn test_endpoint() {
        let config = SpotifyConfig::new("id", "secret");
        assert_eq!(
            config.endpoint("recommendations"),
            "https://api.spotify.com/v1/recommendations"
        );
        assert_eq!(
            config.endpoint("/search"),
            "https://api.spotify.com/v1/search"
        );
    }

    #[test]
    fn test_with_base_url() {
        let config = SpotifyConfig::new("id", "secret").with_base_url("http://localhost:9999/");
        assert_eq!(config.api_url, "http://localhost:9999/v1");
        assert_eq!(config.token_url, "http://localhost:9999/api/token");
    }

    #[test]
    fn test_from_env_missing_credentials() {
        temp_env::with_vars_unset(["SPOTIFY_CLIENT_ID", "SPOTIFY_CLIENT_SECRET"], || {
            let result = SpotifyConfig::from_env();
            assert!(matches!(result, Err(ConfigError::MissingEnvVar(_))));
        });
    }

    #[test]
    fn test_from_env_empty_secret() {
        temp_env::with_vars(
            [
                ("SPOTIFY_CLIENT_ID", Some("id")),
                ("SPOTIFY_CLIENT_SECRET", Some("  ")),
            ],
            || {
                let result = SpotifyConfig::from_env();
                assert!(matches!(result, Err(ConfigError::InvalidValue(_, _))));
            },
        );
    }
}
