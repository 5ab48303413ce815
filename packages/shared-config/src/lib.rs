//! Shared configuration types for Cadenza services
//!
//! This crate provides the environment-driven configuration used by the
//! catalog clients, the mood classification client, and the CLI, ensuring
//! consistency across the workspace.

mod deezer;
mod error;
mod lastfm;
mod mood;
mod spotify;

pub use deezer::DeezerConfig;
pub use error::{ConfigError, ConfigResult};
pub use lastfm::LastfmConfig;
pub use mood::MoodModelConfig;
pub use spotify::SpotifyConfig;

use std::env;

/// The external music catalog provider backing the recommender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogProvider {
    Spotify,
    /// Deezer is the default: its public API needs no credentials, so a
    /// bare environment still resolves end to end.
    #[default]
    Deezer,
    Lastfm,
}

impl std::str::FromStr for CatalogProvider {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "spotify" => Ok(Self::Spotify),
            "deezer" => Ok(Self::Deezer),
            "lastfm" | "last.fm" => Ok(Self::Lastfm),
            other => Err(ConfigError::InvalidValue(
                "CATALOG_PROVIDER".to_string(),
                format!("unknown provider: {}", other),
            )),
        }
    }
}

impl std::fmt::Display for CatalogProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Spotify => write!(f, "spotify"),
            Self::Deezer => write!(f, "deezer"),
            Self::Lastfm => write!(f, "lastfm"),
        }
    }
}

/// Common configuration shared between all services
#[derive(Debug, Clone)]
pub struct CommonConfig {
    /// The selected catalog provider
    pub provider: CatalogProvider,

    /// Spotify configuration (required when Spotify is selected)
    pub spotify: Option<SpotifyConfig>,

    /// Deezer configuration (always available, anonymous API)
    pub deezer: DeezerConfig,

    /// Last.fm configuration (required when Last.fm is selected)
    pub lastfm: Option<LastfmConfig>,

    /// Mood classification model configuration
    pub mood: MoodModelConfig,

    /// Log level (from RUST_LOG or LOG_LEVEL)
    pub log_level: String,
}

impl CommonConfig {
    /// Load common configuration from environment variables
    ///
    /// Credential sections are only required for the selected provider;
    /// the others load best-effort so a partially configured environment
    /// still starts.
    pub fn from_env() -> ConfigResult<Self> {
        let provider: CatalogProvider = match env::var("CATALOG_PROVIDER") {
            Ok(value) => value.parse()?,
            Err(_) => CatalogProvider::default(),
        };

        let spotify = match provider {
            CatalogProvider::Spotify => Some(SpotifyConfig::from_env()?),
            _ => SpotifyConfig::from_env().ok(),
        };

        let lastfm = match provider {
            CatalogProvider::Lastfm => Some(LastfmConfig::from_env()?),
            _ => LastfmConfig::from_env().ok(),
        };

        Ok(Self {
            provider,
            spotify,
            deezer: DeezerConfig::from_env()?,
            lastfm,
            mood: MoodModelConfig::from_env()?,
            log_level: env::var("RUST_LOG")
                .or_else(|_| env::var("LOG_LEVEL"))
                .unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Helper function to get a required environment variable
pub fn get_required_env(name: &str) -> ConfigResult<String> {
    env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Helper function to get an optional environment variable with a default
pub fn get_env_or_default(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Helper function to parse an environment variable into a specific type
pub fn parse_env<T>(name: &str, default: T) -> ConfigResult<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(val) => val
            .parse()
            .map_err(|e| ConfigError::InvalidValue(name.to_string(), format!("{}", e))),
        Err(_) => Ok(default),
    }
}
