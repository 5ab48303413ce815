//! The `CatalogClient` capability trait and provider selection

use async_trait::async_trait;
use cadenza_shared_config::{CatalogProvider, CommonConfig};

use crate::error::{ProviderError, ProviderResult};
use crate::models::RawTrack;
use crate::{DeezerClient, LastfmClient, SpotifyClient};

/// Hard ceiling on total seed values accepted by parameterized
/// recommendation endpoints. Exceeding it is a hard rejection at the
/// provider boundary, so clients enforce it locally before any request.
pub const MAX_TOTAL_SEEDS: usize = 5;

/// A music catalog provider's query surface
///
/// This is a capability set: providers implement the subset of endpoints
/// they actually expose and leave the rest at the default, which reports
/// [`ProviderError::Unsupported`]. An empty result list is the expected
/// "no match" signal on any method, never an error.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Which provider this client talks to
    fn provider(&self) -> CatalogProvider;

    /// Parameterized similarity recommendation from seed values
    ///
    /// Total seeds across all three categories must not exceed
    /// [`MAX_TOTAL_SEEDS`].
    async fn recommend(
        &self,
        _genres: &[String],
        _artist_ids: &[String],
        _track_ids: &[String],
        _limit: usize,
    ) -> ProviderResult<Vec<RawTrack>> {
        Err(ProviderError::Unsupported("recommend"))
    }

    /// Free-text track search biased by artist name and keyword
    async fn search_tracks(
        &self,
        _artist_name: &str,
        _keyword: &str,
        _limit: usize,
    ) -> ProviderResult<Vec<RawTrack>> {
        Err(ProviderError::Unsupported("search_tracks"))
    }

    /// Canonical per-artist popularity listing
    ///
    /// The id is provider-specific: a catalog id for Spotify and Deezer,
    /// the artist name for Last.fm.
    async fn artist_top_tracks(
        &self,
        _artist_id: &str,
        _limit: usize,
    ) -> ProviderResult<Vec<RawTrack>> {
        Err(ProviderError::Unsupported("artist_top_tracks"))
    }

    /// Genre chart listing, the alternative path for providers without a
    /// recommendation endpoint
    async fn chart_by_genre(&self, _genre: &str, _limit: usize) -> ProviderResult<Vec<RawTrack>> {
        Err(ProviderError::Unsupported("chart_by_genre"))
    }
}

/// Build the catalog client selected by configuration
///
/// # Errors
/// Returns [`ProviderError::MissingCredentials`] when the selected
/// provider requires credentials that were not configured. This is raised
/// synchronously, before any network call.
pub fn build_client(config: &CommonConfig) -> ProviderResult<Box<dyn CatalogClient>> {
    match config.provider {
        CatalogProvider::Spotify => {
            let spotify = config
                .spotify
                .as_ref()
                .ok_or(ProviderError::MissingCredentials("spotify"))?;
            Ok(Box::new(SpotifyClient::new(spotify)?))
        }
        CatalogProvider::Deezer => Ok(Box::new(DeezerClient::new(&config.deezer)?)),
        CatalogProvider::Lastfm => {
            let lastfm = config
                .lastfm
                .as_ref()
                .ok_or(ProviderError::MissingCredentials("lastfm"))?;
            Ok(Box::new(LastfmClient::new(lastfm)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadenza_shared_config::{DeezerConfig, MoodModelConfig};

    struct NoCapabilities;

    #[async_trait]
    impl CatalogClient for NoCapabilities {
        fn provider(&self) -> CatalogProvider {
            CatalogProvider::Deezer
        }
    }

    #[tokio::test]
    async fn test_default_methods_report_unsupported() {
        let client = NoCapabilities;
        assert!(matches!(
            client.recommend(&[], &[], &[], 10).await,
            Err(ProviderError::Unsupported("recommend"))
        ));
        assert!(matches!(
            client.search_tracks("a", "b", 10).await,
            Err(ProviderError::Unsupported("search_tracks"))
        ));
        assert!(matches!(
            client.artist_top_tracks("a", 10).await,
            Err(ProviderError::Unsupported("artist_top_tracks"))
        ));
        assert!(matches!(
            client.chart_by_genre("pop", 10).await,
            Err(ProviderError::Unsupported("chart_by_genre"))
        ));
    }

    fn config_without_credentials(provider: CatalogProvider) -> CommonConfig {
        CommonConfig {
            provider,
            spotify: None,
            deezer: DeezerConfig::default(),
            lastfm: None,
            mood: MoodModelConfig::default(),
            log_level: "info".to_string(),
        }
    }

    #[test]
    fn test_build_client_spotify_requires_credentials() {
        let result = build_client(&config_without_credentials(CatalogProvider::Spotify));
        assert!(matches!(
            result,
            Err(ProviderError::MissingCredentials("spotify"))
        ));
    }

    #[test]
    fn test_build_client_lastfm_requires_credentials() {
        let result = build_client(&config_without_credentials(CatalogProvider::Lastfm));
        assert!(matches!(
            result,
            Err(ProviderError::MissingCredentials("lastfm"))
        ));
    }

    #[test]
    fn test_build_client_deezer_is_anonymous() {
        let client = build_client(&config_without_credentials(CatalogProvider::Deezer)).unwrap();
        assert_eq!(client.provider(), CatalogProvider::Deezer);
    }
}
