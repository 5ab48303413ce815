//! Spotify Web API client (client-credentials flow)

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use cadenza_shared_config::{CatalogProvider, SpotifyConfig};
use reqwest::Client;
use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::{debug, instrument, warn};

use crate::client::{CatalogClient, MAX_TOTAL_SEEDS};
use crate::error::{ProviderError, ProviderResult};
use crate::models::{ArtworkRef, RawTrack};

/// Safety margin subtracted from the token lifetime before it is
/// considered stale
const TOKEN_EXPIRY_MARGIN_SECS: u64 = 60;

/// Bearer token obtained from the client-credentials flow
struct CachedToken {
    access_token: String,
    expires_at: Instant,
}

impl CachedToken {
    fn is_fresh(&self) -> bool {
        Instant::now() < self.expires_at
    }
}

/// Spotify Web API client
///
/// Authentication is established once per client instance: the bearer
/// token is fetched lazily on the first call and reused until it goes
/// stale.
#[derive(Clone)]
pub struct SpotifyClient {
    http_client: Client,
    config: SpotifyConfig,
    token: Arc<Mutex<Option<CachedToken>>>,
}

impl fmt::Debug for SpotifyClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpotifyClient")
            .field("client_id", &self.config.client_id)
            .field("client_secret", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}

#[derive(Debug, Deserialize)]
struct RecommendationsResponse {
    tracks: Vec<SpotifyTrack>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    tracks: SearchTracksPage,
}

#[derive(Debug, Deserialize)]
struct SearchTracksPage {
    items: Vec<SpotifyTrack>,
}

#[derive(Debug, Deserialize)]
struct TopTracksResponse {
    tracks: Vec<SpotifyTrack>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SpotifyTrack {
    pub name: Option<String>,
    #[serde(default)]
    pub artists: Vec<SpotifyArtist>,
    #[serde(default)]
    pub external_urls: SpotifyExternalUrls,
    pub album: Option<SpotifyAlbum>,
    pub preview_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SpotifyArtist {
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SpotifyExternalUrls {
    pub spotify: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SpotifyAlbum {
    pub name: Option<String>,
    #[serde(default)]
    pub images: Vec<SpotifyImage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SpotifyImage {
    pub url: String,
    pub width: Option<u32>,
}

impl From<SpotifyTrack> for RawTrack {
    fn from(track: SpotifyTrack) -> Self {
        let (album, artwork) = match track.album {
            Some(album) => (
                album.name,
                album
                    .images
                    .into_iter()
                    .map(|image| ArtworkRef {
                        url: image.url,
                        width: image.width,
                    })
                    .collect(),
            ),
            None => (None, Vec::new()),
        };

        Self {
            title: track.name,
            artist: track.artists.into_iter().next().map(|a| a.name),
            url: track.external_urls.spotify,
            artwork,
            preview_url: track.preview_url,
            album,
        }
    }
}

/// Spotify error response body: `{"error": {"status": ..., "message": ...}}`
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    status: u16,
    #[serde(default)]
    message: String,
}

impl SpotifyClient {
    /// Create a new Spotify client from configuration
    ///
    /// # Errors
    /// Returns [`ProviderError::MissingCredentials`] if either credential
    /// is empty. No network call is made here; the token is fetched on
    /// first use.
    pub fn new(config: &SpotifyConfig) -> ProviderResult<Self> {
        if config.client_id.trim().is_empty() || config.client_secret.trim().is_empty() {
            return Err(ProviderError::MissingCredentials("spotify"));
        }

        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(5))
            .pool_max_idle_per_host(5)
            .user_agent("Cadenza/0.1")
            .build()?;

        Ok(Self {
            http_client,
            config: config.clone(),
            token: Arc::new(Mutex::new(None)),
        })
    }

    fn transport_error(e: reqwest::Error) -> ProviderError {
        if e.is_timeout() {
            ProviderError::Timeout
        } else {
            ProviderError::Http(e)
        }
    }

    /// Get a fresh bearer token, fetching one if the cache is empty or stale
    async fn bearer_token(&self) -> ProviderResult<String> {
        let mut guard = self.token.lock().await;
        if let Some(token) = guard.as_ref() {
            if token.is_fresh() {
                return Ok(token.access_token.clone());
            }
            debug!("Spotify token stale, refreshing");
        }

        let basic = BASE64.encode(format!(
            "{}:{}",
            self.config.client_id, self.config.client_secret
        ));

        let response = self
            .http_client
            .post(&self.config.token_url)
            .header("Authorization", format!("Basic {}", basic))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(Self::transport_error)?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED
            || response.status() == reqwest::StatusCode::BAD_REQUEST
        {
            let body = response.text().await.unwrap_or_default();
            warn!("Spotify rejected client credentials");
            return Err(ProviderError::AuthRejected(body));
        }

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let token: TokenResponse = response.json().await.map_err(Self::transport_error)?;
        let lifetime = token
            .expires_in
            .saturating_sub(TOKEN_EXPIRY_MARGIN_SECS)
            .max(1);
        let access_token = token.access_token.clone();

        *guard = Some(CachedToken {
            access_token: token.access_token,
            expires_at: Instant::now() + Duration::from_secs(lifetime),
        });

        Ok(access_token)
    }

    /// Perform an authenticated GET and decode the JSON body as `T`
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ProviderResult<T> {
        let token = self.bearer_token().await?;

        let response = self
            .http_client
            .get(self.config.endpoint(path))
            .bearer_auth(token)
            .query(query)
            .send()
            .await
            .map_err(Self::transport_error)?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            warn!("Spotify API rate limited");
            return Err(ProviderError::RateLimited);
        }
        if status == reqwest::StatusCode::UNAUTHORIZED {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::AuthRejected(body));
        }
        if !status.is_success() {
            let message = match response.json::<ApiErrorResponse>().await {
                Ok(body) => body.error.message,
                Err(_) => String::new(),
            };
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response.json().await.map_err(Self::transport_error)
    }
}

#[async_trait]
impl CatalogClient for SpotifyClient {
    fn provider(&self) -> CatalogProvider {
        CatalogProvider::Spotify
    }

    #[instrument(skip(self))]
    async fn recommend(
        &self,
        genres: &[String],
        artist_ids: &[String],
        track_ids: &[String],
        limit: usize,
    ) -> ProviderResult<Vec<RawTrack>> {
        let total = genres.len() + artist_ids.len() + track_ids.len();
        if total == 0 {
            return Err(ProviderError::InvalidSeeds(
                "at least one seed value is required".to_string(),
            ));
        }
        if total > MAX_TOTAL_SEEDS {
            // The provider hard-rejects over-budget requests with a 400,
            // so surface it locally without burning a network round trip.
            return Err(ProviderError::InvalidSeeds(format!(
                "{} seeds exceed the maximum of {}",
                total, MAX_TOTAL_SEEDS
            )));
        }

        let mut query = vec![("limit", limit.to_string()), ("market", "US".to_string())];
        if !genres.is_empty() {
            query.push(("seed_genres", genres.join(",")));
        }
        if !artist_ids.is_empty() {
            query.push(("seed_artists", artist_ids.join(",")));
        }
        if !track_ids.is_empty() {
            query.push(("seed_tracks", track_ids.join(",")));
        }

        debug!(
            genres = genres.len(),
            artists = artist_ids.len(),
            tracks = track_ids.len(),
            "Requesting Spotify recommendations"
        );

        let response: RecommendationsResponse = self.get_json("recommendations", &query).await?;

        Ok(response.tracks.into_iter().map(Into::into).collect())
    }

    #[instrument(skip(self))]
    async fn search_tracks(
        &self,
        artist_name: &str,
        keyword: &str,
        limit: usize,
    ) -> ProviderResult<Vec<RawTrack>> {
        let q = format!("artist:\"{}\" {}", artist_name, keyword);
        debug!(query = %q, "Searching Spotify tracks");

        let response: SearchResponse = self
            .get_json(
                "search",
                &[
                    ("q", q),
                    ("type", "track".to_string()),
                    ("limit", limit.to_string()),
                ],
            )
            .await?;

        Ok(response.tracks.items.into_iter().map(Into::into).collect())
    }

    #[instrument(skip(self))]
    async fn artist_top_tracks(
        &self,
        artist_id: &str,
        limit: usize,
    ) -> ProviderResult<Vec<RawTrack>> {
        debug!(artist_id, "Fetching Spotify artist top tracks");

        let response: TopTracksResponse = self
            .get_json(
                &format!("artists/{}/top-tracks", artist_id),
                &[("market", "US".to_string())],
            )
            .await?;

        Ok(response
            .tracks
            .into_iter()
            .take(limit)
            .map(Into::into)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SpotifyConfig {
        SpotifyConfig::new("test-id", "test-secret")
    }

    #[test]
    fn test_client_requires_credentials() {
        let result = SpotifyClient::new(&SpotifyConfig::new("", "secret"));
        assert!(matches!(
            result,
            Err(ProviderError::MissingCredentials("spotify"))
        ));

        let result = SpotifyClient::new(&SpotifyConfig::new("id", "   "));
        assert!(matches!(
            result,
            Err(ProviderError::MissingCredentials("spotify"))
        ));
    }

    #[test]
    fn test_client_accepts_valid_credentials() {
        assert!(SpotifyClient::new(&test_config()).is_ok());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let client = SpotifyClient::new(&test_config()).unwrap();
        let debug_str = format!("{:?}", client);
        assert!(!debug_str.contains("test-secret"));
        assert!(debug_str.contains("[REDACTED]"));
    }

    #[tokio::test]
    async fn test_recommend_rejects_over_budget_seeds() {
        let client = SpotifyClient::new(&test_config()).unwrap();
        let genres: Vec<String> = vec!["pop".into(), "disco".into(), "dance".into()];
        let artists: Vec<String> = vec!["a1".into(), "a2".into()];
        let tracks: Vec<String> = vec!["t1".into()];

        // 6 seeds total, over the 5-seed ceiling; fails before any request
        let result = client.recommend(&genres, &artists, &tracks, 10).await;
        assert!(matches!(result, Err(ProviderError::InvalidSeeds(_))));
    }

    #[tokio::test]
    async fn test_recommend_rejects_empty_seeds() {
        let client = SpotifyClient::new(&test_config()).unwrap();
        let result = client.recommend(&[], &[], &[], 10).await;
        assert!(matches!(result, Err(ProviderError::InvalidSeeds(_))));
    }

    #[test]
    fn test_track_conversion() {
        let track = SpotifyTrack {
            name: Some("Cruel Summer".to_string()),
            artists: vec![SpotifyArtist {
                name: "Taylor Swift".to_string(),
            }],
            external_urls: SpotifyExternalUrls {
                spotify: Some("https://open.spotify.com/track/x".to_string()),
            },
            album: Some(SpotifyAlbum {
                name: Some("Lover".to_string()),
                images: vec![
                    SpotifyImage {
                        url: "https://img/640".to_string(),
                        width: Some(640),
                    },
                    SpotifyImage {
                        url: "https://img/300".to_string(),
                        width: Some(300),
                    },
                ],
            }),
            preview_url: None,
        };

        let raw: RawTrack = track.into();
        assert_eq!(raw.title.as_deref(), Some("Cruel Summer"));
        assert_eq!(raw.artist.as_deref(), Some("Taylor Swift"));
        assert_eq!(raw.album.as_deref(), Some("Lover"));
        assert_eq!(raw.artwork.len(), 2);
        assert_eq!(raw.artwork[0].width, Some(640));
    }

    #[test]
    fn test_track_conversion_without_album() {
        let track = SpotifyTrack {
            name: Some("Untitled".to_string()),
            artists: vec![],
            external_urls: SpotifyExternalUrls::default(),
            album: None,
            preview_url: None,
        };

        let raw: RawTrack = track.into();
        assert!(raw.artist.is_none());
        assert!(raw.album.is_none());
        assert!(raw.artwork.is_empty());
    }
}
