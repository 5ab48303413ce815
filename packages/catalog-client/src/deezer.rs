//! Deezer API client (anonymous)
//!
//! Deezer has no parameterized recommendation endpoint; the genre chart
//! is its alternative path. Errors can arrive inside a 200 body, so every
//! response is checked for the error envelope before decoding.

use std::time::Duration;

use async_trait::async_trait;
use cadenza_shared_config::{CatalogProvider, DeezerConfig};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::client::CatalogClient;
use crate::error::{ProviderError, ProviderResult};
use crate::models::{ArtworkRef, RawTrack};

/// Deezer's chart id for "all genres", used when a tag has no mapping
const ALL_GENRES_CHART: u32 = 0;

/// Map a seed genre tag onto a Deezer editorial genre id
fn genre_chart_id(genre: &str) -> u32 {
    match genre.to_lowercase().as_str() {
        "pop" | "happy" | "party" | "disco" => 132,
        "rock" | "hard rock" | "pop-rock" => 152,
        "dance" | "edm" | "workout" => 113,
        "electronic" | "electro" => 106,
        "r-n-b" | "soul" | "love" | "romance" => 165,
        "metal" | "punk" | "aggressive" => 464,
        "classical" | "piano" | "instrumental" => 98,
        "jazz" => 129,
        "chill" | "ambient" | "acoustic" | "alternative" | "indie" => 85,
        "sad" | "blues" | "singer-songwriter" => 153,
        _ => ALL_GENRES_CHART,
    }
}

/// Deezer API client
#[derive(Debug, Clone)]
pub struct DeezerClient {
    http_client: Client,
    config: DeezerConfig,
}

#[derive(Debug, Deserialize)]
struct TrackListResponse {
    #[serde(default)]
    data: Vec<DeezerTrack>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DeezerTrack {
    pub title: Option<String>,
    pub link: Option<String>,
    pub preview: Option<String>,
    pub artist: Option<DeezerArtist>,
    pub album: Option<DeezerAlbum>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DeezerArtist {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DeezerAlbum {
    pub title: Option<String>,
    pub cover_small: Option<String>,
    pub cover_medium: Option<String>,
    pub cover_big: Option<String>,
    pub cover_xl: Option<String>,
}

impl From<DeezerTrack> for RawTrack {
    fn from(track: DeezerTrack) -> Self {
        let (album, artwork) = match track.album {
            Some(album) => {
                // Largest first, mirroring how other providers order art
                let renditions = [
                    (album.cover_xl, Some(1000)),
                    (album.cover_big, Some(500)),
                    (album.cover_medium, Some(250)),
                    (album.cover_small, Some(56)),
                ];
                let artwork = renditions
                    .into_iter()
                    .filter_map(|(url, width)| url.map(|url| ArtworkRef { url, width }))
                    .collect();
                (album.title, artwork)
            }
            None => (None, Vec::new()),
        };

        Self {
            title: track.title,
            artist: track.artist.map(|a| a.name),
            url: track.link,
            artwork,
            preview_url: track.preview.filter(|p| !p.is_empty()),
            album,
        }
    }
}

/// Deezer error envelope: `{"error": {"type": ..., "message": ..., "code": ...}}`
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: u16,
    #[serde(default)]
    message: String,
}

/// Deezer error code for quota exceeded
const CODE_QUOTA_EXCEEDED: u16 = 4;

impl DeezerClient {
    /// Create a new Deezer client from configuration
    ///
    /// The public Deezer API is anonymous, so construction only fails if
    /// the HTTP client itself cannot be built.
    pub fn new(config: &DeezerConfig) -> ProviderResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(5))
            .pool_max_idle_per_host(5)
            .user_agent("Cadenza/0.1")
            .build()?;

        Ok(Self {
            http_client,
            config: config.clone(),
        })
    }

    fn transport_error(e: reqwest::Error) -> ProviderError {
        if e.is_timeout() {
            ProviderError::Timeout
        } else {
            ProviderError::Http(e)
        }
    }

    /// Perform a GET and decode the track-list body, handling Deezer's
    /// in-band error envelope
    async fn get_tracks(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ProviderResult<Vec<RawTrack>> {
        let response = self
            .http_client
            .get(self.config.endpoint(path))
            .query(query)
            .send()
            .await
            .map_err(Self::transport_error)?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            warn!("Deezer API rate limited");
            return Err(ProviderError::RateLimited);
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let text = response.text().await.map_err(Self::transport_error)?;

        if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(&text) {
            if envelope.error.code == CODE_QUOTA_EXCEEDED {
                warn!("Deezer quota exceeded");
                return Err(ProviderError::RateLimited);
            }
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message: envelope.error.message,
            });
        }

        let list: TrackListResponse = serde_json::from_str(&text)?;
        Ok(list.data.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl CatalogClient for DeezerClient {
    fn provider(&self) -> CatalogProvider {
        CatalogProvider::Deezer
    }

    #[instrument(skip(self))]
    async fn search_tracks(
        &self,
        artist_name: &str,
        keyword: &str,
        limit: usize,
    ) -> ProviderResult<Vec<RawTrack>> {
        let q = format!("artist:\"{}\" \"{}\"", artist_name, keyword);
        debug!(query = %q, "Searching Deezer tracks");

        self.get_tracks("search", &[("q", q), ("limit", limit.to_string())])
            .await
    }

    #[instrument(skip(self))]
    async fn artist_top_tracks(
        &self,
        artist_id: &str,
        limit: usize,
    ) -> ProviderResult<Vec<RawTrack>> {
        debug!(artist_id, "Fetching Deezer artist top tracks");

        self.get_tracks(
            &format!("artist/{}/top", artist_id),
            &[("limit", limit.to_string())],
        )
        .await
    }

    #[instrument(skip(self))]
    async fn chart_by_genre(&self, genre: &str, limit: usize) -> ProviderResult<Vec<RawTrack>> {
        let chart_id = genre_chart_id(genre);
        debug!(genre, chart_id, "Fetching Deezer genre chart");

        self.get_tracks(
            &format!("chart/{}/tracks", chart_id),
            &[("limit", limit.to_string())],
        )
        .await
    }
}
