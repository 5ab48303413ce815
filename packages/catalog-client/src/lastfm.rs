//! Last.fm API client
//!
//! Speaks the `ws.audioscrobbler.com/2.0/` query-parameter protocol with
//! JSON output. Last.fm has no recommendation endpoint; tag charts are
//! its alternative path. Top-track and search results carry no preview
//! or album data, so those fields stay empty.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use cadenza_shared_config::{CatalogProvider, LastfmConfig};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::client::CatalogClient;
use crate::error::{ProviderError, ProviderResult};
use crate::models::{ArtworkRef, RawTrack};

/// Last.fm error code for an invalid API key
const CODE_INVALID_API_KEY: i32 = 10;

/// Last.fm error code for rate limiting
const CODE_RATE_LIMITED: i32 = 29;

/// Last.fm API client
#[derive(Clone)]
pub struct LastfmClient {
    http_client: Client,
    config: LastfmConfig,
}

impl fmt::Debug for LastfmClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LastfmClient")
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

// Wire types. Last.fm nests lists one level deeper than everyone else
// and reports images as a size-named array.

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: SearchResults,
}

#[derive(Debug, Deserialize)]
struct SearchResults {
    trackmatches: TrackMatches,
}

#[derive(Debug, Deserialize)]
struct TrackMatches {
    #[serde(default)]
    track: Vec<SearchTrack>,
}

/// Track as returned by `track.search` (artist is a plain string)
#[derive(Debug, Deserialize)]
pub(crate) struct SearchTrack {
    pub name: Option<String>,
    pub artist: Option<String>,
    pub url: Option<String>,
    #[serde(default)]
    pub image: Vec<LastfmImage>,
}

#[derive(Debug, Deserialize)]
struct TopTracksResponse {
    toptracks: TrackList,
}

#[derive(Debug, Deserialize)]
struct TagTracksResponse {
    tracks: TrackList,
}

#[derive(Debug, Deserialize)]
struct TrackList {
    #[serde(default)]
    track: Vec<ListedTrack>,
}

/// Track as returned by `artist.gettoptracks` / `tag.gettoptracks`
/// (artist is an object)
#[derive(Debug, Deserialize)]
pub(crate) struct ListedTrack {
    pub name: Option<String>,
    pub artist: Option<ListedArtist>,
    pub url: Option<String>,
    #[serde(default)]
    pub image: Vec<LastfmImage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListedArtist {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LastfmImage {
    #[serde(rename = "#text")]
    pub url: String,
    pub size: Option<String>,
}

/// Approximate pixel width of Last.fm's named image sizes
fn image_width(size: Option<&str>) -> Option<u32> {
    match size {
        Some("small") => Some(34),
        Some("medium") => Some(64),
        Some("large") => Some(174),
        Some("extralarge") => Some(300),
        Some("mega") => Some(600),
        _ => None,
    }
}

fn convert_images(images: Vec<LastfmImage>) -> Vec<ArtworkRef> {
    let mut artwork: Vec<ArtworkRef> = images
        .into_iter()
        .filter(|image| !image.url.is_empty())
        .map(|image| ArtworkRef {
            width: image_width(image.size.as_deref()),
            url: image.url,
        })
        .collect();
    // Largest first, mirroring how other providers order art
    artwork.sort_by(|a, b| b.width.cmp(&a.width));
    artwork
}

impl From<SearchTrack> for RawTrack {
    fn from(track: SearchTrack) -> Self {
        Self {
            title: track.name,
            artist: track.artist,
            url: track.url,
            artwork: convert_images(track.image),
            preview_url: None,
            album: None,
        }
    }
}

impl From<ListedTrack> for RawTrack {
    fn from(track: ListedTrack) -> Self {
        Self {
            title: track.name,
            artist: track.artist.map(|a| a.name),
            url: track.url,
            artwork: convert_images(track.image),
            preview_url: None,
            album: None,
        }
    }
}

/// Last.fm API error response
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: i32,
    message: String,
}

impl LastfmClient {
    /// Create a new Last.fm client from configuration
    ///
    /// # Errors
    /// Returns [`ProviderError::MissingCredentials`] if the API key is
    /// empty. No network call is made here.
    pub fn new(config: &LastfmConfig) -> ProviderResult<Self> {
        if config.api_key.trim().is_empty() {
            return Err(ProviderError::MissingCredentials("lastfm"));
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
        })
    }

    fn transport_error(e: reqwest::Error) -> ProviderError {
        if e.is_timeout() {
            ProviderError::Timeout
        } else {
            ProviderError::Http(e)
        }
    }

    /// Make an API request and return the raw body text
    async fn make_request(&self, params: &[(&str, &str)]) -> ProviderResult<String> {
        let response = self
            .http_client
            .get(&self.config.api_url)
            .query(params)
            .query(&[("api_key", self.config.api_key.as_str()), ("format", "json")])
            .send()
            .await
            .map_err(Self::transport_error)?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            warn!("Last.fm API rate limited");
            return Err(ProviderError::RateLimited);
        }

        response.text().await.map_err(Self::transport_error)
    }

    /// Check the body for Last.fm's in-band error object
    fn parse_api_error(text: &str) -> Option<ProviderError> {
        let error = serde_json::from_str::<ErrorResponse>(text).ok()?;
        Some(match error.error {
            CODE_INVALID_API_KEY => ProviderError::AuthRejected(error.message),
            CODE_RATE_LIMITED => ProviderError::RateLimited,
            code => ProviderError::Api {
                status: code as u16,
                message: error.message,
            },
        })
    }

    async fn request_json<T: serde::de::DeserializeOwned>(
        &self,
        params: &[(&str, &str)],
    ) -> ProviderResult<T> {
        let text = self.make_request(params).await?;

        if let Some(error) = Self::parse_api_error(&text) {
            return Err(error);
        }

        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl CatalogClient for LastfmClient {
    fn provider(&self) -> CatalogProvider {
        CatalogProvider::Lastfm
    }

    #[instrument(skip(self))]
    async fn search_tracks(
        &self,
        artist_name: &str,
        keyword: &str,
        limit: usize,
    ) -> ProviderResult<Vec<RawTrack>> {
        debug!(artist = %artist_name, keyword, "Searching Last.fm tracks");

        let limit = limit.to_string();
        let response: SearchResponse = self
            .request_json(&[
                ("method", "track.search"),
                ("track", keyword),
                ("artist", artist_name),
                ("limit", &limit),
            ])
            .await?;

        Ok(response
            .results
            .trackmatches
            .track
            .into_iter()
            .map(Into::into)
            .collect())
    }

    /// For Last.fm the artist id is the artist name
    #[instrument(skip(self))]
    async fn artist_top_tracks(
        &self,
        artist_id: &str,
        limit: usize,
    ) -> ProviderResult<Vec<RawTrack>> {
        debug!(artist = %artist_id, "Fetching Last.fm artist top tracks");

        let limit = limit.to_string();
        let response: TopTracksResponse = self
            .request_json(&[
                ("method", "artist.gettoptracks"),
                ("artist", artist_id),
                ("limit", &limit),
            ])
            .await?;

        Ok(response
            .toptracks
            .track
            .into_iter()
            .map(Into::into)
            .collect())
    }

    #[instrument(skip(self))]
    async fn chart_by_genre(&self, genre: &str, limit: usize) -> ProviderResult<Vec<RawTrack>> {
        debug!(tag = %genre, "Fetching Last.fm tag top tracks");

        let limit = limit.to_string();
        let response: TagTracksResponse = self
            .request_json(&[
                ("method", "tag.gettoptracks"),
                ("tag", genre),
                ("limit", &limit),
            ])
            .await?;

        Ok(response.tracks.track.into_iter().map(Into::into).collect())
    }
}
