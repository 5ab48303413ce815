//! Mock catalog provider servers for testing
//!
//! Provides wiremock-backed stand-ins for the Spotify, Deezer, and
//! Last.fm APIs so catalog clients and the resolver can be exercised
//! without network dependencies. Fixture bodies mirror each provider's
//! real wire shape.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Build a Spotify track object as the Web API returns it
pub fn spotify_track_json(title: &str, artist: &str) -> serde_json::Value {
    json!({
        "name": title,
        "artists": [{"name": artist}],
        "external_urls": {"spotify": format!("https://open.spotify.com/track/{}", title)},
        "album": {
            "name": "Test Album",
            "images": [
                {"url": "https://i.scdn.co/image/640", "width": 640, "height": 640},
                {"url": "https://i.scdn.co/image/300", "width": 300, "height": 300},
                {"url": "https://i.scdn.co/image/64", "width": 64, "height": 64}
            ]
        },
        "preview_url": format!("https://p.scdn.co/mp3-preview/{}", title)
    })
}

/// Mock Spotify server (token endpoint plus Web API)
pub struct MockSpotifyServer {
    server: MockServer,
}

impl MockSpotifyServer {
    /// Start a new mock Spotify server
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Get the server URL
    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// Get reference to the underlying mock server for custom setups
    pub fn inner(&self) -> &MockServer {
        &self.server
    }

    /// Mount a mock for a successful client-credentials token grant
    pub async fn mock_token_success(&self) {
        Mock::given(method("POST"))
            .and(path("/api/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "test-access-token",
                "token_type": "Bearer",
                "expires_in": 3600
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a mock for a rejected client-credentials token grant
    pub async fn mock_token_rejected(&self) {
        Mock::given(method("POST"))
            .and(path("/api/token"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": "invalid_client",
                "error_description": "Invalid client secret"
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a mock for successful recommendations
    pub async fn mock_recommendations(&self, tracks: &[(&str, &str)]) {
        let tracks: Vec<_> = tracks
            .iter()
            .map(|(title, artist)| spotify_track_json(title, artist))
            .collect();

        Mock::given(method("GET"))
            .and(path("/v1/recommendations"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "tracks": tracks })))
            .mount(&self.server)
            .await;
    }

    /// Mount a mock for recommendations failing with the given status
    pub async fn mock_recommendations_failure(&self, status_code: u16, message: &str) {
        Mock::given(method("GET"))
            .and(path("/v1/recommendations"))
            .respond_with(ResponseTemplate::new(status_code).set_body_json(json!({
                "error": {"status": status_code, "message": message}
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a mock for successful track search
    pub async fn mock_search(&self, tracks: &[(&str, &str)]) {
        let tracks: Vec<_> = tracks
            .iter()
            .map(|(title, artist)| spotify_track_json(title, artist))
            .collect();

        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .and(query_param("type", "track"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "tracks": {"items": tracks} })),
            )
            .mount(&self.server)
            .await;
    }

    /// Mount a mock for successful artist top tracks
    pub async fn mock_artist_top_tracks(&self, artist_id: &str, tracks: &[(&str, &str)]) {
        let tracks: Vec<_> = tracks
            .iter()
            .map(|(title, artist)| spotify_track_json(title, artist))
            .collect();

        Mock::given(method("GET"))
            .and(path(format!("/v1/artists/{}/top-tracks", artist_id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "tracks": tracks })))
            .mount(&self.server)
            .await;
    }

    /// Mount a rate-limit response on every API path
    pub async fn mock_rate_limited(&self) {
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(429)
                    .insert_header("Retry-After", "5")
                    .set_body_json(json!({
                        "error": {"status": 429, "message": "API rate limit exceeded"}
                    })),
            )
            .mount(&self.server)
            .await;
    }
}

/// Build a Deezer track object as the public API returns it
pub fn deezer_track_json(title: &str, artist: &str) -> serde_json::Value {
    json!({
        "title": title,
        "link": format!("https://www.deezer.com/track/{}", title),
        "preview": format!("https://cdns-preview.dzcdn.net/{}.mp3", title),
        "artist": {"name": artist},
        "album": {
            "title": "Test Album",
            "cover_small": "https://e-cdns-images.dzcdn.net/56x56.jpg",
            "cover_medium": "https://e-cdns-images.dzcdn.net/250x250.jpg",
            "cover_big": "https://e-cdns-images.dzcdn.net/500x500.jpg",
            "cover_xl": "https://e-cdns-images.dzcdn.net/1000x1000.jpg"
        }
    })
}

/// Mock Deezer server
pub struct MockDeezerServer {
    server: MockServer,
}

impl MockDeezerServer {
    /// Start a new mock Deezer server
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Get the server URL
    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// Get reference to the underlying mock server for custom setups
    pub fn inner(&self) -> &MockServer {
        &self.server
    }

    fn track_list(tracks: &[(&str, &str)]) -> serde_json::Value {
        let tracks: Vec<_> = tracks
            .iter()
            .map(|(title, artist)| deezer_track_json(title, artist))
            .collect();
        json!({ "data": tracks, "total": tracks.len() })
    }

    /// Mount a mock for successful track search
    pub async fn mock_search(&self, tracks: &[(&str, &str)]) {
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(Self::track_list(tracks)))
            .mount(&self.server)
            .await;
    }

    /// Mount a mock for successful artist top tracks
    pub async fn mock_artist_top_tracks(&self, artist_id: &str, tracks: &[(&str, &str)]) {
        Mock::given(method("GET"))
            .and(path(format!("/artist/{}/top", artist_id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(Self::track_list(tracks)))
            .mount(&self.server)
            .await;
    }

    /// Mount a mock for a genre chart
    pub async fn mock_chart(&self, chart_id: u32, tracks: &[(&str, &str)]) {
        Mock::given(method("GET"))
            .and(path(format!("/chart/{}/tracks", chart_id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(Self::track_list(tracks)))
            .mount(&self.server)
            .await;
    }

    /// Mount Deezer's in-band quota-exceeded error (a 200 response)
    pub async fn mock_quota_exceeded(&self) {
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "error": {"type": "Exception", "message": "Quota limit exceeded", "code": 4}
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount an HTTP-level failure on every path
    pub async fn mock_failure(&self, status_code: u16) {
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(status_code))
            .mount(&self.server)
            .await;
    }
}

/// Build a Last.fm listed-track object (`artist.gettoptracks` shape)
pub fn lastfm_track_json(title: &str, artist: &str) -> serde_json::Value {
    json!({
        "name": title,
        "artist": {"name": artist},
        "url": format!("https://www.last.fm/music/{}/_/{}", artist, title),
        "image": [
            {"#text": "https://lastfm.freetls.fastly.net/34.png", "size": "small"},
            {"#text": "https://lastfm.freetls.fastly.net/300.png", "size": "extralarge"}
        ]
    })
}

/// Mock Last.fm server (single endpoint, method-parameter protocol)
pub struct MockLastfmServer {
    server: MockServer,
}

impl MockLastfmServer {
    /// Start a new mock Last.fm server
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Get the server URL (use as the client's API base URL)
    pub fn url(&self) -> String {
        format!("{}/2.0/", self.server.uri())
    }

    /// Get reference to the underlying mock server for custom setups
    pub fn inner(&self) -> &MockServer {
        &self.server
    }

    /// Mount a mock for `track.search`
    pub async fn mock_search(&self, tracks: &[(&str, &str)]) {
        let tracks: Vec<_> = tracks
            .iter()
            .map(|(title, artist)| {
                json!({
                    "name": title,
                    "artist": artist,
                    "url": format!("https://www.last.fm/music/{}/_/{}", artist, title),
                    "image": []
                })
            })
            .collect();

        Mock::given(method("GET"))
            .and(path("/2.0/"))
            .and(query_param("method", "track.search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": {"trackmatches": {"track": tracks}}
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a mock for `artist.gettoptracks`
    pub async fn mock_artist_top_tracks(&self, tracks: &[(&str, &str)]) {
        let tracks: Vec<_> = tracks
            .iter()
            .map(|(title, artist)| lastfm_track_json(title, artist))
            .collect();

        Mock::given(method("GET"))
            .and(path("/2.0/"))
            .and(query_param("method", "artist.gettoptracks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "toptracks": {"track": tracks}
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a mock for `tag.gettoptracks`
    pub async fn mock_tag_top_tracks(&self, tracks: &[(&str, &str)]) {
        let tracks: Vec<_> = tracks
            .iter()
            .map(|(title, artist)| lastfm_track_json(title, artist))
            .collect();

        Mock::given(method("GET"))
            .and(path("/2.0/"))
            .and(query_param("method", "tag.gettoptracks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "tracks": {"track": tracks}
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount Last.fm's in-band invalid-API-key error (a 200 response)
    pub async fn mock_invalid_api_key(&self) {
        Mock::given(method("GET"))
            .and(path("/2.0/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "error": 10,
                "message": "Invalid API key - You must be granted a valid key by last.fm"
            })))
            .mount(&self.server)
            .await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_spotify_token() {
        let server = MockSpotifyServer::start().await;
        server.mock_token_success().await;

        let client = reqwest::Client::new();
        let response = client
            .post(format!("{}/api/token", server.url()))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .unwrap();

        assert!(response.status().is_success());
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["access_token"], "test-access-token");
    }

    #[tokio::test]
    async fn test_mock_deezer_search() {
        let server = MockDeezerServer::start().await;
        server.mock_search(&[("Faded", "Alan Walker")]).await;

        let client = reqwest::Client::new();
        let response = client
            .get(format!("{}/search?q=faded", server.url()))
            .send()
            .await
            .unwrap();

        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["data"][0]["title"], "Faded");
    }

    #[tokio::test]
    async fn test_mock_lastfm_search() {
        let server = MockLastfmServer::start().await;
        server.mock_search(&[("Creep", "Radiohead")]).await;

        let client = reqwest::Client::new();
        let response = client
            .get(server.url())
            .query(&[("method", "track.search"), ("track", "creep")])
            .send()
            .await
            .unwrap();

        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["results"]["trackmatches"]["track"][0]["name"], "Creep");
    }
}
