//! Shared test utilities for the Cadenza workspace
//!
//! This crate provides mock implementations of the external services the
//! recommender talks to, for testing without network dependencies.
//!
//! # Mock Services
//!
//! - [`MockSpotifyServer`] - token endpoint plus Web API
//! - [`MockDeezerServer`] - anonymous public API
//! - [`MockLastfmServer`] - method-parameter protocol endpoint
//! - [`MockMoodServer`] - Ollama-style chat endpoint for classification
//!
//! # Example
//!
//! ```rust,ignore
//! use cadenza_test_utils::MockDeezerServer;
//!
//! #[tokio::test]
//! async fn test_with_mock() {
//!     let deezer = MockDeezerServer::start().await;
//!     deezer.mock_search(&[("Faded", "Alan Walker")]).await;
//!
//!     // Point a DeezerConfig at deezer.url() and run the client
//! }
//! ```

mod catalog;
mod mood;

pub use catalog::{
    deezer_track_json, lastfm_track_json, spotify_track_json, MockDeezerServer, MockLastfmServer,
    MockSpotifyServer,
};
pub use mood::MockMoodServer;
