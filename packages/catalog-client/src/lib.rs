//! Music catalog provider clients for Cadenza
//!
//! This crate wraps the query surfaces of the supported catalog
//! providers behind one [`CatalogClient`] capability trait:
//!
//! - [`SpotifyClient`] - client-credentials auth, parameterized
//!   recommendations, free-text search, artist top tracks
//! - [`DeezerClient`] - anonymous search, artist top tracks, genre charts
//! - [`LastfmClient`] - keyed search, artist top tracks, tag charts
//!
//! Providers implement the subset of endpoints they expose; the rest
//! report [`ProviderError::Unsupported`] so callers can fall back.
//!
//! # Example
//!
//! ```rust,no_run
//! use cadenza_catalog_client::{build_client, CatalogClient};
//! use cadenza_shared_config::CommonConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CommonConfig::from_env()?;
//! let client = build_client(&config)?;
//!
//! let tracks = client.search_tracks("The Weeknd", "dance", 10).await?;
//! for track in tracks {
//!     println!("{:?} by {:?}", track.title, track.artist);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod deezer;
mod error;
mod lastfm;
mod models;
mod spotify;

pub use client::{build_client, CatalogClient, MAX_TOTAL_SEEDS};
pub use deezer::DeezerClient;
pub use error::{ProviderError, ProviderResult};
pub use lastfm::LastfmClient;
pub use models::{ArtworkRef, RawTrack};
pub use spotify::SpotifyClient;
