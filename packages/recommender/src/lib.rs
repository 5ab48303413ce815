//! Mood-to-track recommendation resolution for Cadenza
//!
//! The pipeline turns an abstract mood into concrete catalog queries:
//!
//! 1. [`MoodLabel::from_input`] coerces the caller's string into the
//!    closed mood vocabulary (unknown values become the default).
//! 2. [`MoodSeedTable::lookup`] maps the label to genre tags, keywords,
//!    and exemplar artists/tracks.
//! 3. [`SeedSelector`] draws a random, duplicate-free seed subset under
//!    the provider's hard 5-seed ceiling.
//! 4. [`RecommendationResolver::resolve`] walks the fallback chain
//!    (recommend → search → artist top tracks → static backup),
//!    normalizes whatever it finds into [`TrackRecord`]s, and randomly
//!    trims the result to the requested limit.
//!
//! Provider errors never escape the resolver; an empty list is the valid
//! "no recommendations found" answer.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use cadenza_catalog_client::build_client;
//! use cadenza_recommender::{MoodSeedTable, RecommendationResolver};
//! use cadenza_shared_config::CommonConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CommonConfig::from_env()?;
//! let client = build_client(&config)?;
//! let resolver = RecommendationResolver::new(client, Arc::new(MoodSeedTable::new()));
//!
//! let tracks = resolver.resolve("Happy", 9).await;
//! for track in tracks {
//!     println!("{} - {}", track.title, track.artist);
//! }
//! # Ok(())
//! # }
//! ```

mod mood;
mod resolver;
mod seeds;
mod selector;
mod track;

pub use mood::MoodLabel;
pub use resolver::RecommendationResolver;
pub use seeds::{MoodSeedTable, SeedArtist, SeedProfile, SeedTrack};
pub use selector::{SeedBudget, SeedSelector, SelectedArtist, SelectedSeeds, SelectedTrack};
pub use track::{normalize, ArtworkPreference, TrackRecord};
