//! The recommendation resolution pipeline
//!
//! Converts a mood into concrete provider queries and walks an ordered
//! fallback chain until a strategy yields a non-empty result. Provider
//! failures never escape this module: the caller always gets a list,
//! possibly empty.

use std::fmt;
use std::sync::Arc;

use cadenza_catalog_client::{CatalogClient, ProviderError, ProviderResult, RawTrack};
use rand::seq::SliceRandom;
use tracing::{debug, info, instrument, warn};

use crate::mood::MoodLabel;
use crate::seeds::MoodSeedTable;
use crate::selector::{SeedBudget, SeedSelector, SelectedSeeds};
use crate::track::{normalize, ArtworkPreference, TrackRecord};

/// Provider-backed strategies, attempted strictly in this order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Recommend,
    Search,
    TopTracks,
}

impl Stage {
    const ALL: [Stage; 3] = [Stage::Recommend, Stage::Search, Stage::TopTracks];
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Recommend => write!(f, "recommend"),
            Stage::Search => write!(f, "search"),
            Stage::TopTracks => write!(f, "artist_top_tracks"),
        }
    }
}

/// Orchestrates seed selection, the provider fallback chain, and result
/// normalization
pub struct RecommendationResolver {
    client: Box<dyn CatalogClient>,
    seed_table: Arc<MoodSeedTable>,
    selector: SeedSelector,
    artwork: ArtworkPreference,
}

impl RecommendationResolver {
    /// Create a resolver over a catalog client and a shared seed table
    pub fn new(client: Box<dyn CatalogClient>, seed_table: Arc<MoodSeedTable>) -> Self {
        Self {
            client,
            seed_table,
            selector: SeedSelector::default(),
            artwork: ArtworkPreference::default(),
        }
    }

    /// Override the seed budget
    pub fn with_budget(mut self, budget: SeedBudget) -> Self {
        self.selector = SeedSelector::new(budget);
        self
    }

    /// Override the artwork resolution preference
    pub fn with_artwork_preference(mut self, preference: ArtworkPreference) -> Self {
        self.artwork = preference;
        self
    }

    /// Resolve a mood into a list of playable tracks
    ///
    /// The sole public entry point of the pipeline. `mood` may be any
    /// string; unrecognized values coerce to the default label here, at
    /// the boundary. The result has at most `limit` tracks and may be
    /// shorter, possibly empty, which is a valid "no recommendations found"
    /// answer, not an error.
    #[instrument(skip(self))]
    pub async fn resolve(&self, mood: &str, limit: usize) -> Vec<TrackRecord> {
        let label = MoodLabel::from_input(mood);
        let profile = self.seed_table.lookup(label);
        let seeds = self.selector.select(profile);

        info!(
            mood = %label,
            provider = %self.client.provider(),
            seed_count = seeds.seed_count(),
            limit,
            "Resolving music for mood"
        );

        let records: Vec<TrackRecord> = match self.try_providers(&seeds, limit).await {
            Some(raw) => raw
                .into_iter()
                .filter_map(|track| normalize(track, self.artwork))
                .collect(),
            None => {
                info!(mood = %label, "All provider strategies exhausted, using static backup");
                self.seed_table.backup_tracks(label).to_vec()
            }
        };

        let result = sample_to_limit(records, limit);
        info!(mood = %label, count = result.len(), "Resolution complete");
        result
    }

    /// Walk the provider-backed stages; `Some` holds a non-empty raw list
    async fn try_providers(&self, seeds: &SelectedSeeds, limit: usize) -> Option<Vec<RawTrack>> {
        for stage in Stage::ALL {
            match self.run_stage(stage, seeds, limit).await {
                Ok(tracks) if !tracks.is_empty() => {
                    debug!(stage = %stage, count = tracks.len(), "Stage produced results");
                    return Some(tracks);
                }
                Ok(_) => {
                    // Success with zero results advances the chain just
                    // like a failure, but it is a different event
                    debug!(stage = %stage, "Stage returned no results, advancing");
                }
                Err(error) => {
                    warn!(stage = %stage, error = %error, "Stage failed, advancing");
                }
            }
        }
        None
    }

    async fn run_stage(
        &self,
        stage: Stage,
        seeds: &SelectedSeeds,
        limit: usize,
    ) -> ProviderResult<Vec<RawTrack>> {
        match stage {
            Stage::Recommend => {
                let result = self
                    .client
                    .recommend(
                        &seeds.genres,
                        &seeds.artist_ids(),
                        &seeds.track_ids(),
                        limit,
                    )
                    .await;

                match result {
                    // Providers without a recommendation endpoint expose
                    // their genre chart as the equivalent path
                    Err(ProviderError::Unsupported(_)) => {
                        let genre = seeds.random_genre().ok_or_else(|| {
                            ProviderError::InvalidSeeds("no genre seeds selected".to_string())
                        })?;
                        debug!(genre, "Recommendation unsupported, trying genre chart");
                        self.client.chart_by_genre(genre, limit).await
                    }
                    other => other,
                }
            }
            Stage::Search => {
                let artist = seeds.random_artist().ok_or_else(|| {
                    ProviderError::InvalidSeeds("no artist seeds selected".to_string())
                })?;
                let keyword = seeds.random_keyword().ok_or_else(|| {
                    ProviderError::InvalidSeeds("no keyword seeds selected".to_string())
                })?;
                self.client.search_tracks(&artist.name, keyword, limit).await
            }
            Stage::TopTracks => {
                let artist = seeds.random_artist().ok_or_else(|| {
                    ProviderError::InvalidSeeds("no artist seeds selected".to_string())
                })?;
                // Last.fm addresses artists by name rather than id
                let artist_id = match self.client.provider() {
                    cadenza_shared_config::CatalogProvider::Lastfm => artist.name.as_str(),
                    _ => artist.id.as_str(),
                };
                self.client.artist_top_tracks(artist_id, limit).await
            }
        }
    }
}

/// Reduce an over-long result to exactly `limit` randomly chosen tracks
///
/// Randomized rather than a prefix so repeated identical requests vary.
fn sample_to_limit(mut records: Vec<TrackRecord>, limit: usize) -> Vec<TrackRecord> {
    if records.len() <= limit {
        return records;
    }
    let mut rng = rand::thread_rng();
    let (sampled, _) = records.partial_shuffle(&mut rng, limit);
    sampled.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str) -> TrackRecord {
        TrackRecord::backup(title, "Artist", "https://listen")
    }

    #[test]
    fn test_sample_to_limit_short_list_unchanged() {
        let records = vec![record("a"), record("b")];
        let sampled = sample_to_limit(records.clone(), 9);
        assert_eq!(sampled, records);
    }

    #[test]
    fn test_sample_to_limit_truncates_to_exactly_limit() {
        let records: Vec<TrackRecord> = (0..20).map(|i| record(&format!("t{}", i))).collect();
        let sampled = sample_to_limit(records.clone(), 9);
        assert_eq!(sampled.len(), 9);
        for track in &sampled {
            assert!(records.contains(track));
        }
    }

    #[test]
    fn test_sample_to_limit_zero() {
        let records = vec![record("a")];
        assert!(sample_to_limit(records, 0).is_empty());
    }

    #[test]
    fn test_stage_order() {
        assert_eq!(
            Stage::ALL,
            [Stage::Recommend, Stage::Search, Stage::TopTracks]
        );
    }

    #[test]
    fn test_stage_display_names() {
        assert_eq!(Stage::Recommend.to_string(), "recommend");
        assert_eq!(Stage::TopTracks.to_string(), "artist_top_tracks");
    }
}
