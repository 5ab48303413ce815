//! Random seed subset selection under the provider seed budget

use rand::seq::SliceRandom;
use rand::Rng;

use cadenza_catalog_client::MAX_TOTAL_SEEDS;

use crate::seeds::SeedProfile;

/// Maximum keywords carried for the free-text search fallback
/// (keywords are not seed parameters and do not count against the budget)
const MAX_KEYWORDS: usize = 2;

/// Per-category seed caps under a total ceiling
///
/// The total is the provider's hard limit on seed parameters; exceeding
/// it is a hard rejection at the provider boundary, so the caps must sum
/// to no more than the total.
#[derive(Debug, Clone, Copy)]
pub struct SeedBudget {
    /// Total seed values permitted across all categories
    pub total: usize,
    /// Maximum genre seeds
    pub max_genres: usize,
    /// Maximum artist seeds
    pub max_artists: usize,
    /// Maximum track seeds
    pub max_tracks: usize,
}

impl SeedBudget {
    /// Create a budget, checking that the category caps fit the total
    ///
    /// # Panics
    /// Panics if the caps sum past the total; budgets are compile-time
    /// constants in practice, so this is a programmer error.
    pub fn new(total: usize, max_genres: usize, max_artists: usize, max_tracks: usize) -> Self {
        assert!(
            max_genres + max_artists + max_tracks <= total,
            "category caps ({} + {} + {}) exceed the total seed budget of {}",
            max_genres,
            max_artists,
            max_tracks,
            total
        );
        Self {
            total,
            max_genres,
            max_artists,
            max_tracks,
        }
    }
}

impl Default for SeedBudget {
    /// Two genres, one artist, two tracks under the 5-seed ceiling
    fn default() -> Self {
        Self::new(MAX_TOTAL_SEEDS, 2, 1, 2)
    }
}

/// A selected artist seed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedArtist {
    pub name: String,
    pub id: String,
}

/// A selected track seed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedTrack {
    pub title: String,
    pub id: String,
}

/// The seed subset drawn for one resolve call
#[derive(Debug, Clone)]
pub struct SelectedSeeds {
    pub genres: Vec<String>,
    pub keywords: Vec<String>,
    pub artists: Vec<SelectedArtist>,
    pub tracks: Vec<SelectedTrack>,
}

impl SelectedSeeds {
    /// Total seed values that count against the provider budget
    pub fn seed_count(&self) -> usize {
        self.genres.len() + self.artists.len() + self.tracks.len()
    }

    /// Artist catalog ids, for id-based provider calls
    pub fn artist_ids(&self) -> Vec<String> {
        self.artists.iter().map(|a| a.id.clone()).collect()
    }

    /// Track catalog ids, for id-based provider calls
    pub fn track_ids(&self) -> Vec<String> {
        self.tracks.iter().map(|t| t.id.clone()).collect()
    }

    /// A random selected genre, for chart fallbacks
    pub fn random_genre(&self) -> Option<&str> {
        self.genres
            .choose(&mut rand::thread_rng())
            .map(String::as_str)
    }

    /// A random selected keyword, for search fallbacks
    pub fn random_keyword(&self) -> Option<&str> {
        self.keywords
            .choose(&mut rand::thread_rng())
            .map(String::as_str)
    }

    /// A random selected artist, for search and top-track fallbacks
    pub fn random_artist(&self) -> Option<&SelectedArtist> {
        self.artists.choose(&mut rand::thread_rng())
    }
}

/// Draws varied, budget-respecting seed subsets from a profile
///
/// Selection is intentionally randomized so repeated calls for the same
/// mood yield different seeds and therefore different results. Uses the
/// thread-local RNG by default, so concurrent calls are safe.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedSelector {
    budget: SeedBudget,
}

impl SeedSelector {
    pub fn new(budget: SeedBudget) -> Self {
        Self { budget }
    }

    pub fn budget(&self) -> &SeedBudget {
        &self.budget
    }

    /// Draw a random seed subset for the profile
    pub fn select(&self, profile: &SeedProfile) -> SelectedSeeds {
        self.select_with_rng(profile, &mut rand::thread_rng())
    }

    /// Draw a random seed subset with a caller-supplied RNG
    ///
    /// Categories with fewer items than their cap contribute everything
    /// they have. The result never exceeds the budget's total.
    pub fn select_with_rng<R: Rng>(&self, profile: &SeedProfile, rng: &mut R) -> SelectedSeeds {
        let genres = profile
            .genres
            .choose_multiple(rng, self.budget.max_genres)
            .map(|genre| genre.to_string())
            .collect();

        let keywords = profile
            .keywords
            .choose_multiple(rng, MAX_KEYWORDS)
            .map(|keyword| keyword.to_string())
            .collect();

        let artists = profile
            .artists
            .choose_multiple(rng, self.budget.max_artists)
            .map(|artist| SelectedArtist {
                name: artist.name.to_string(),
                id: artist.id.to_string(),
            })
            .collect();

        let tracks = profile
            .tracks
            .choose_multiple(rng, self.budget.max_tracks)
            .map(|track| SelectedTrack {
                title: track.title.to_string(),
                id: track.id.to_string(),
            })
            .collect();

        SelectedSeeds {
            genres,
            keywords,
            artists,
            tracks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mood::MoodLabel;
    use crate::seeds::MoodSeedTable;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256Plus;

    #[test]
    fn test_default_budget_fits_ceiling() {
        let budget = SeedBudget::default();
        assert_eq!(budget.total, MAX_TOTAL_SEEDS);
        assert!(budget.max_genres + budget.max_artists + budget.max_tracks <= budget.total);
    }

    #[test]
    #[should_panic(expected = "exceed the total seed budget")]
    fn test_overcommitted_budget_panics() {
        SeedBudget::new(5, 3, 2, 2);
    }

    #[test]
    fn test_selection_never_exceeds_budget() {
        let table = MoodSeedTable::new();
        let selector = SeedSelector::default();
        let mut rng = Xoshiro256Plus::seed_from_u64(7);

        for label in MoodLabel::ALL {
            for _ in 0..50 {
                let seeds = selector.select_with_rng(table.lookup(label), &mut rng);
                assert!(
                    seeds.seed_count() <= selector.budget().total,
                    "{} selection exceeded budget",
                    label
                );
            }
        }
    }

    #[test]
    fn test_selection_respects_category_availability() {
        let table = MoodSeedTable::new();
        // A budget with caps above what any profile offers
        let selector = SeedSelector::new(SeedBudget::new(30, 10, 10, 10));
        let mut rng = Xoshiro256Plus::seed_from_u64(3);

        for label in MoodLabel::ALL {
            let profile = table.lookup(label);
            let seeds = selector.select_with_rng(profile, &mut rng);
            assert!(seeds.genres.len() <= profile.genres.len());
            assert!(seeds.artists.len() <= profile.artists.len());
            assert!(seeds.tracks.len() <= profile.tracks.len());
        }
    }

    #[test]
    fn test_selection_is_duplicate_free() {
        let table = MoodSeedTable::new();
        let selector = SeedSelector::default();
        let mut rng = Xoshiro256Plus::seed_from_u64(11);

        for _ in 0..50 {
            let seeds = selector.select_with_rng(table.lookup(MoodLabel::Happy), &mut rng);

            let mut genres = seeds.genres.clone();
            genres.sort();
            genres.dedup();
            assert_eq!(genres.len(), seeds.genres.len());

            let mut ids = seeds.artist_ids();
            ids.sort();
            ids.dedup();
            assert_eq!(ids.len(), seeds.artists.len());
        }
    }

    #[test]
    fn test_selection_draws_from_profile() {
        let table = MoodSeedTable::new();
        let profile = table.lookup(MoodLabel::Energetic);
        let selector = SeedSelector::default();
        let mut rng = Xoshiro256Plus::seed_from_u64(5);

        let seeds = selector.select_with_rng(profile, &mut rng);
        for genre in &seeds.genres {
            assert!(profile.genres.contains(&genre.as_str()));
        }
        for artist in &seeds.artists {
            assert!(profile.artists.iter().any(|a| a.id == artist.id));
        }
        for track in &seeds.tracks {
            assert!(profile.tracks.iter().any(|t| t.id == track.id));
        }
    }

    #[test]
    fn test_random_accessors_on_empty_seeds() {
        let seeds = SelectedSeeds {
            genres: vec![],
            keywords: vec![],
            artists: vec![],
            tracks: vec![],
        };
        assert!(seeds.random_genre().is_none());
        assert!(seeds.random_keyword().is_none());
        assert!(seeds.random_artist().is_none());
    }
}
