//! Static mood-to-seed mapping
//!
//! Pure data: one [`SeedProfile`] per mood label, constructed once at
//! startup and never mutated. Every category of every profile is
//! non-empty (checked at construction), so lookups are total and the
//! selector can always satisfy its minimum-seed requirements.

use crate::mood::MoodLabel;
use crate::track::TrackRecord;

/// An exemplar artist seed: display name plus catalog id
///
/// The id is a Spotify catalog id; providers without id-based lookup use
/// the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedArtist {
    pub name: &'static str,
    pub id: &'static str,
}

/// An exemplar track seed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedTrack {
    pub title: &'static str,
    pub artist: &'static str,
    pub id: &'static str,
}

/// Per-mood search hints: genre tags, free-text keywords, exemplar
/// artists and tracks
#[derive(Debug, Clone, Copy)]
pub struct SeedProfile {
    pub genres: &'static [&'static str],
    pub keywords: &'static [&'static str],
    pub artists: &'static [SeedArtist],
    pub tracks: &'static [SeedTrack],
}

const TAYLOR_SWIFT: SeedArtist = SeedArtist {
    name: "Taylor Swift",
    id: "06HL4z0CvFAxyc27GXpf02",
};
const SELENA_GOMEZ: SeedArtist = SeedArtist {
    name: "Selena Gomez",
    id: "0C8ZW7ezQVs4URX5aX7Kqx",
};
const ED_SHEERAN: SeedArtist = SeedArtist {
    name: "Ed Sheeran",
    id: "6eUKZXaKkcviH0Ku9w2n3V",
};
const JUSTIN_BIEBER: SeedArtist = SeedArtist {
    name: "Justin Bieber",
    id: "1uNFoZAHBGtllmzznpCI3s",
};
const ALAN_WALKER: SeedArtist = SeedArtist {
    name: "Alan Walker",
    id: "7vk5e3vY1uw9plTHJAMwjN",
};
const THE_WEEKND: SeedArtist = SeedArtist {
    name: "The Weeknd",
    id: "1Xyo4u8uXC1ZmMpatF05PJ",
};

const CRUEL_SUMMER: SeedTrack = SeedTrack {
    title: "Cruel Summer",
    artist: "Taylor Swift",
    id: "0V3wPSX9ygBnCm8psDIegu",
};
const BLANK_SPACE: SeedTrack = SeedTrack {
    title: "Blank Space",
    artist: "Taylor Swift",
    id: "1BxfuPKGuaTgP7aM0Bbdwr",
};
const CALM_DOWN: SeedTrack = SeedTrack {
    title: "Calm Down",
    artist: "Selena Gomez",
    id: "7FIWs0pqAYbP91WWM0vlTQ",
};
const LOVE_YOU_LIKE_A_LOVE_SONG: SeedTrack = SeedTrack {
    title: "Love You Like a Love Song",
    artist: "Selena Gomez",
    id: "2dpaYNEQHiRxtZbfNsse99",
};
const SHAPE_OF_YOU: SeedTrack = SeedTrack {
    title: "Shape of You",
    artist: "Ed Sheeran",
    id: "7qiZfU4dY1lWllzX7mPBI3",
};
const PERFECT: SeedTrack = SeedTrack {
    title: "Perfect",
    artist: "Ed Sheeran",
    id: "6PQ88X9TkUIAUIZJHW2upE",
};
const STAY: SeedTrack = SeedTrack {
    title: "Stay",
    artist: "Justin Bieber",
    id: "4iJyoBOLtHqaGxP12qzhQI",
};
const LOVE_YOURSELF: SeedTrack = SeedTrack {
    title: "Love Yourself",
    artist: "Justin Bieber",
    id: "50kpGaPAhYJ3sGmk6vplg0",
};
const FADED: SeedTrack = SeedTrack {
    title: "Faded",
    artist: "Alan Walker",
    id: "60ynsPSSKe6O3sfMgJPn74",
};
const ALONE: SeedTrack = SeedTrack {
    title: "Alone",
    artist: "Alan Walker",
    id: "5h8LXUIoHLgpXM8rLI5JUl",
};
const BLINDING_LIGHTS: SeedTrack = SeedTrack {
    title: "Blinding Lights",
    artist: "The Weeknd",
    id: "2p8IUWQDrpjuFltbdgLOag",
};
const SAVE_YOUR_TEARS: SeedTrack = SeedTrack {
    title: "Save Your Tears",
    artist: "The Weeknd",
    id: "5Odq8ohlgIbQKMZivbWkEo",
};

fn profile_for(label: MoodLabel) -> SeedProfile {
    match label {
        MoodLabel::Happy => SeedProfile {
            genres: &["pop", "happy", "disco"],
            keywords: &["pop", "happy", "feel good", "disco", "cheerful"],
            artists: &[TAYLOR_SWIFT, ED_SHEERAN],
            tracks: &[CRUEL_SUMMER, SHAPE_OF_YOU],
        },
        MoodLabel::Energetic => SeedProfile {
            genres: &["electronic", "dance", "edm"],
            keywords: &["rock", "dance", "electronic", "workout", "energetic"],
            artists: &[ALAN_WALKER, THE_WEEKND],
            tracks: &[FADED, BLINDING_LIGHTS],
        },
        MoodLabel::Relaxed => SeedProfile {
            genres: &["chill", "ambient", "acoustic"],
            keywords: &["chill", "ambient", "acoustic", "relaxing", "mellow"],
            artists: &[ED_SHEERAN, TAYLOR_SWIFT],
            tracks: &[PERFECT, BLANK_SPACE],
        },
        MoodLabel::Calm => SeedProfile {
            genres: &["classical", "piano", "instrumental"],
            keywords: &["classical", "instrumental", "ambient", "meditation", "piano"],
            artists: &[ED_SHEERAN, SELENA_GOMEZ],
            tracks: &[PERFECT, LOVE_YOU_LIKE_A_LOVE_SONG],
        },
        MoodLabel::Sad => SeedProfile {
            genres: &["sad", "blues", "singer-songwriter"],
            keywords: &["sad", "melancholy", "ballad", "emotional", "blues"],
            artists: &[TAYLOR_SWIFT, THE_WEEKND],
            tracks: &[BLANK_SPACE, SAVE_YOUR_TEARS],
        },
        MoodLabel::Anxious => SeedProfile {
            genres: &["alternative", "indie", "experimental"],
            keywords: &["intense", "alternative", "experimental", "dark", "heavy"],
            artists: &[THE_WEEKND, ALAN_WALKER],
            tracks: &[BLINDING_LIGHTS, ALONE],
        },
        MoodLabel::Focused => SeedProfile {
            genres: &["study", "focus", "instrumental"],
            keywords: &["study", "instrumental", "concentration", "minimal", "focus"],
            artists: &[ED_SHEERAN, ALAN_WALKER],
            tracks: &[PERFECT, ALONE],
        },
        MoodLabel::Romantic => SeedProfile {
            genres: &["r-n-b", "love", "soul"],
            keywords: &["love", "romance", "smooth", "r&b", "soul"],
            artists: &[JUSTIN_BIEBER, SELENA_GOMEZ],
            tracks: &[LOVE_YOURSELF, LOVE_YOU_LIKE_A_LOVE_SONG],
        },
        MoodLabel::Nostalgic => SeedProfile {
            genres: &["80s", "90s", "pop"],
            keywords: &["80s", "90s", "oldies", "classic", "retro"],
            artists: &[TAYLOR_SWIFT, JUSTIN_BIEBER],
            tracks: &[BLANK_SPACE, LOVE_YOURSELF],
        },
        MoodLabel::Excited => SeedProfile {
            genres: &["party", "edm", "dance"],
            keywords: &["party", "edm", "dance", "upbeat", "pop"],
            artists: &[JUSTIN_BIEBER, SELENA_GOMEZ],
            tracks: &[STAY, CALM_DOWN],
        },
        MoodLabel::Sleepy => SeedProfile {
            genres: &["sleep", "ambient", "meditation"],
            keywords: &["sleep", "ambient", "lullaby", "soft", "quiet"],
            artists: &[ED_SHEERAN, TAYLOR_SWIFT],
            tracks: &[PERFECT, BLANK_SPACE],
        },
        MoodLabel::Angry => SeedProfile {
            genres: &["metal", "hard-rock", "punk"],
            keywords: &["metal", "hard rock", "punk", "aggressive", "intense"],
            artists: &[ALAN_WALKER, THE_WEEKND],
            tracks: &[ALONE, BLINDING_LIGHTS],
        },
    }
}

/// The immutable mood-to-seed table
///
/// Constructed once at process start and shared read-only; the
/// construction validates the totality invariant so downstream lookups
/// never fail and never come back empty.
#[derive(Debug)]
pub struct MoodSeedTable {
    // Indexed by MoodLabel discriminant, in MoodLabel::ALL order
    profiles: Vec<SeedProfile>,
    backups: Vec<Vec<TrackRecord>>,
}

impl MoodSeedTable {
    /// Build and validate the table
    ///
    /// # Panics
    /// Panics if any mood has an empty seed category. The table is
    /// static data, so this is a programmer error caught at startup,
    /// not a runtime condition.
    pub fn new() -> Self {
        let profiles: Vec<SeedProfile> = MoodLabel::ALL.into_iter().map(profile_for).collect();

        for (label, profile) in MoodLabel::ALL.into_iter().zip(&profiles) {
            assert!(
                !profile.genres.is_empty()
                    && !profile.keywords.is_empty()
                    && !profile.artists.is_empty()
                    && !profile.tracks.is_empty(),
                "seed profile for {} has an empty category",
                label
            );
        }

        let backups = profiles
            .iter()
            .map(|profile| {
                profile
                    .tracks
                    .iter()
                    .map(|track| {
                        TrackRecord::backup(
                            track.title,
                            track.artist,
                            &format!("https://open.spotify.com/track/{}", track.id),
                        )
                    })
                    .collect()
            })
            .collect();

        Self { profiles, backups }
    }

    /// Look up the seed profile for a mood. Total: every label has one.
    pub fn lookup(&self, mood: MoodLabel) -> &SeedProfile {
        &self.profiles[mood as usize]
    }

    /// Last-resort tracks for a mood, used when every provider strategy
    /// has been exhausted. Non-empty for every label.
    pub fn backup_tracks(&self, mood: MoodLabel) -> &[TrackRecord] {
        &self.backups[mood as usize]
    }
}

impl Default for MoodSeedTable {
    fn default() -> Self {
        Self::new()
    }
}
