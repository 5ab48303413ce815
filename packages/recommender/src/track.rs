//! The stable track representation and the raw-track normalizer

use cadenza_catalog_client::RawTrack;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which cover-art rendition to keep when a provider offers several
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArtworkPreference {
    /// Highest resolution available, for hero display
    #[default]
    Largest,
    /// A mid-sized rendition, for grid display
    Medium,
}

/// A normalized, provider-independent track
///
/// A value object: structural equality, never mutated after
/// construction, owned solely by the caller that receives it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackRecord {
    /// Track title
    pub title: String,
    /// Primary artist name
    pub artist: String,
    /// External listen URL (possibly empty)
    pub url: String,
    /// Cover-art URL chosen per the artwork preference
    pub artwork_url: Option<String>,
    /// Short audio preview URL
    pub preview_url: Option<String>,
    /// Album or collection name
    pub album: Option<String>,
}

impl TrackRecord {
    /// Construct a minimal record, as used by the static backup tables
    pub(crate) fn backup(title: &str, artist: &str, url: &str) -> Self {
        Self {
            title: title.to_string(),
            artist: artist.to_string(),
            url: url.to_string(),
            artwork_url: None,
            preview_url: None,
            album: None,
        }
    }
}

/// Pick one artwork URL from the surfaced renditions
fn pick_artwork(raw: &RawTrack, preference: ArtworkPreference) -> Option<String> {
    if raw.artwork.is_empty() {
        return None;
    }

    let mut by_width: Vec<&cadenza_catalog_client::ArtworkRef> = raw.artwork.iter().collect();
    by_width.sort_by(|a, b| b.width.cmp(&a.width));

    let chosen = match preference {
        ArtworkPreference::Largest => by_width.first(),
        ArtworkPreference::Medium => by_width.get(by_width.len() / 2),
    };

    chosen.map(|art| art.url.clone())
}

/// Normalize a provider result into the stable track shape
///
/// Title is the only required field: a titleless raw track yields `None`
/// and is dropped by the caller rather than failing the batch. Missing
/// optional fields map to empty/absent.
pub fn normalize(raw: RawTrack, preference: ArtworkPreference) -> Option<TrackRecord> {
    let title = match raw.title.as_deref().map(str::trim) {
        Some(title) if !title.is_empty() => title.to_string(),
        _ => {
            debug!(artist = ?raw.artist, "Dropping raw track without a title");
            return None;
        }
    };

    let artwork_url = pick_artwork(&raw, preference);

    Some(TrackRecord {
        title,
        artist: raw
            .artist
            .filter(|artist| !artist.trim().is_empty())
            .unwrap_or_else(|| "Unknown Artist".to_string()),
        url: raw.url.unwrap_or_default(),
        artwork_url,
        preview_url: raw.preview_url,
        album: raw.album,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadenza_catalog_client::ArtworkRef;

    fn raw_with_artwork(widths: &[Option<u32>]) -> RawTrack {
        RawTrack {
            title: Some("Track".to_string()),
            artist: Some("Artist".to_string()),
            url: Some("https://listen".to_string()),
            artwork: widths
                .iter()
                .map(|w| ArtworkRef {
                    url: format!("https://img/{:?}", w),
                    width: *w,
                })
                .collect(),
            preview_url: None,
            album: None,
        }
    }

    #[test]
    fn test_normalize_requires_title() {
        let raw = RawTrack {
            title: None,
            artist: Some("Somebody".to_string()),
            ..Default::default()
        };
        assert!(normalize(raw, ArtworkPreference::Largest).is_none());

        let blank = RawTrack {
            title: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(normalize(blank, ArtworkPreference::Largest).is_none());
    }

    #[test]
    fn test_normalize_fills_missing_optionals() {
        let raw = RawTrack {
            title: Some("Lonely Title".to_string()),
            ..Default::default()
        };

        let record = normalize(raw, ArtworkPreference::Largest).unwrap();
        assert_eq!(record.title, "Lonely Title");
        assert_eq!(record.artist, "Unknown Artist");
        assert_eq!(record.url, "");
        assert!(record.artwork_url.is_none());
        assert!(record.preview_url.is_none());
        assert!(record.album.is_none());
    }

    #[test]
    fn test_normalize_prefers_largest_artwork() {
        let raw = raw_with_artwork(&[Some(250), Some(1000), Some(56)]);
        let record = normalize(raw, ArtworkPreference::Largest).unwrap();
        assert_eq!(record.artwork_url.as_deref(), Some("https://img/Some(1000)"));
    }

    #[test]
    fn test_normalize_medium_artwork_takes_middle() {
        let raw = raw_with_artwork(&[Some(1000), Some(250), Some(56)]);
        let record = normalize(raw, ArtworkPreference::Medium).unwrap();
        assert_eq!(record.artwork_url.as_deref(), Some("https://img/Some(250)"));
    }

    #[test]
    fn test_normalize_artwork_without_widths() {
        let raw = raw_with_artwork(&[None, None]);
        let record = normalize(raw, ArtworkPreference::Largest).unwrap();
        assert!(record.artwork_url.is_some());
    }

    #[test]
    fn test_records_compare_structurally() {
        let a = TrackRecord::backup("A", "X", "https://a");
        let b = TrackRecord::backup("A", "X", "https://a");
        assert_eq!(a, b);
    }
}
