//! Provider-independent raw track models
//!
//! Each provider module deserializes its own wire structs and converts
//! them into [`RawTrack`] via `From` impls. Normalization into the stable
//! `TrackRecord` shape happens downstream in the recommender.

use serde::{Deserialize, Serialize};

/// One cover-art rendition as surfaced by a provider
///
/// Providers return artwork in several resolutions; all of them are kept
/// here so the consumer can apply its own resolution preference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkRef {
    /// Image URL
    pub url: String,
    /// Width in pixels, when the provider reports it
    pub width: Option<u32>,
}

/// A provider result before normalization
///
/// Only fields the recommender cares about are carried; everything is
/// optional because providers differ in what they return and partial
/// records are dropped downstream, not here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTrack {
    /// Track title
    pub title: Option<String>,
    /// Primary artist name
    pub artist: Option<String>,
    /// External listen URL on the provider's site
    pub url: Option<String>,
    /// Available cover-art renditions, in provider order
    pub artwork: Vec<ArtworkRef>,
    /// Short audio preview URL
    pub preview_url: Option<String>,
    /// Album or collection name
    pub album: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_track_default_is_empty() {
        let raw = RawTrack::default();
        assert!(raw.title.is_none());
        assert!(raw.artist.is_none());
        assert!(raw.artwork.is_empty());
    }
}
