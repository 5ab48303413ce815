//! The closed mood vocabulary

use tracing::warn;

/// A mood label from the fixed twelve-entry vocabulary
///
/// Everything downstream (seed lookup, fallback behavior, backup tracks)
/// is keyed by this enum, so arbitrary caller strings are coerced into it
/// exactly once, at the boundary, via [`MoodLabel::from_input`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MoodLabel {
    Happy,
    Energetic,
    #[default]
    Relaxed,
    Calm,
    Sad,
    Anxious,
    Focused,
    Romantic,
    Nostalgic,
    Excited,
    Sleepy,
    Angry,
}

impl MoodLabel {
    /// Every label, in canonical order
    pub const ALL: [MoodLabel; 12] = [
        MoodLabel::Happy,
        MoodLabel::Energetic,
        MoodLabel::Relaxed,
        MoodLabel::Calm,
        MoodLabel::Sad,
        MoodLabel::Anxious,
        MoodLabel::Focused,
        MoodLabel::Romantic,
        MoodLabel::Nostalgic,
        MoodLabel::Excited,
        MoodLabel::Sleepy,
        MoodLabel::Angry,
    ];

    /// Canonical capitalized name
    pub fn as_str(&self) -> &'static str {
        match self {
            MoodLabel::Happy => "Happy",
            MoodLabel::Energetic => "Energetic",
            MoodLabel::Relaxed => "Relaxed",
            MoodLabel::Calm => "Calm",
            MoodLabel::Sad => "Sad",
            MoodLabel::Anxious => "Anxious",
            MoodLabel::Focused => "Focused",
            MoodLabel::Romantic => "Romantic",
            MoodLabel::Nostalgic => "Nostalgic",
            MoodLabel::Excited => "Excited",
            MoodLabel::Sleepy => "Sleepy",
            MoodLabel::Angry => "Angry",
        }
    }

    /// Strictly parse a label, case-insensitively
    pub fn parse(input: &str) -> Option<MoodLabel> {
        let trimmed = input.trim();
        Self::ALL
            .into_iter()
            .find(|label| label.as_str().eq_ignore_ascii_case(trimmed))
    }

    /// Coerce any caller string into a label
    ///
    /// Total: unrecognized input yields the default label (`Relaxed`).
    /// This is the single coercion point in the pipeline.
    pub fn from_input(input: &str) -> MoodLabel {
        match Self::parse(input) {
            Some(label) => label,
            None => {
                warn!(input, default = %MoodLabel::default(), "Unrecognized mood, using default");
                MoodLabel::default()
            }
        }
    }
}

impl std::fmt::Display for MoodLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_names() {
        for label in MoodLabel::ALL {
            assert_eq!(MoodLabel::parse(label.as_str()), Some(label));
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(MoodLabel::parse("happy"), Some(MoodLabel::Happy));
        assert_eq!(MoodLabel::parse("ENERGETIC"), Some(MoodLabel::Energetic));
        assert_eq!(MoodLabel::parse("  sleepy  "), Some(MoodLabel::Sleepy));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(MoodLabel::parse("Melancholic"), None);
        assert_eq!(MoodLabel::parse(""), None);
    }

    #[test]
    fn test_from_input_coerces_to_default() {
        assert_eq!(MoodLabel::from_input("Unknown"), MoodLabel::Relaxed);
        assert_eq!(MoodLabel::from_input(""), MoodLabel::Relaxed);
        assert_eq!(MoodLabel::from_input("Angry"), MoodLabel::Angry);
    }

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(format!("{}", MoodLabel::Nostalgic), "Nostalgic");
    }

    #[test]
    fn test_all_has_no_duplicates() {
        for (i, a) in MoodLabel::ALL.iter().enumerate() {
            for b in &MoodLabel::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
