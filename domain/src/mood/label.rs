//! Mood label value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// The closed set of moods the analyzer may report.
///
/// A `MoodLabel` is always one of these six values; model output that does
/// not match one of them is coerced to [`MoodLabel::Neutral`] by
/// [`MoodLabel::normalize`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodLabel {
    Happy,
    Sad,
    Stressed,
    Angry,
    #[default]
    Neutral,
    Excited,
}

impl MoodLabel {
    /// All labels, in the order the analyzer prompt lists them
    pub const ALL: [MoodLabel; 6] = [
        MoodLabel::Happy,
        MoodLabel::Sad,
        MoodLabel::Stressed,
        MoodLabel::Angry,
        MoodLabel::Neutral,
        MoodLabel::Excited,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MoodLabel::Happy => "happy",
            MoodLabel::Sad => "sad",
            MoodLabel::Stressed => "stressed",
            MoodLabel::Angry => "angry",
            MoodLabel::Neutral => "neutral",
            MoodLabel::Excited => "excited",
        }
    }

    /// Exact match against the lowercase label names.
    pub fn from_exact(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|label| label.as_str() == s)
    }

    /// Normalize raw model text to a label.
    ///
    /// Lowercases and trims the text, then requires an exact match.
    /// Anything else (empty, several words, punctuation) becomes `Neutral`.
    pub fn normalize(raw: &str) -> Self {
        Self::from_exact(raw.trim().to_lowercase().as_str()).unwrap_or(MoodLabel::Neutral)
    }

    /// Whether this mood hands off to the activity suggester
    pub fn needs_support(&self) -> bool {
        matches!(self, MoodLabel::Sad | MoodLabel::Stressed)
    }
}

impl std::fmt::Display for MoodLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for MoodLabel {
    type Err = DomainError;

    /// Strict parse: case-insensitive, surrounding whitespace ignored,
    /// unknown words are an error rather than `Neutral`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_exact(s.trim().to_lowercase().as_str())
            .ok_or_else(|| DomainError::UnknownMood(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_exact_members() {
        for label in MoodLabel::ALL {
            assert_eq!(MoodLabel::normalize(label.as_str()), label);
        }
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in ["happy", "Stressed\n", "  SAD ", "I feel great", "", "angry!"] {
            let once = MoodLabel::normalize(raw);
            assert_eq!(MoodLabel::normalize(once.as_str()), once);
        }
    }

    #[test]
    fn test_normalize_cleans_case_and_whitespace() {
        assert_eq!(MoodLabel::normalize("Stressed\n"), MoodLabel::Stressed);
        assert_eq!(MoodLabel::normalize("  EXCITED  "), MoodLabel::Excited);
        assert_eq!(MoodLabel::normalize("\tsad\r\n"), MoodLabel::Sad);
    }

    #[test]
    fn test_normalize_defaults_to_neutral() {
        assert_eq!(MoodLabel::normalize(""), MoodLabel::Neutral);
        assert_eq!(MoodLabel::normalize("   "), MoodLabel::Neutral);
        assert_eq!(MoodLabel::normalize("very sad"), MoodLabel::Neutral);
        assert_eq!(MoodLabel::normalize("sad."), MoodLabel::Neutral);
        assert_eq!(MoodLabel::normalize("Mood: happy"), MoodLabel::Neutral);
        assert_eq!(MoodLabel::normalize("joyful"), MoodLabel::Neutral);
        assert_eq!(MoodLabel::normalize("'stressed'"), MoodLabel::Neutral);
    }

    #[test]
    fn test_needs_support() {
        let supported: Vec<_> = MoodLabel::ALL
            .into_iter()
            .filter(MoodLabel::needs_support)
            .collect();
        assert_eq!(supported, vec![MoodLabel::Sad, MoodLabel::Stressed]);
    }

    #[test]
    fn test_strict_parse() {
        assert_eq!("Angry".parse::<MoodLabel>().unwrap(), MoodLabel::Angry);
        assert!(matches!(
            "furious".parse::<MoodLabel>(),
            Err(DomainError::UnknownMood(_))
        ));
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&MoodLabel::Stressed).unwrap(),
            "\"stressed\""
        );
    }
}
