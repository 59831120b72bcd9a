//! Result of the mood analyzer, with the reason behind the label.

use super::label::MoodLabel;
use serde::{Deserialize, Serialize};

/// How the final label was obtained.
///
/// The label alone cannot tell a genuine `neutral` apart from one that was
/// defaulted, so the origin travels alongside it for logging and tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MoodOrigin {
    /// The model answered with one of the six labels
    Recognized,
    /// The model answered with something else, kept here verbatim
    Coerced { raw: String },
    /// The model call failed; the label is the default
    Failed { error: String },
}

/// Normalized output of the mood analyzer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodAssessment {
    pub label: MoodLabel,
    pub origin: MoodOrigin,
}

impl MoodAssessment {
    /// Normalize raw model text, remembering whether it had to be coerced.
    pub fn from_raw(raw: &str) -> Self {
        match MoodLabel::from_exact(raw.trim().to_lowercase().as_str()) {
            Some(label) => Self {
                label,
                origin: MoodOrigin::Recognized,
            },
            None => Self {
                label: MoodLabel::Neutral,
                origin: MoodOrigin::Coerced {
                    raw: raw.to_string(),
                },
            },
        }
    }

    /// Default assessment used when the model could not be reached.
    pub fn from_failure(error: impl Into<String>) -> Self {
        Self {
            label: MoodLabel::Neutral,
            origin: MoodOrigin::Failed {
                error: error.into(),
            },
        }
    }

    /// Whether the label came straight from the model
    pub fn is_recognized(&self) -> bool {
        matches!(self.origin, MoodOrigin::Recognized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognized() {
        let assessment = MoodAssessment::from_raw("Stressed\n");
        assert_eq!(assessment.label, MoodLabel::Stressed);
        assert!(assessment.is_recognized());
    }

    #[test]
    fn test_coerced_keeps_raw_text() {
        let assessment = MoodAssessment::from_raw("Somewhat anxious");
        assert_eq!(assessment.label, MoodLabel::Neutral);
        assert_eq!(
            assessment.origin,
            MoodOrigin::Coerced {
                raw: "Somewhat anxious".to_string()
            }
        );
    }

    #[test]
    fn test_genuine_neutral_is_recognized() {
        let assessment = MoodAssessment::from_raw("neutral");
        assert_eq!(assessment.label, MoodLabel::Neutral);
        assert!(assessment.is_recognized());
    }

    #[test]
    fn test_failure_defaults_to_neutral() {
        let assessment = MoodAssessment::from_failure("quota exceeded");
        assert_eq!(assessment.label, MoodLabel::Neutral);
        assert!(!assessment.is_recognized());
    }

    #[test]
    fn test_agrees_with_label_normalize() {
        for raw in ["happy", " ANGRY ", "excited!", "", "sad and tired"] {
            assert_eq!(MoodAssessment::from_raw(raw).label, MoodLabel::normalize(raw));
        }
    }
}
