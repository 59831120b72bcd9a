use crate::mood::{MoodAssessment, MoodLabel};
use serde::{Deserialize, Serialize};

/// What agent 2 produced, if it ran
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum ActivitySuggestion {
    /// The mood did not call for a suggestion; agent 2 was not invoked
    NotNeeded,
    /// Agent 2's reply, or the fallback text when it failed
    Suggested(String),
}

impl ActivitySuggestion {
    pub fn text(&self) -> Option<&str> {
        match self {
            ActivitySuggestion::NotNeeded => None,
            ActivitySuggestion::Suggested(text) => Some(text),
        }
    }
}

/// Final result of one pass through the mood flow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandoffOutcome {
    pub assessment: MoodAssessment,
    pub suggestion: ActivitySuggestion,
}

impl HandoffOutcome {
    pub fn mood(&self) -> MoodLabel {
        self.assessment.label
    }

    /// Whether control passed to the activity suggester
    pub fn handed_off(&self) -> bool {
        matches!(self.suggestion, ActivitySuggestion::Suggested(_))
    }
}
