//! Per-agent model and generation settings.

use super::generation::GenerationConfig;
use crate::core::error::DomainError;
use crate::core::model::Model;
use serde::{Deserialize, Serialize};

/// The four agents the application runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentRole {
    /// Answers country questions, may call the lookup functions
    CountryInfo,
    /// Agent 1 of the mood flow
    MoodAnalyzer,
    /// Agent 2 of the mood flow
    ActivitySuggester,
    /// Smart store agent
    ProductAdvisor,
}

impl AgentRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentRole::CountryInfo => "country_info",
            AgentRole::MoodAnalyzer => "mood_analyzer",
            AgentRole::ActivitySuggester => "activity_suggester",
            AgentRole::ProductAdvisor => "product_advisor",
        }
    }

    pub const ALL: [AgentRole; 4] = [
        AgentRole::CountryInfo,
        AgentRole::MoodAnalyzer,
        AgentRole::ActivitySuggester,
        AgentRole::ProductAdvisor,
    ];

    /// Key of the `[flows.<key>]` configuration table for this agent
    pub fn flow_key(&self) -> &'static str {
        match self {
            AgentRole::CountryInfo => "country",
            AgentRole::MoodAnalyzer => "mood",
            AgentRole::ActivitySuggester => "activity",
            AgentRole::ProductAdvisor => "product",
        }
    }

    /// Name shown in progress output
    pub fn display_name(&self) -> &'static str {
        match self {
            AgentRole::CountryInfo => "Country Info Bot",
            AgentRole::MoodAnalyzer => "Mood Analyzer",
            AgentRole::ActivitySuggester => "Activity Suggester",
            AgentRole::ProductAdvisor => "Smart Store Agent",
        }
    }
}

impl std::fmt::Display for AgentRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AgentRole {
    type Err = DomainError;

    /// Accepts either the flow key (`mood`) or the role name (`mood_analyzer`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|role| role.flow_key() == key || role.as_str() == key)
            .ok_or_else(|| DomainError::UnknownFlow(s.to_string()))
    }
}

/// Everything needed to open a session for one agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentProfile {
    pub role: AgentRole,
    pub model: Model,
    #[serde(default)]
    pub generation: GenerationConfig,
}

impl AgentProfile {
    pub fn new(role: AgentRole) -> Self {
        Self {
            role,
            model: Model::default(),
            generation: GenerationConfig::default(),
        }
    }

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_generation(mut self, generation: GenerationConfig) -> Self {
        self.generation = generation;
        self
    }
}

/// Profiles for every agent.
///
/// # Example
///
/// ```
/// use handoff_domain::agent::AgentProfiles;
/// use handoff_domain::Model;
///
/// let profiles = AgentProfiles::default().with_model_for_all(Model::Gemini20Flash);
/// assert_eq!(profiles.product.model, Model::Gemini20Flash);
/// assert_eq!(profiles.product.generation.top_k, Some(64));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentProfiles {
    pub country: AgentProfile,
    pub mood: AgentProfile,
    pub activity: AgentProfile,
    pub product: AgentProfile,
}

impl Default for AgentProfiles {
    fn default() -> Self {
        Self {
            country: AgentProfile::new(AgentRole::CountryInfo)
                .with_generation(GenerationConfig::country_info()),
            mood: AgentProfile::new(AgentRole::MoodAnalyzer),
            activity: AgentProfile::new(AgentRole::ActivitySuggester),
            product: AgentProfile::new(AgentRole::ProductAdvisor)
                .with_generation(GenerationConfig::product_advisor()),
        }
    }
}

impl AgentProfiles {
    pub fn get(&self, role: AgentRole) -> &AgentProfile {
        match role {
            AgentRole::CountryInfo => &self.country,
            AgentRole::MoodAnalyzer => &self.mood,
            AgentRole::ActivitySuggester => &self.activity,
            AgentRole::ProductAdvisor => &self.product,
        }
    }

    pub fn get_mut(&mut self, role: AgentRole) -> &mut AgentProfile {
        match role {
            AgentRole::CountryInfo => &mut self.country,
            AgentRole::MoodAnalyzer => &mut self.mood,
            AgentRole::ActivitySuggester => &mut self.activity,
            AgentRole::ProductAdvisor => &mut self.product,
        }
    }

    /// Use one model for every agent (the `--model` flag)
    pub fn with_model_for_all(mut self, model: Model) -> Self {
        for profile in [
            &mut self.country,
            &mut self.mood,
            &mut self.activity,
            &mut self.product,
        ] {
            profile.model = model.clone();
        }
        self
    }
}
