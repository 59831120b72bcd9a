//! Per-agent overrides from TOML (`[flows.<key>]` tables)

use handoff_domain::{
    AgentProfiles, AgentRole, ConfigIssue, ConfigIssueCode, GenerationConfig, Model,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Overrides for one agent. Unset keys keep the built-in preset.
///
/// ```toml
/// [flows.product]
/// model = "gemini-2.0-flash"
/// temperature = 0.9
/// max_output_tokens = 256
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileFlowConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

impl FileFlowConfig {
    fn generation(&self) -> GenerationConfig {
        GenerationConfig {
            temperature: self.temperature,
            top_p: self.top_p,
            top_k: self.top_k,
            max_output_tokens: self.max_output_tokens,
        }
    }

    /// Values outside the ranges the service accepts are dropped with a warning
    fn checked_generation(&self, key: &str) -> (GenerationConfig, Vec<ConfigIssue>) {
        let mut generation = self.generation();
        let mut issues = Vec::new();
        let mut out_of_range = |field: &str, value: String| {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::OutOfRange {
                    field: format!("flows.{}.{}", key, field),
                    value: value.clone(),
                },
                format!("flows.{}.{}: {} is out of range, ignoring it", key, field, value),
            ));
        };

        if let Some(t) = generation.temperature
            && !(0.0..=2.0).contains(&t)
        {
            out_of_range("temperature", t.to_string());
            generation.temperature = None;
        }
        if let Some(p) = generation.top_p
            && !(0.0..=1.0).contains(&p)
        {
            out_of_range("top_p", p.to_string());
            generation.top_p = None;
        }
        if generation.top_k == Some(0) {
            out_of_range("top_k", "0".to_string());
            generation.top_k = None;
        }
        if generation.max_output_tokens == Some(0) {
            out_of_range("max_output_tokens", "0".to_string());
            generation.max_output_tokens = None;
        }

        (generation, issues)
    }
}

/// All `[flows.*]` tables keyed by flow name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileFlowsConfig(pub BTreeMap<String, FileFlowConfig>);

impl FileFlowsConfig {
    pub fn get(&self, role: AgentRole) -> Option<&FileFlowConfig> {
        self.0.get(role.flow_key())
    }

    /// Build the agent profiles: presets, then `default_model`, then the
    /// per-flow tables.
    pub fn to_agent_profiles(&self, default_model: &Model) -> (AgentProfiles, Vec<ConfigIssue>) {
        let mut profiles = AgentProfiles::default().with_model_for_all(default_model.clone());
        let mut issues = Vec::new();

        for (key, flow) in &self.0 {
            let role = match key.parse::<AgentRole>() {
                Ok(role) => role,
                Err(e) => {
                    issues.push(ConfigIssue::warning(
                        ConfigIssueCode::UnknownFlow { key: key.clone() },
                        format!("flows.{}: {}, expected one of country, mood, activity, product", key, e),
                    ));
                    continue;
                }
            };

            let profile = profiles.get_mut(role);
            match flow.model.as_deref().map(str::trim) {
                Some("") => issues.push(ConfigIssue::warning(
                    ConfigIssueCode::EmptyModel {
                        field: format!("flows.{}.model", key),
                    },
                    format!("flows.{}.model: empty name, keeping '{}'", key, profile.model),
                )),
                Some(name) => profile.model = name.parse().unwrap_or_default(),
                None => {}
            }

            let (overrides, generation_issues) = flow.checked_generation(key);
            profile.generation = profile.generation.merged(overrides);
            issues.extend(generation_issues);
        }

        (profiles, issues)
    }
}
