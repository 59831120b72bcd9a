//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to domain types on demand.

mod agent;
mod flows;
mod gemini;
mod logging;
mod repl;

pub use agent::FileAgentConfig;
pub use flows::{FileFlowConfig, FileFlowsConfig};
pub use gemini::{DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL, FileGeminiConfig};
pub use logging::FileLoggingConfig;
pub use repl::FileReplConfig;

use handoff_domain::{AgentProfiles, ConfigIssue};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Service endpoint, credential source and default model
    pub gemini: FileGeminiConfig,
    /// Function-call loop settings
    pub agent: FileAgentConfig,
    /// Per-agent model and generation overrides
    pub flows: FileFlowsConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Transcript settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Resolve the profile of every agent
    pub fn agent_profiles(&self) -> (AgentProfiles, Vec<ConfigIssue>) {
        let (model, mut issues) = self.gemini.parse_model();
        let (profiles, flow_issues) = self.flows.to_agent_profiles(&model);
        issues.extend(flow_issues);
        (profiles, issues)
    }

    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.gemini.validate();
        issues.extend(self.agent.validate());
        let (_, flow_issues) = self.flows.to_agent_profiles(&self.gemini.parse_model().0);
        issues.extend(flow_issues);
        issues
    }
}
