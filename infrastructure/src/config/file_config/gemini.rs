//! Gemini service configuration from TOML (`[gemini]` section)

use handoff_domain::{ConfigIssue, ConfigIssueCode, Model};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_API_KEY_ENV: &str = "GOOGLE_API_KEY";

/// Raw Gemini configuration from TOML
///
/// # Example
///
/// ```toml
/// [gemini]
/// api_key_env = "GOOGLE_API_KEY"
/// base_url = "https://generativelanguage.googleapis.com/v1beta"
/// model = "gemini-1.5-flash"
/// timeout_secs = 120
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// API key written directly in the file (takes precedence over `api_key_env`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    pub base_url: String,
    /// Default model for every flow without its own `model`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Per-request timeout
    pub timeout_secs: u64,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: None,
            timeout_secs: 120,
        }
    }
}

impl FileGeminiConfig {
    /// Parse the default model; an empty name falls back to the built-in default.
    pub fn parse_model(&self) -> (Model, Vec<ConfigIssue>) {
        match self.model.as_deref().map(str::trim) {
            None => (Model::default(), vec![]),
            Some("") => (
                Model::default(),
                vec![ConfigIssue::warning(
                    ConfigIssueCode::EmptyModel {
                        field: "gemini.model".to_string(),
                    },
                    format!("gemini.model: empty name, falling back to '{}'", Model::default()),
                )],
            ),
            Some(name) => (name.parse().unwrap_or_default(), vec![]),
        }
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.parse_model().1;
        if self.timeout_secs == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::OutOfRange {
                    field: "gemini.timeout_secs".to_string(),
                    value: "0".to_string(),
                },
                "gemini.timeout_secs: 0 disables the timeout; requests may hang",
            ));
        }
        issues
    }
}
