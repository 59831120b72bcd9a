//! Transcript configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL transcript path; `--transcript` overrides it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcript: Option<String>,
}
