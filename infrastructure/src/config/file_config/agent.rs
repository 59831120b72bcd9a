//! Agent loop configuration from TOML (`[agent]` section)

use handoff_application::ExecutionParams;
use handoff_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Raw agent configuration from TOML
///
/// ```toml
/// [agent]
/// max_tool_turns = 10   # function-result round-trips per country request
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAgentConfig {
    pub max_tool_turns: usize,
}

impl Default for FileAgentConfig {
    fn default() -> Self {
        Self {
            max_tool_turns: ExecutionParams::default().max_tool_turns,
        }
    }
}

impl FileAgentConfig {
    pub fn to_execution_params(&self) -> ExecutionParams {
        ExecutionParams::default().with_max_tool_turns(self.max_tool_turns)
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        if self.max_tool_turns == 0 {
            vec![ConfigIssue::warning(
                ConfigIssueCode::OutOfRange {
                    field: "agent.max_tool_turns".to_string(),
                    value: "0".to_string(),
                },
                "agent.max_tool_turns: 0 means lookup functions are never run",
            )]
        } else {
            vec![]
        }
    }
}
