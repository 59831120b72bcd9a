//! Execution parameters: use case loop control.
//!
//! [`ExecutionParams`] groups the static parameters of the function-call
//! loop in [`CountryInfoUseCase`](crate::use_cases::country_info::CountryInfoUseCase).

use serde::{Deserialize, Serialize};

/// Execution loop control parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionParams {
    /// Maximum number of function-result round-trips in one request.
    pub max_tool_turns: usize,
}

impl Default for ExecutionParams {
    fn default() -> Self {
        Self { max_tool_turns: 10 }
    }
}

impl ExecutionParams {
    pub fn with_max_tool_turns(mut self, max: usize) -> Self {
        self.max_tool_turns = max;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        assert_eq!(ExecutionParams::default().max_tool_turns, 10);
    }

    #[test]
    fn test_builder() {
        let params = ExecutionParams::default().with_max_tool_turns(2);
        assert_eq!(params.max_tool_turns, 2);
    }
}
