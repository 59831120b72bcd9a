//! Tool result and error types
//!
//! Every function call the model requests produces a [`ToolResult`]. Failed
//! results are not fatal: they are sent back to the model as the function
//! response so it can recover or answer without the data.

use serde::{Deserialize, Serialize};

/// Error that occurred while running a function call.
///
/// | Code | Description |
/// |------|-------------|
/// | `NOT_FOUND` | The model asked for a function that is not declared |
/// | `INVALID_ARGUMENT` | A required argument is missing or has the wrong type |
/// | `EXECUTION_FAILED` | The function itself failed |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolError {
    pub code: String,
    pub message: String,
}

impl ToolError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn unknown_function(name: impl Into<String>) -> Self {
        Self::new("NOT_FOUND", format!("Unknown function: {}", name.into()))
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new("INVALID_ARGUMENT", message)
    }
}

impl std::fmt::Display for ToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ToolError {}

/// Outcome of one function call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResult {
    /// Name of the function that was called
    pub tool_name: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ToolError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl ToolResult {
    pub fn success(tool_name: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            success: true,
            output: Some(output.into()),
            error: None,
            duration_ms: None,
        }
    }

    pub fn failure(tool_name: impl Into<String>, error: ToolError) -> Self {
        Self {
            tool_name: tool_name.into(),
            success: false,
            output: None,
            error: Some(error),
            duration_ms: None,
        }
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    pub fn error(&self) -> Option<&ToolError> {
        self.error.as_ref()
    }

    /// Text handed back to the model: the output, or the error message
    pub fn response_text(&self) -> String {
        match (&self.output, &self.error) {
            (Some(output), _) => output.clone(),
            (None, Some(error)) => error.to_string(),
            (None, None) => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_error_display() {
        let err = ToolError::unknown_function("get_country_currency");
        assert_eq!(err.code, "NOT_FOUND");
        assert_eq!(err.to_string(), "[NOT_FOUND] Unknown function: get_country_currency");
    }

    #[test]
    fn test_tool_result_success() {
        let result = ToolResult::success("get_country_capital", "Paris").with_duration(0);

        assert!(result.is_success());
        assert_eq!(result.output(), Some("Paris"));
        assert!(result.error().is_none());
        assert_eq!(result.response_text(), "Paris");
        assert_eq!(result.duration_ms, Some(0));
    }

    #[test]
    fn test_tool_result_failure() {
        let result = ToolResult::failure(
            "get_country_capital",
            ToolError::invalid_argument("Missing required argument: country_name"),
        );

        assert!(!result.is_success());
        assert!(result.output().is_none());
        assert_eq!(result.error().unwrap().code, "INVALID_ARGUMENT");
        assert!(result.response_text().contains("country_name"));
    }
}
