//! Tool domain traits
//!
//! Pure validation of function calls against their declarations.
//! The async `ToolExecutorPort` lives in the application layer.

use super::entities::{ToolCall, ToolDefinition};

/// Validator for tool calls
pub trait ToolValidator {
    /// Validate a tool call against its definition
    fn validate(&self, call: &ToolCall, definition: &ToolDefinition) -> Result<(), String>;
}

/// Checks required parameters, string typing and unknown arguments
#[derive(Debug, Clone, Default)]
pub struct DefaultToolValidator;

impl ToolValidator for DefaultToolValidator {
    fn validate(&self, call: &ToolCall, definition: &ToolDefinition) -> Result<(), String> {
        for param in &definition.parameters {
            match call.arguments.get(&param.name) {
                None if param.required => {
                    return Err(format!(
                        "Missing required parameter '{}' for function '{}'",
                        param.name, definition.name
                    ));
                }
                Some(value) if param.param_type == "string" && !value.is_string() => {
                    return Err(format!(
                        "Parameter '{}' for function '{}' must be a string",
                        param.name, definition.name
                    ));
                }
                _ => {}
            }
        }

        for arg_name in call.arguments.keys() {
            if !definition.parameters.iter().any(|p| &p.name == arg_name) {
                return Err(format!(
                    "Unknown parameter '{}' for function '{}'",
                    arg_name, definition.name
                ));
            }
        }

        Ok(())
    }
}
