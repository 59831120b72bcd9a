//! Tool schema conversion port.
//!
//! Separates "which functions to declare" (domain [`ToolSpec`]) from "how to
//! serialize them for the API" (infrastructure).

use handoff_domain::tool::entities::{ToolDefinition, ToolSpec};

/// Port for converting function definitions to JSON Schema declarations.
pub trait ToolSchemaPort: Send + Sync {
    /// Convert a single definition
    fn tool_to_schema(&self, tool: &ToolDefinition) -> serde_json::Value;

    /// Convert every definition, in registration order
    fn all_tools_schema(&self, spec: &ToolSpec) -> Vec<serde_json::Value> {
        spec.all().map(|tool| self.tool_to_schema(tool)).collect()
    }
}
