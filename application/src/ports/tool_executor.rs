//! Tool Executor port
//!
//! Defines the interface for running the functions the model asks for.

use async_trait::async_trait;
use handoff_domain::tool::{
    entities::{ToolCall, ToolDefinition, ToolSpec},
    value_objects::ToolResult,
};

/// Port for function execution.
///
/// Implementations must not fail: unknown names and bad arguments come back
/// as a failed [`ToolResult`].
#[async_trait]
pub trait ToolExecutorPort: Send + Sync {
    /// The functions this executor can run
    fn tool_spec(&self) -> &ToolSpec;

    fn has_tool(&self, name: &str) -> bool {
        self.tool_spec().get(name).is_some()
    }

    fn get_tool(&self, name: &str) -> Option<&ToolDefinition> {
        self.tool_spec().get(name)
    }

    fn available_tools(&self) -> Vec<&str> {
        self.tool_spec().names().collect()
    }

    /// Execute a call asynchronously
    async fn execute(&self, call: &ToolCall) -> ToolResult;

    /// Execute a call synchronously
    fn execute_sync(&self, call: &ToolCall) -> ToolResult;
}
