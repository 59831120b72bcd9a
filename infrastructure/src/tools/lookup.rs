//! Lookup tool executor: the concrete implementation of [`ToolExecutorPort`].
//!
//! Serves the three country lookup functions from the static table. Every
//! call is validated against its declaration first, so the model gets a
//! precise error for an unknown name or a bad argument.

use async_trait::async_trait;
use handoff_application::ports::tool_executor::ToolExecutorPort;
use handoff_domain::LookupFunction;
use handoff_domain::tool::{
    entities::{ToolCall, ToolSpec},
    traits::{DefaultToolValidator, ToolValidator},
    value_objects::{ToolError, ToolResult},
};
use std::time::Instant;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct LookupToolExecutor {
    tool_spec: ToolSpec,
    validator: DefaultToolValidator,
}

impl LookupToolExecutor {
    pub fn new() -> Self {
        Self {
            tool_spec: ToolSpec::country_lookups(),
            validator: DefaultToolValidator,
        }
    }

    fn run(&self, call: &ToolCall) -> ToolResult {
        let Some(definition) = self.tool_spec.get(&call.tool_name) else {
            return ToolResult::failure(&call.tool_name, ToolError::unknown_function(&call.tool_name));
        };

        if let Err(message) = self.validator.validate(call, definition) {
            return ToolResult::failure(&call.tool_name, ToolError::invalid_argument(message));
        }

        match LookupFunction::resolve_call(call) {
            Ok((function, country)) => ToolResult::success(&call.tool_name, function.invoke(country)),
            Err(e) => ToolResult::failure(&call.tool_name, ToolError::invalid_argument(e.to_string())),
        }
    }
}

impl Default for LookupToolExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ToolExecutorPort for LookupToolExecutor {
    fn tool_spec(&self) -> &ToolSpec {
        &self.tool_spec
    }

    async fn execute(&self, call: &ToolCall) -> ToolResult {
        self.execute_sync(call)
    }

    fn execute_sync(&self, call: &ToolCall) -> ToolResult {
        let started = Instant::now();
        let result = self.run(call);
        debug!(
            "{}({:?}) -> {}",
            call.tool_name,
            call.get_string("country_name").unwrap_or_default(),
            result.response_text()
        );
        result.with_duration(started.elapsed().as_millis() as u64)
    }
}
