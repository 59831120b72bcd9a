//! Scripted test doubles shared by the use case tests.

use crate::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use crate::ports::llm_gateway::{FunctionResultMessage, GatewayError, LlmGateway, LlmSession};
use crate::ports::progress::FlowProgressNotifier;
use crate::ports::tool_executor::ToolExecutorPort;
use crate::ports::tool_schema::ToolSchemaPort;
use async_trait::async_trait;
use handoff_domain::{
    AgentProfile, AgentRole, LlmResponse, LookupFunction, MoodAssessment, MoodLabel, ToolCall,
    ToolDefinition, ToolError, ToolResult, ToolSpec,
};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct ScriptState {
    replies: Mutex<VecDeque<Result<LlmResponse, GatewayError>>>,
    prompts: Mutex<Vec<String>>,
    tools_offered: Mutex<Vec<usize>>,
    function_results: Mutex<Vec<Vec<FunctionResultMessage>>>,
    sessions: Mutex<Vec<AgentProfile>>,
}

impl ScriptState {
    fn next(&self) -> Result<LlmResponse, GatewayError> {
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::Other("No more responses".to_string())))
    }
}

/// Gateway whose sessions answer from one shared script, in order
pub(crate) struct ScriptedGateway {
    state: Arc<ScriptState>,
    session_error: Option<GatewayError>,
}

impl ScriptedGateway {
    pub(crate) fn new(replies: Vec<Result<LlmResponse, GatewayError>>) -> Self {
        let state = ScriptState::default();
        state.replies.lock().unwrap().extend(replies);
        Self {
            state: Arc::new(state),
            session_error: None,
        }
    }

    pub(crate) fn texts(texts: &[&str]) -> Self {
        Self::new(
            texts
                .iter()
                .map(|t| Ok(LlmResponse::from_text(*t)))
                .collect(),
        )
    }

    /// Every `create_session` call fails with `error`
    pub(crate) fn unreachable(error: GatewayError) -> Self {
        Self {
            state: Arc::new(ScriptState::default()),
            session_error: Some(error),
        }
    }

    pub(crate) fn prompts(&self) -> Vec<String> {
        self.state.prompts.lock().unwrap().clone()
    }

    pub(crate) fn tools_offered(&self) -> Vec<usize> {
        self.state.tools_offered.lock().unwrap().clone()
    }

    pub(crate) fn function_results(&self) -> Vec<Vec<FunctionResultMessage>> {
        self.state.function_results.lock().unwrap().clone()
    }

    pub(crate) fn sessions(&self) -> Vec<AgentProfile> {
        self.state.sessions.lock().unwrap().clone()
    }

    /// Number of requests that reached the "service"
    pub(crate) fn request_count(&self) -> usize {
        self.prompts().len() + self.function_results().len()
    }
}

#[async_trait]
impl LlmGateway for ScriptedGateway {
    async fn create_session(
        &self,
        profile: &AgentProfile,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        if let Some(error) = &self.session_error {
            return Err(error.clone());
        }
        self.state.sessions.lock().unwrap().push(profile.clone());
        Ok(Box::new(ScriptedSession {
            state: self.state.clone(),
        }))
    }
}

struct ScriptedSession {
    state: Arc<ScriptState>,
}

#[async_trait]
impl LlmSession for ScriptedSession {
    async fn send(&self, content: &str) -> Result<String, GatewayError> {
        self.state.prompts.lock().unwrap().push(content.to_string());
        self.state.next().map(|r| r.text_content())
    }

    async fn send_with_tools(
        &self,
        content: &str,
        tools: &[serde_json::Value],
    ) -> Result<LlmResponse, GatewayError> {
        self.state.prompts.lock().unwrap().push(content.to_string());
        self.state.tools_offered.lock().unwrap().push(tools.len());
        self.state.next()
    }

    async fn send_function_results(
        &self,
        results: &[FunctionResultMessage],
    ) -> Result<LlmResponse, GatewayError> {
        self.state
            .function_results
            .lock()
            .unwrap()
            .push(results.to_vec());
        self.state.next()
    }
}

/// Executor backed by the real lookup registry
pub(crate) struct LookupExecutor {
    spec: ToolSpec,
}

impl LookupExecutor {
    pub(crate) fn new() -> Self {
        Self {
            spec: ToolSpec::country_lookups(),
        }
    }
}

#[async_trait]
impl ToolExecutorPort for LookupExecutor {
    fn tool_spec(&self) -> &ToolSpec {
        &self.spec
    }

    async fn execute(&self, call: &ToolCall) -> ToolResult {
        self.execute_sync(call)
    }

    fn execute_sync(&self, call: &ToolCall) -> ToolResult {
        match LookupFunction::resolve_call(call) {
            Ok((function, country)) => ToolResult::success(&call.tool_name, function.invoke(country)),
            Err(e) => ToolResult::failure(&call.tool_name, ToolError::invalid_argument(e.to_string())),
        }
    }
}

pub(crate) struct NameOnlySchema;

impl ToolSchemaPort for NameOnlySchema {
    fn tool_to_schema(&self, tool: &ToolDefinition) -> serde_json::Value {
        serde_json::json!({ "name": tool.name })
    }
}

/// Progress notifier that records each callback as a short string
#[derive(Default)]
pub(crate) struct RecordingProgress {
    events: Mutex<Vec<String>>,
}

impl RecordingProgress {
    pub(crate) fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

impl FlowProgressNotifier for RecordingProgress {
    fn on_agent_start(&self, role: AgentRole) {
        self.push(format!("start:{}", role));
    }

    fn on_agent_complete(&self, role: AgentRole, success: bool) {
        self.push(format!("complete:{}:{}", role, success));
    }

    fn on_country_lookup(&self, country: &str) {
        self.push(format!("country:{}", country));
    }

    fn on_tool_call(&self, call: &ToolCall, turn: usize) {
        self.push(format!("tool_call:{}:{}", call.tool_name, turn));
    }

    fn on_tool_result(&self, result: &ToolResult) {
        self.push(format!("tool_result:{}", result.response_text()));
    }

    fn on_mood_message(&self, message: &str) {
        self.push(format!("message:{}", message));
    }

    fn on_mood_detected(&self, assessment: &MoodAssessment) {
        self.push(format!("mood:{}", assessment.label));
    }

    fn on_handoff(&self, mood: MoodLabel) {
        self.push(format!("handoff:{}", mood));
    }

    fn on_no_handoff(&self, mood: MoodLabel) {
        self.push(format!("no_handoff:{}", mood));
    }
}

#[derive(Default)]
pub(crate) struct RecordingLogger {
    events: Mutex<Vec<ConversationEvent>>,
}

impl RecordingLogger {
    pub(crate) fn event_types(&self) -> Vec<&'static str> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .map(|e| e.event_type)
            .collect()
    }
}

impl ConversationLogger for RecordingLogger {
    fn log(&self, event: ConversationEvent) {
        self.events.lock().unwrap().push(event);
    }
}
