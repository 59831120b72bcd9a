//! Port for structured conversation logging.
//!
//! Records each exchange with the model (prompts, replies, function calls,
//! the mood decision) as machine-readable events. This is separate from
//! `tracing`: tracing carries diagnostics, this carries the transcript.

use handoff_domain::{AgentProfile, MoodAssessment, ToolCall, ToolResult};
use serde_json::{Value, json};

/// A structured conversation event for logging.
///
/// The adapter adds the timestamp when it writes the record.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationEvent {
    /// Event type identifier (e.g., "prompt", "tool_call")
    pub event_type: &'static str,
    /// Event-specific fields
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }

    pub fn prompt(profile: &AgentProfile, text: &str) -> Self {
        Self::new(
            "prompt",
            json!({
                "agent": profile.role.as_str(),
                "model": profile.model.to_string(),
                "text": text,
            }),
        )
    }

    pub fn llm_response(profile: &AgentProfile, text: &str) -> Self {
        Self::new(
            "llm_response",
            json!({
                "agent": profile.role.as_str(),
                "model": profile.model.to_string(),
                "bytes": text.len(),
                "text": text,
            }),
        )
    }

    pub fn tool_call(call: &ToolCall, turn: usize) -> Self {
        Self::new(
            "tool_call",
            json!({
                "function": call.tool_name,
                "arguments": call.arguments,
                "turn": turn,
            }),
        )
    }

    pub fn tool_result(result: &ToolResult) -> Self {
        Self::new(
            "tool_result",
            json!({
                "function": result.tool_name,
                "success": result.is_success(),
                "output": result.response_text(),
            }),
        )
    }

    pub fn mood_detected(assessment: &MoodAssessment) -> Self {
        Self::new(
            "mood_detected",
            json!({
                "mood": assessment.label.as_str(),
                "origin": assessment.origin,
            }),
        )
    }

    pub fn handoff(assessment: &MoodAssessment, handed_off: bool) -> Self {
        Self::new(
            "handoff",
            json!({
                "mood": assessment.label.as_str(),
                "handed_off": handed_off,
            }),
        )
    }

    pub fn flow_error(profile: &AgentProfile, error: &str) -> Self {
        Self::new(
            "flow_error",
            json!({
                "agent": profile.role.as_str(),
                "error": error,
            }),
        )
    }
}

/// Port for logging conversation events.
///
/// `log` is synchronous and infallible; a write failure must never break
/// a flow.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when no transcript was requested.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
