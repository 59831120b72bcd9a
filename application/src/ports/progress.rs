//! Progress notification port
//!
//! Defines the callbacks the flows emit while they wait on the model.
//! Implementations live in the presentation layer (console messages,
//! spinners); every method has a no-op default.

use handoff_domain::{AgentRole, MoodAssessment, MoodLabel, ToolCall, ToolResult};

/// Callback for progress updates during a flow
pub trait FlowProgressNotifier: Send + Sync {
    /// Called before an agent's first request
    fn on_agent_start(&self, _role: AgentRole) {}

    /// Called when an agent has produced its final text (or failed)
    fn on_agent_complete(&self, _role: AgentRole, _success: bool) {}

    // ==================== Country flow ====================

    /// Called once per country request, before the model is contacted
    fn on_country_lookup(&self, _country: &str) {}

    /// Called when the model asks for a lookup function
    fn on_tool_call(&self, _call: &ToolCall, _turn: usize) {}

    /// Called after a lookup function ran
    fn on_tool_result(&self, _result: &ToolResult) {}

    // ==================== Mood flow ====================

    /// Called with the operator's message before the analyzer runs
    fn on_mood_message(&self, _message: &str) {}

    /// Called with the normalized mood
    fn on_mood_detected(&self, _assessment: &MoodAssessment) {}

    /// Called when the mood hands off to the activity suggester
    fn on_handoff(&self, _mood: MoodLabel) {}

    /// Called when the mood does not need a suggestion
    fn on_no_handoff(&self, _mood: MoodLabel) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl FlowProgressNotifier for NoProgress {}
