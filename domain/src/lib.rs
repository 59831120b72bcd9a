//! Domain layer for handoff
//!
//! Pure types with no I/O: the mood label set and its normalizer, the static
//! country table and its lookup functions, prompt templates, agent profiles,
//! and the structured shape of model responses.
//!
//! # Core Concepts
//!
//! ## Agent
//!
//! One single-turn model invocation with a fixed prompt template and fixed
//! generation parameters ([`AgentProfile`]).
//!
//! ## Handoff
//!
//! The mood flow passes the output of one agent to a second agent, but only
//! when the detected mood is `sad` or `stressed` ([`HandoffOutcome`]).
//!
//! ## Normalization
//!
//! Raw model text is constrained to a known domain before use
//! ([`MoodLabel::normalize`]). Normalization never fails.

pub mod agent;
pub mod core;
pub mod country;
pub mod handoff;
pub mod mood;
pub mod prompt;
pub mod session;
pub mod tool;

// Re-export commonly used types
pub use agent::{
    AgentProfile, AgentProfiles, AgentRole, ConfigIssue, ConfigIssueCode, GenerationConfig,
    Severity,
};
pub use core::{error::DomainError, model::Model, string::one_line_preview};
pub use country::{CountryField, CountryReport, CountryTable, LookupFunction};
pub use handoff::{ActivitySuggestion, HandoffOutcome};
pub use mood::{MoodAssessment, MoodLabel, MoodOrigin};
pub use prompt::PromptTemplate;
pub use session::response::{ContentBlock, LlmResponse, StopReason, TokenUsage};
pub use tool::{
    entities::{ToolCall, ToolDefinition, ToolParameter, ToolSpec},
    traits::{DefaultToolValidator, ToolValidator},
    value_objects::{ToolError, ToolResult},
};
