//! Mood-to-activity handoff
//!
//! Agent 1 detects a mood; only `sad` and `stressed` hand off to agent 2.
//! The outcome records both steps.

mod outcome;

pub use outcome::{ActivitySuggestion, HandoffOutcome};
