//! Agent domain module
//!
//! An agent here is one single-turn model invocation with a fixed prompt
//! template and fixed generation parameters. [`AgentProfiles`] holds the
//! profile of every agent the application runs.

pub mod generation;
pub mod profile;
pub mod validation;

pub use generation::GenerationConfig;
pub use profile::{AgentProfile, AgentProfiles, AgentRole};
pub use validation::{ConfigIssue, ConfigIssueCode, Severity};
