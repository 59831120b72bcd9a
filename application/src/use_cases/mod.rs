//! Use cases
//!
//! One use case per agent, plus the handoff that chains two of them. Every
//! `execute` returns the text to show; remote failures are turned into each
//! flow's fallback text here and never reach the caller.

pub mod analyze_mood;
pub mod country_info;
pub mod mood_handoff;
pub mod suggest_activity;
pub mod suggest_product;
pub(crate) mod shared;

#[cfg(test)]
pub(crate) mod test_support;
