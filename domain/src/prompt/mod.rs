//! Prompt domain
//!
//! One template per agent. Templates are pure string interpolation.

mod template;

pub use template::PromptTemplate;
