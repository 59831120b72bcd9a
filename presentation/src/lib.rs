//! Presentation layer for handoff
//!
//! This crate contains CLI definitions, the interactive loops, output
//! formatters, and progress reporters.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod repl;

// Re-export commonly used types
pub use cli::commands::{Cli, Command};
pub use config::ReplConfig;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::ConsoleProgress;
pub use repl::{
    Flow, FlowAnswer, FlowRepl, FlowRunner, LineSource, ReadOutcome, ReedlineSource, ScriptedLines,
    is_exit,
};
