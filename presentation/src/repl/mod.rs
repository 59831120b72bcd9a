//! Interactive loops
//!
//! Provides the read-answer-print loop shared by the three agent flows.

mod flow;
mod line_source;
mod runner;
mod session;

pub use flow::Flow;
pub use line_source::{LineSource, ReadOutcome, ReedlineSource, ScriptedLines, is_exit};
pub use runner::{FlowAnswer, FlowRunner};
pub use session::FlowRepl;
