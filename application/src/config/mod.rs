//! Application-level configuration.
//!
//! - [`ExecutionParams`]: function-call loop control

pub mod execution_params;

pub use execution_params::ExecutionParams;
