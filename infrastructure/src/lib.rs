//! Infrastructure layer for handoff
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod gemini;
pub mod logging;
pub mod tools;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileAgentConfig, FileConfig, FileFlowConfig, FileFlowsConfig, FileGeminiConfig,
    FileLoggingConfig, FileReplConfig,
};
pub use gemini::{ApiCredential, GeminiLlmGateway, GeminiSession};
pub use logging::JsonlConversationLogger;
pub use tools::{JsonSchemaToolConverter, LookupToolExecutor};
