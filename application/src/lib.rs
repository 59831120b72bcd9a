//! Application layer for handoff
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ExecutionParams;
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    llm_gateway::{FunctionResultMessage, GatewayError, LlmGateway, LlmSession},
    progress::{FlowProgressNotifier, NoProgress},
    tool_executor::ToolExecutorPort,
    tool_schema::ToolSchemaPort,
};
pub use use_cases::analyze_mood::AnalyzeMoodUseCase;
pub use use_cases::country_info::{CountryInfoError, CountryInfoInput, CountryInfoUseCase};
pub use use_cases::mood_handoff::{MoodHandoffInput, MoodHandoffUseCase};
pub use use_cases::suggest_activity::SuggestActivityUseCase;
pub use use_cases::suggest_product::SuggestProductUseCase;
