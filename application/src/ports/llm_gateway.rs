//! LLM Gateway port
//!
//! Defines the interface for talking to the hosted model. One session is
//! opened per agent invocation and dropped when the answer is in.

use async_trait::async_trait;
use handoff_domain::{AgentProfile, LlmResponse};
use thiserror::Error;

/// Errors that can occur during gateway operations.
///
/// Use cases never let these escape: each flow turns them into its own
/// fallback text.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GatewayError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Timeout")]
    Timeout,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Blocked by safety filters: {0}")]
    Blocked(String),

    #[error("Other error: {0}")]
    Other(String),
}

impl GatewayError {
    /// Whether the service rejected the credential
    pub fn is_auth(&self) -> bool {
        matches!(self, GatewayError::Authentication(_))
    }
}

/// Result of one function call, sent back to the model
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionResultMessage {
    /// Name of the function the model called
    pub name: String,
    /// Output text, or the error message when `is_error`
    pub output: String,
    pub is_error: bool,
}

/// Gateway for model communication
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Open a session configured for one agent
    async fn create_session(
        &self,
        profile: &AgentProfile,
    ) -> Result<Box<dyn LlmSession>, GatewayError>;
}

/// An open model session.
///
/// A session remembers the exchange so far, which is what lets function
/// results be answered in context.
#[async_trait]
pub trait LlmSession: Send + Sync {
    /// Send a prompt and get the reply text
    async fn send(&self, content: &str) -> Result<String, GatewayError>;

    /// Send a prompt with function declarations (JSON Schema values)
    async fn send_with_tools(
        &self,
        content: &str,
        tools: &[serde_json::Value],
    ) -> Result<LlmResponse, GatewayError>;

    /// Answer the function calls of the previous response
    async fn send_function_results(
        &self,
        results: &[FunctionResultMessage],
    ) -> Result<LlmResponse, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GatewayError::ServerError {
            status: 503,
            message: "overloaded".to_string(),
        };
        assert_eq!(err.to_string(), "Server error (503): overloaded");
        assert_eq!(GatewayError::Timeout.to_string(), "Timeout");
        assert!(GatewayError::Authentication("bad key".to_string()).is_auth());
        assert!(!GatewayError::Timeout.is_auth());
    }
}
