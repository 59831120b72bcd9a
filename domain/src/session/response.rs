//! Structured model responses.
//!
//! Open-ended agents only need the reply text, but the country agent can be
//! answered with function calls instead. Both come back as an ordered list of
//! [`ContentBlock`]s.
//!
//! ```text
//! send()            → String
//! send_with_tools() → LlmResponse → tool_calls() → execute → send_function_results()
//! ```

use crate::tool::entities::ToolCall;
use serde::{Deserialize, Serialize};

/// A single block of content within a model response.
///
/// # Examples
///
/// ```
/// use handoff_domain::session::response::ContentBlock;
///
/// let text = ContentBlock::Text("Paris is the capital.".to_string());
/// assert!(text.as_text().is_some());
///
/// let call = ContentBlock::FunctionCall {
///     name: "get_country_capital".to_string(),
///     args: serde_json::json!({"country_name": "France"}),
/// };
/// assert!(call.as_function_call().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ContentBlock {
    /// Text from the model.
    Text(String),

    /// A request to call one of the declared functions.
    ///
    /// Gemini does not assign call ids; calls are answered by name, in order.
    FunctionCall {
        name: String,
        /// Arguments object exactly as the model produced it
        args: serde_json::Value,
    },
}

impl ContentBlock {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentBlock::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns `(name, args)` if this is a `FunctionCall` block.
    pub fn as_function_call(&self) -> Option<(&str, &serde_json::Value)> {
        match self {
            ContentBlock::FunctionCall { name, args } => Some((name, args)),
            _ => None,
        }
    }
}

/// Why the model stopped generating (Gemini `finishReason`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Natural end of response
    Stop,
    /// Hit `maxOutputTokens`; the text may be truncated
    MaxTokens,
    /// Output withheld by safety filters
    Safety,
    /// Any other provider reason, kept verbatim
    Other(String),
}

impl StopReason {
    /// Parse a Gemini `finishReason` value
    pub fn from_gemini(reason: &str) -> Self {
        match reason {
            "STOP" => StopReason::Stop,
            "MAX_TOKENS" => StopReason::MaxTokens,
            "SAFETY" => StopReason::Safety,
            other => StopReason::Other(other.to_string()),
        }
    }
}

/// Token accounting reported by the service
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub output_tokens: u32,
}

impl TokenUsage {
    pub fn total(&self) -> u32 {
        self.prompt_tokens + self.output_tokens
    }
}

/// A structured response from the model.
///
/// # Examples
///
/// ```
/// use handoff_domain::session::response::{ContentBlock, LlmResponse, StopReason};
///
/// let response = LlmResponse::from_text("Hello!");
/// assert_eq!(response.text_content(), "Hello!");
/// assert!(!response.has_tool_calls());
///
/// let response = LlmResponse {
///     content: vec![ContentBlock::FunctionCall {
///         name: "get_country_population".to_string(),
///         args: serde_json::json!({"country_name": "India"}),
///     }],
///     stop_reason: Some(StopReason::Stop),
///     model: None,
///     usage: None,
/// };
/// assert_eq!(response.tool_calls()[0].get_string("country_name"), Some("India"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LlmResponse {
    pub content: Vec<ContentBlock>,
    pub stop_reason: Option<StopReason>,
    /// Model version reported by the service
    pub model: Option<String>,
    pub usage: Option<TokenUsage>,
}

impl LlmResponse {
    /// Text-only response
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentBlock::Text(text.into())],
            stop_reason: Some(StopReason::Stop),
            model: None,
            usage: None,
        }
    }

    /// Concatenate all `Text` blocks
    pub fn text_content(&self) -> String {
        self.content
            .iter()
            .filter_map(|b| b.as_text())
            .collect::<Vec<_>>()
            .join("")
    }

    /// Extract all `FunctionCall` blocks as `ToolCall`s, in order
    pub fn tool_calls(&self) -> Vec<ToolCall> {
        self.content
            .iter()
            .filter_map(|b| b.as_function_call())
            .map(|(name, args)| ToolCall::from_json_args(name, args))
            .collect()
    }

    pub fn has_tool_calls(&self) -> bool {
        self.content
            .iter()
            .any(|b| matches!(b, ContentBlock::FunctionCall { .. }))
    }
}
