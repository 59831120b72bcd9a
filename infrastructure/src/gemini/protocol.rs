//! Wire types for the Gemini `generateContent` REST endpoint.
//!
//! Field names follow the service's camelCase JSON. Only the parts this
//! crate sends or reads are modelled; unknown response parts are kept as
//! raw JSON and ignored.
//!
//! # Request shape
//!
//! ```json
//! {
//!   "contents": [{"role": "user", "parts": [{"text": "..."}]}],
//!   "tools": [{"functionDeclarations": [ ... ]}],
//!   "generationConfig": {"temperature": 0.2}
//! }
//! ```

use handoff_application::ports::llm_gateway::{FunctionResultMessage, GatewayError};
use handoff_domain::{ContentBlock, GenerationConfig, LlmResponse, StopReason, TokenUsage};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<Tool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<WireGenerationConfig>,
}

/// One turn of the conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user_text(text: impl Into<String>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![Part::Text { text: text.into() }],
        }
    }

    /// Function results are sent back in a single `user` turn, one part per call
    pub fn function_responses(results: &[FunctionResultMessage]) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: results
                .iter()
                .map(|r| Part::FunctionResponse {
                    function_response: FunctionResponse::from_result(r),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    FunctionCall {
        #[serde(rename = "functionCall")]
        function_call: FunctionCall,
    },
    FunctionResponse {
        #[serde(rename = "functionResponse")]
        function_response: FunctionResponse,
    },
    /// Any other part type (inline data, executable code, ...)
    #[serde(skip_serializing)]
    Other(serde_json::Value),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    #[serde(default)]
    pub args: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionResponse {
    pub name: String,
    pub response: serde_json::Value,
}

impl FunctionResponse {
    /// `{"result": ...}` on success, `{"error": ...}` on failure
    pub fn from_result(result: &FunctionResultMessage) -> Self {
        let response = if result.is_error {
            serde_json::json!({ "error": result.output })
        } else {
            serde_json::json!({ "result": result.output })
        };
        Self {
            name: result.name.clone(),
            response,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub function_declarations: Vec<serde_json::Value>,
}

/// `generationConfig`; unset fields are left out so the model defaults apply
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WireGenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

impl WireGenerationConfig {
    /// `None` when nothing is set, so the whole field is omitted
    pub fn from_domain(config: &GenerationConfig) -> Option<Self> {
        if config.is_empty() {
            return None;
        }
        Some(Self {
            temperature: config.temperature,
            top_p: config.top_p,
            top_k: config.top_k,
            max_output_tokens: config.max_output_tokens,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
    pub usage_metadata: Option<UsageMetadata>,
    pub model_version: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
}

impl GenerateContentResponse {
    /// Convert the first candidate into a domain response.
    ///
    /// Also returns the candidate's content so the session can append it to
    /// its history.
    pub fn into_domain(self) -> Result<(LlmResponse, Content), GatewayError> {
        let block_reason = self.prompt_feedback.and_then(|f| f.block_reason);

        let Some(candidate) = self.candidates.into_iter().next() else {
            return Err(match block_reason {
                Some(reason) => GatewayError::Blocked(reason),
                None => GatewayError::InvalidResponse("no candidates in response".to_string()),
            });
        };

        let stop_reason = candidate.finish_reason.as_deref().map(StopReason::from_gemini);
        let mut content = candidate.content.unwrap_or(Content {
            role: Some("model".to_string()),
            parts: Vec::new(),
        });

        if content.parts.is_empty() && stop_reason == Some(StopReason::Safety) {
            return Err(GatewayError::Blocked("SAFETY".to_string()));
        }

        let blocks = content
            .parts
            .iter()
            .filter_map(|part| match part {
                Part::Text { text } if !text.is_empty() => Some(ContentBlock::Text(text.clone())),
                Part::FunctionCall { function_call } => Some(ContentBlock::FunctionCall {
                    name: function_call.name.clone(),
                    args: function_call.args.clone(),
                }),
                _ => None,
            })
            .collect();

        content.parts.retain(|part| !matches!(part, Part::Other(_)));

        let usage = self.usage_metadata.map(|u| TokenUsage {
            prompt_tokens: u.prompt_token_count,
            output_tokens: u.candidates_token_count,
        });

        let response = LlmResponse {
            content: blocks,
            stop_reason,
            model: self.model_version,
            usage,
        };
        Ok((response, content))
    }
}

/// Error body returned with non-2xx statuses
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub code: u16,
    #[serde(default)]
    pub message: String,
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_generation_config_omits_unset_fields() {
        let wire = WireGenerationConfig::from_domain(&GenerationConfig::product_advisor()).unwrap();
        let value = serde_json::to_value(&wire).unwrap();
        assert_eq!(value["topP"], json!(0.95f32));
        assert_eq!(value["topK"], json!(64));
        assert_eq!(value["maxOutputTokens"], json!(512));

        let wire = WireGenerationConfig::from_domain(&GenerationConfig::country_info()).unwrap();
        let value = serde_json::to_value(&wire).unwrap();
        assert_eq!(value.as_object().unwrap().len(), 1);
        assert!(value.get("temperature").is_some());

        assert!(WireGenerationConfig::from_domain(&GenerationConfig::default()).is_none());
    }

    #[test]
    fn test_request_serialization() {
        let request = GenerateContentRequest {
            contents: vec![Content::user_text("Tell me everything you know about Japan.")],
            tools: Some(vec![Tool {
                function_declarations: vec![json!({"name": "get_country_capital"})],
            }]),
            generation_config: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["contents"][0]["role"], "user");
        assert_eq!(
            value["contents"][0]["parts"][0]["text"],
            "Tell me everything you know about Japan."
        );
        assert_eq!(
            value["tools"][0]["functionDeclarations"][0]["name"],
            "get_country_capital"
        );
        assert!(value.get("generationConfig").is_none());
    }

    #[test]
    fn test_function_responses() {
        let content = Content::function_responses(&[
            FunctionResultMessage {
                name: "get_country_capital".to_string(),
                output: "Tokyo".to_string(),
                is_error: false,
            },
            FunctionResultMessage {
                name: "get_country_currency".to_string(),
                output: "Unknown function".to_string(),
                is_error: true,
            },
        ]);
        let value = serde_json::to_value(&content).unwrap();
        assert_eq!(value["parts"][0]["functionResponse"]["name"], "get_country_capital");
        assert_eq!(value["parts"][0]["functionResponse"]["response"]["result"], "Tokyo");
        assert_eq!(
            value["parts"][1]["functionResponse"]["response"]["error"],
            "Unknown function"
        );
    }

    #[test]
    fn test_response_with_text_and_function_call() {
        let body = json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [
                        {"text": "Let me check."},
                        {"functionCall": {"name": "get_country_capital", "args": {"country_name": "Japan"}}}
                    ]
                },
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 20, "candidatesTokenCount": 5, "totalTokenCount": 25},
            "modelVersion": "gemini-1.5-flash-002"
        });
        let response: GenerateContentResponse = serde_json::from_value(body).unwrap();
        let (response, content) = response.into_domain().unwrap();

        assert_eq!(response.text_content(), "Let me check.");
        assert_eq!(response.tool_calls()[0].tool_name, "get_country_capital");
        assert_eq!(response.stop_reason, Some(StopReason::Stop));
        assert_eq!(response.usage.unwrap().total(), 25);
        assert_eq!(response.model.as_deref(), Some("gemini-1.5-flash-002"));
        assert_eq!(content.parts.len(), 2);
    }

    #[test]
    fn test_unknown_parts_are_ignored() {
        let body = json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"inlineData": {"mimeType": "x"}}, {"text": "ok"}]}
            }]
        });
        let response: GenerateContentResponse = serde_json::from_value(body).unwrap();
        let (response, _) = response.into_domain().unwrap();
        assert_eq!(response.text_content(), "ok");
        assert!(response.usage.is_none());
    }

    #[test]
    fn test_history_content_drops_unknown_parts() {
        let body = json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"inlineData": {"mimeType": "x"}}, {"text": "ok"}]}
            }]
        });
        let response: GenerateContentResponse = serde_json::from_value(body).unwrap();
        let (_, content) = response.into_domain().unwrap();
        assert_eq!(content.parts, vec![Part::Text { text: "ok".to_string() }]);
        assert!(serde_json::to_value(&content).is_ok());
    }

    #[test]
    fn test_no_candidates() {
        let response: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert!(matches!(
            response.into_domain(),
            Err(GatewayError::InvalidResponse(_))
        ));

        let response: GenerateContentResponse =
            serde_json::from_value(json!({"promptFeedback": {"blockReason": "SAFETY"}})).unwrap();
        assert_eq!(
            response.into_domain().unwrap_err(),
            GatewayError::Blocked("SAFETY".to_string())
        );
    }

    #[test]
    fn test_safety_stop_without_content() {
        let response: GenerateContentResponse =
            serde_json::from_value(json!({"candidates": [{"finishReason": "SAFETY"}]})).unwrap();
        assert!(matches!(response.into_domain(), Err(GatewayError::Blocked(_))));
    }
}
