//! Gemini LLM Gateway implementation

use super::credential::ApiCredential;
use super::session::GeminiSession;
use crate::config::FileGeminiConfig;
use async_trait::async_trait;
use handoff_application::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession};
use handoff_domain::AgentProfile;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

/// LLM Gateway implementation for the Gemini `generateContent` REST API.
///
/// Holds one HTTP client (connection pool) shared by every session.
pub struct GeminiLlmGateway {
    client: Client,
    base_url: String,
    credential: ApiCredential,
}

impl GeminiLlmGateway {
    /// Create a gateway. A zero `timeout` disables the request timeout.
    pub fn new(
        credential: ApiCredential,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let mut builder = Client::builder();
        if !timeout.is_zero() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| GatewayError::Other(format!("Failed to create HTTP client: {}", e)))?;

        let base_url = base_url.into();
        info!("GeminiLlmGateway initialized ({})", base_url);

        Ok(Self {
            client,
            base_url,
            credential,
        })
    }

    /// Create a gateway from the `[gemini]` configuration section
    pub fn from_config(
        config: &FileGeminiConfig,
        credential: ApiCredential,
    ) -> Result<Self, GatewayError> {
        Self::new(
            credential,
            config.base_url.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }
}

#[async_trait]
impl LlmGateway for GeminiLlmGateway {
    async fn create_session(
        &self,
        profile: &AgentProfile,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        debug!(
            "Creating session for {} on {}",
            profile.role.display_name(),
            profile.model
        );
        Ok(Box::new(GeminiSession::new(
            self.client.clone(),
            &self.base_url,
            self.credential.clone(),
            profile.clone(),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use handoff_domain::{AgentRole, GenerationConfig, Model};
    use handoff_application::ports::llm_gateway::FunctionResultMessage;
    use httpmock::prelude::*;
    use serde_json::json;

    fn gateway(server: &MockServer) -> GeminiLlmGateway {
        GeminiLlmGateway::new(
            ApiCredential::new("test-key"),
            server.base_url(),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    fn text_reply(text: &str) -> serde_json::Value {
        json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": text}]},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 10, "candidatesTokenCount": 3, "totalTokenCount": 13}
        })
    }

    #[tokio::test]
    async fn test_send_text() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/models/gemini-1.5-flash:generateContent")
                    .header("x-goog-api-key", "test-key")
                    .json_body_partial(
                        r#"{"contents": [{"role": "user", "parts": [{"text": "Message: hi"}]}]}"#,
                    );
                then.status(200).json_body(text_reply("happy\n"));
            })
            .await;

        let session = gateway(&server)
            .create_session(&AgentProfile::new(AgentRole::MoodAnalyzer))
            .await
            .unwrap();
        let text = session.send("Message: hi").await.unwrap();

        assert_eq!(text, "happy\n");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_generation_config_is_sent_with_gemini_names() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/models/gemini-2.5-pro:generateContent")
                    .json_body_partial(
                        r#"{"generationConfig": {"temperature": 0.5, "topK": 64, "maxOutputTokens": 512}}"#,
                    );
                then.status(200).json_body(text_reply("Ibuprofen"));
            })
            .await;

        let profile = AgentProfile::new(AgentRole::ProductAdvisor)
            .with_model(Model::Gemini25Pro)
            .with_generation(
                GenerationConfig::default()
                    .with_temperature(0.5)
                    .with_top_k(64)
                    .with_max_output_tokens(512),
            );
        let session = gateway(&server).create_session(&profile).await.unwrap();

        assert_eq!(session.send("headache").await.unwrap(), "Ibuprofen");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_status_errors() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(400).json_body(json!({
                    "error": {"code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT"}
                }));
            })
            .await;

        let session = gateway(&server)
            .create_session(&AgentProfile::new(AgentRole::ProductAdvisor))
            .await
            .unwrap();
        let err = session.send("anything").await.unwrap_err();
        assert_eq!(err, GatewayError::InvalidRequest("API key not valid.".to_string()));
    }

    #[tokio::test]
    async fn test_server_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(503).body("Service Unavailable");
            })
            .await;

        let session = gateway(&server)
            .create_session(&AgentProfile::new(AgentRole::ActivitySuggester))
            .await
            .unwrap();
        assert_eq!(
            session.send("sad").await.unwrap_err(),
            GatewayError::ServerError {
                status: 503,
                message: "Service Unavailable".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_undecodable_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(200).body("not json");
            })
            .await;

        let session = gateway(&server)
            .create_session(&AgentProfile::new(AgentRole::ProductAdvisor))
            .await
            .unwrap();
        assert!(matches!(
            session.send("x").await.unwrap_err(),
            GatewayError::InvalidResponse(_)
        ));
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let gateway = GeminiLlmGateway::new(
            ApiCredential::new("k"),
            "http://127.0.0.1:1",
            Duration::from_secs(5),
        )
        .unwrap();
        let session = gateway
            .create_session(&AgentProfile::new(AgentRole::ProductAdvisor))
            .await
            .unwrap();
        assert!(matches!(
            session.send("x").await.unwrap_err(),
            GatewayError::ConnectionError(_)
        ));
    }

    #[tokio::test]
    async fn test_transport_error_does_not_reveal_key() {
        let gateway = GeminiLlmGateway::new(
            ApiCredential::new("SUPERSECRETKEY"),
            "http://127.0.0.1:1",
            Duration::from_secs(5),
        )
        .unwrap();
        let session = gateway
            .create_session(&AgentProfile::new(AgentRole::ProductAdvisor))
            .await
            .unwrap();

        let err = session.send("x").await.unwrap_err();
        assert!(matches!(err, GatewayError::ConnectionError(_)));
        assert!(!err.to_string().contains("SUPERSECRETKEY"));
        assert!(!format!("{:?}", err).contains("SUPERSECRETKEY"));
    }

    #[tokio::test]
    async fn test_key_is_sent_in_header() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/models/gemini-1.5-flash:generateContent")
                    .header("x-goog-api-key", "test-key");
                then.status(401).json_body(json!({
                    "error": {"code": 401, "message": "Request had invalid authentication credentials.", "status": "UNAUTHENTICATED"}
                }));
            })
            .await;

        let session = gateway(&server)
            .create_session(&AgentProfile::new(AgentRole::MoodAnalyzer))
            .await
            .unwrap();
        let err = session.send("hi").await.unwrap_err();

        assert!(err.is_auth());
        assert!(!err.to_string().contains("test-key"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_function_call_round_trip() {
        let server = MockServer::start_async().await;
        let mut call = server
            .mock_async(|when, then| {
                when.method(POST).body_contains("functionDeclarations");
                then.status(200).json_body(json!({
                    "candidates": [{
                        "content": {"role": "model", "parts": [
                            {"functionCall": {"name": "get_country_capital", "args": {"country_name": "Japan"}}}
                        ]},
                        "finishReason": "STOP"
                    }]
                }));
            })
            .await;

        let session = gateway(&server)
            .create_session(&AgentProfile::new(AgentRole::CountryInfo))
            .await
            .unwrap();

        let declarations = vec![json!({"name": "get_country_capital", "description": "d"})];
        let response = session
            .send_with_tools("Tell me everything you know about Japan.", &declarations)
            .await
            .unwrap();
        assert_eq!(response.tool_calls()[0].get_string("country_name"), Some("Japan"));
        call.assert_async().await;
        call.delete_async().await;

        // The follow-up resends the declarations and the whole exchange
        let answer = server
            .mock_async(|when, then| {
                when.method(POST)
                    .body_contains("functionDeclarations")
                    .body_contains("Tell me everything you know about Japan.")
                    .body_contains(r#""functionCall""#)
                    .body_contains(r#""functionResponse""#);
                then.status(200).json_body(text_reply("The capital of Japan is Tokyo."));
            })
            .await;

        let response = session
            .send_function_results(&[FunctionResultMessage {
                name: "get_country_capital".to_string(),
                output: "Tokyo".to_string(),
                is_error: false,
            }])
            .await
            .unwrap();
        assert_eq!(response.text_content(), "The capital of Japan is Tokyo.");
        answer.assert_async().await;
    }
}
