//! Gemini session management.
//!
//! Provides [`GeminiSession`] which implements [`LlmSession`] for one agent
//! invocation. The REST endpoint is stateless, so the session keeps the
//! conversation itself and resends it on every request; this is what lets
//! function results be answered in context.

use super::credential::ApiCredential;
use super::error;
use super::protocol::{
    Content, GenerateContentRequest, GenerateContentResponse, Tool, WireGenerationConfig,
};
use async_trait::async_trait;
use handoff_application::ports::llm_gateway::{FunctionResultMessage, GatewayError, LlmSession};
use handoff_domain::{AgentProfile, LlmResponse};
use reqwest::Client;
use std::time::Instant;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

/// Header carrying the API key. The key never goes into the URL.
const API_KEY_HEADER: &str = "x-goog-api-key";

pub struct GeminiSession {
    client: Client,
    endpoint: String,
    credential: ApiCredential,
    profile: AgentProfile,
    history: Mutex<Vec<Content>>,
    /// Function declarations, kept for every request after `send_with_tools`
    tools: Mutex<Option<Vec<Tool>>>,
}

impl GeminiSession {
    pub(crate) fn new(
        client: Client,
        base_url: &str,
        credential: ApiCredential,
        profile: AgentProfile,
    ) -> Self {
        let endpoint = format!(
            "{}/models/{}:generateContent",
            base_url.trim_end_matches('/'),
            profile.model.as_str()
        );
        Self {
            client,
            endpoint,
            credential,
            profile,
            history: Mutex::new(Vec::new()),
            tools: Mutex::new(None),
        }
    }

    /// Append `turn`, send the whole conversation, and record the reply.
    ///
    /// On failure the turn is removed again so the history stays consistent.
    async fn exchange(&self, turn: Content) -> Result<LlmResponse, GatewayError> {
        let mut history = self.history.lock().await;
        history.push(turn);

        let request = GenerateContentRequest {
            contents: history.clone(),
            tools: self.tools.lock().await.clone(),
            generation_config: WireGenerationConfig::from_domain(&self.profile.generation),
        };

        let started = Instant::now();
        match self.post(&request).await {
            Ok((response, content)) => {
                let usage = response.usage.unwrap_or_default();
                info!(
                    agent = self.profile.role.as_str(),
                    model = %self.profile.model,
                    duration_ms = started.elapsed().as_millis() as u64,
                    prompt_tokens = usage.prompt_tokens,
                    output_tokens = usage.output_tokens,
                    function_calls = response.tool_calls().len(),
                    "Gemini request completed"
                );
                history.push(content);
                Ok(response)
            }
            Err(e) => {
                error!(
                    agent = self.profile.role.as_str(),
                    model = %self.profile.model,
                    duration_ms = started.elapsed().as_millis() as u64,
                    "Gemini request failed: {}",
                    e
                );
                if e.is_auth() {
                    warn!("Gemini rejected the API key; check gemini.api_key or GOOGLE_API_KEY");
                }
                history.pop();
                Err(e)
            }
        }
    }

    async fn post(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<(LlmResponse, Content), GatewayError> {
        debug!("POST {} ({} turns)", self.endpoint, request.contents.len());

        let response = self
            .client
            .post(&self.endpoint)
            .header(API_KEY_HEADER, self.credential.expose())
            .json(request)
            .send()
            .await
            .map_err(error::from_transport)?;

        let status = response.status();
        let body = response.text().await.map_err(error::from_transport)?;

        if !status.is_success() {
            return Err(error::from_status(status.as_u16(), &body));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body)
            .map_err(|e| GatewayError::InvalidResponse(format!("{}: {}", e, body)))?;
        parsed.into_domain()
    }
}

#[async_trait]
impl LlmSession for GeminiSession {
    async fn send(&self, content: &str) -> Result<String, GatewayError> {
        let response = self.exchange(Content::user_text(content)).await?;
        Ok(response.text_content())
    }

    async fn send_with_tools(
        &self,
        content: &str,
        tools: &[serde_json::Value],
    ) -> Result<LlmResponse, GatewayError> {
        if !tools.is_empty() {
            *self.tools.lock().await = Some(vec![Tool {
                function_declarations: tools.to_vec(),
            }]);
        }
        self.exchange(Content::user_text(content)).await
    }

    async fn send_function_results(
        &self,
        results: &[FunctionResultMessage],
    ) -> Result<LlmResponse, GatewayError> {
        self.exchange(Content::function_responses(results)).await
    }
}
