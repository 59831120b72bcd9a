//! Suggest product use case (smart store agent).

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::progress::FlowProgressNotifier;
use crate::use_cases::shared::ask_once;
use handoff_domain::{AgentProfile, PromptTemplate, one_line_preview};
use std::sync::Arc;
use tracing::{info, warn};

/// Suggests a product for a described need; open-ended, reply returned verbatim.
pub struct SuggestProductUseCase {
    gateway: Arc<dyn LlmGateway>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl SuggestProductUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        Self {
            gateway,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn fallback_message(error: &GatewayError) -> String {
        format!("Error: {}", error)
    }

    pub async fn execute(
        &self,
        need: &str,
        profile: &AgentProfile,
        progress: &dyn FlowProgressNotifier,
    ) -> String {
        info!("Product request: {}", one_line_preview(need, 60));
        progress.on_agent_start(profile.role);

        let prompt = PromptTemplate::product_suggestion(need);
        match ask_once(
            self.gateway.as_ref(),
            profile,
            &prompt,
            self.conversation_logger.as_ref(),
        )
        .await
        {
            Ok(reply) => {
                progress.on_agent_complete(profile.role, true);
                reply
            }
            Err(e) => {
                warn!("Product suggestion failed: {}", e);
                self.conversation_logger
                    .log(ConversationEvent::flow_error(profile, &e.to_string()));
                progress.on_agent_complete(profile.role, false);
                Self::fallback_message(&e)
            }
        }
    }
}
