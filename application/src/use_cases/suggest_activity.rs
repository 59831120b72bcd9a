//! Suggest activity use case (agent 2 of the mood flow).

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::progress::FlowProgressNotifier;
use crate::use_cases::shared::ask_once;
use handoff_domain::{AgentProfile, MoodLabel, PromptTemplate};
use std::sync::Arc;
use tracing::warn;

/// Asks the activity agent for a suggestion matching a mood.
///
/// The reply is returned verbatim; a failure becomes an apology that
/// carries the error text.
pub struct SuggestActivityUseCase {
    gateway: Arc<dyn LlmGateway>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl SuggestActivityUseCase {
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
        format!("Sorry, I couldn't suggest an activity. Error: {}", error)
    }

    pub async fn execute(
        &self,
        mood: MoodLabel,
        profile: &AgentProfile,
        progress: &dyn FlowProgressNotifier,
    ) -> String {
        progress.on_agent_start(profile.role);

        let prompt = PromptTemplate::activity_suggestion(mood.as_str());
        match ask_once(
            self.gateway.as_ref(),
            profile,
            &prompt,
            self.conversation_logger.as_ref(),
        )
        .await
        {
            Ok(suggestion) => {
                progress.on_agent_complete(profile.role, true);
                suggestion
            }
            Err(e) => {
                warn!("Activity suggestion failed: {}", e);
                self.conversation_logger
                    .log(ConversationEvent::flow_error(profile, &e.to_string()));
                progress.on_agent_complete(profile.role, false);
                Self::fallback_message(&e)
            }
        }
    }
}
