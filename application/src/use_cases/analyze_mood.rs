//! Analyze mood use case (agent 1 of the mood flow).

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::FlowProgressNotifier;
use crate::use_cases::shared::ask_once;
use handoff_domain::{AgentProfile, MoodAssessment, MoodOrigin, PromptTemplate};
use std::sync::Arc;
use tracing::{debug, warn};

/// Classifies a message into one [`MoodLabel`](handoff_domain::MoodLabel).
///
/// Never fails: unexpected replies are coerced to `neutral` and a gateway
/// failure yields `neutral` as well. The [`MoodOrigin`] of the result tells
/// the three cases apart.
pub struct AnalyzeMoodUseCase {
    gateway: Arc<dyn LlmGateway>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl AnalyzeMoodUseCase {
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

    pub async fn execute(
        &self,
        message: &str,
        profile: &AgentProfile,
        progress: &dyn FlowProgressNotifier,
    ) -> MoodAssessment {
        progress.on_agent_start(profile.role);

        let prompt = PromptTemplate::mood_analysis(message);
        let assessment = match ask_once(
            self.gateway.as_ref(),
            profile,
            &prompt,
            self.conversation_logger.as_ref(),
        )
        .await
        {
            Ok(raw) => MoodAssessment::from_raw(&raw),
            Err(e) => {
                warn!("Mood analysis failed, defaulting to neutral: {}", e);
                self.conversation_logger
                    .log(ConversationEvent::flow_error(profile, &e.to_string()));
                MoodAssessment::from_failure(e.to_string())
            }
        };

        if let MoodOrigin::Coerced { raw } = &assessment.origin {
            debug!("Mood reply {:?} is not a known label, using neutral", raw);
        }

        let reached_model = !matches!(assessment.origin, MoodOrigin::Failed { .. });
        progress.on_agent_complete(profile.role, reached_model);
        self.conversation_logger
            .log(ConversationEvent::mood_detected(&assessment));
        assessment
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::llm_gateway::GatewayError;
    use crate::ports::progress::NoProgress;
    use crate::use_cases::test_support::{RecordingLogger, ScriptedGateway};
    use handoff_domain::{AgentProfiles, MoodLabel};

    async fn analyze(gateway: Arc<ScriptedGateway>, message: &str) -> MoodAssessment {
        AnalyzeMoodUseCase::new(gateway)
            .execute(message, &AgentProfiles::default().mood, &NoProgress)
            .await
    }

    #[tokio::test]
    async fn test_reply_is_normalized() {
        let gateway = Arc::new(ScriptedGateway::texts(&["Stressed\n"]));
        let assessment = analyze(gateway.clone(), "I am so stressed").await;

        assert_eq!(assessment.label, MoodLabel::Stressed);
        assert!(assessment.is_recognized());
        assert!(gateway.prompts()[0].contains("Message: \"I am so stressed\""));
    }

    #[tokio::test]
    async fn test_unexpected_reply_is_coerced() {
        let gateway = Arc::new(ScriptedGateway::texts(&["The user seems melancholic."]));
        let assessment = analyze(gateway, "meh").await;

        assert_eq!(assessment.label, MoodLabel::Neutral);
        assert_eq!(
            assessment.origin,
            MoodOrigin::Coerced {
                raw: "The user seems melancholic.".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_failure_is_silent_neutral() {
        let gateway = Arc::new(ScriptedGateway::new(vec![Err(GatewayError::Timeout)]));
        let logger = Arc::new(RecordingLogger::default());
        let assessment = AnalyzeMoodUseCase::new(gateway)
            .with_conversation_logger(logger.clone())
            .execute("hello", &AgentProfiles::default().mood, &NoProgress)
            .await;

        assert_eq!(assessment.label, MoodLabel::Neutral);
        assert_eq!(
            assessment.origin,
            MoodOrigin::Failed {
                error: "Timeout".to_string()
            }
        );
        assert_eq!(logger.event_types(), vec!["prompt", "flow_error", "mood_detected"]);
    }
}
