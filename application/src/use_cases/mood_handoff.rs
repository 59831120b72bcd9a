//! Mood handoff use case.
//!
//! ```text
//! message ──▶ AnalyzeMood ──▶ label ──needs_support?──yes──▶ SuggestActivity ──▶ Suggested
//!                                                  └──no───▶ NotNeeded
//! ```
//!
//! Each agent runs at most once per message. Neither step can fail upward,
//! so the whole flow always produces a [`HandoffOutcome`].

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::FlowProgressNotifier;
use crate::use_cases::analyze_mood::AnalyzeMoodUseCase;
use crate::use_cases::suggest_activity::SuggestActivityUseCase;
use handoff_domain::{ActivitySuggestion, AgentProfile, HandoffOutcome, one_line_preview};
use std::sync::Arc;
use tracing::info;

/// Input for the [`MoodHandoffUseCase`].
#[derive(Debug, Clone)]
pub struct MoodHandoffInput {
    pub message: String,
    /// Profile of agent 1
    pub analyzer: AgentProfile,
    /// Profile of agent 2
    pub suggester: AgentProfile,
}

impl MoodHandoffInput {
    pub fn new(message: impl Into<String>, analyzer: AgentProfile, suggester: AgentProfile) -> Self {
        Self {
            message: message.into(),
            analyzer,
            suggester,
        }
    }
}

pub struct MoodHandoffUseCase {
    analyze: AnalyzeMoodUseCase,
    suggest: SuggestActivityUseCase,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl MoodHandoffUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        Self {
            analyze: AnalyzeMoodUseCase::new(gateway.clone()),
            suggest: SuggestActivityUseCase::new(gateway),
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_conversation_logger(self, logger: Arc<dyn ConversationLogger>) -> Self {
        Self {
            analyze: self.analyze.with_conversation_logger(logger.clone()),
            suggest: self.suggest.with_conversation_logger(logger.clone()),
            conversation_logger: logger,
        }
    }

    pub async fn execute(
        &self,
        input: MoodHandoffInput,
        progress: &dyn FlowProgressNotifier,
    ) -> HandoffOutcome {
        info!("Mood handoff request: {}", one_line_preview(&input.message, 60));
        progress.on_mood_message(&input.message);

        let assessment = self
            .analyze
            .execute(&input.message, &input.analyzer, progress)
            .await;
        progress.on_mood_detected(&assessment);

        let mood = assessment.label;
        let handed_off = mood.needs_support();
        self.conversation_logger
            .log(ConversationEvent::handoff(&assessment, handed_off));

        let suggestion = if handed_off {
            progress.on_handoff(mood);
            let text = self.suggest.execute(mood, &input.suggester, progress).await;
            ActivitySuggestion::Suggested(text)
        } else {
            progress.on_no_handoff(mood);
            ActivitySuggestion::NotNeeded
        };

        info!("Mood handoff done: mood={}, handed_off={}", mood, handed_off);
        HandoffOutcome {
            assessment,
            suggestion,
        }
    }
}
