//! Dispatch of one operator input to the right use case

use super::flow::Flow;
use handoff_application::{
    ConversationLogger, CountryInfoInput, CountryInfoUseCase, ExecutionParams,
    FlowProgressNotifier, LlmGateway, MoodHandoffInput, MoodHandoffUseCase, SuggestProductUseCase,
    ToolExecutorPort, ToolSchemaPort,
};
use handoff_domain::{AgentProfiles, HandoffOutcome};
use std::sync::Arc;

/// What a flow produced for one input
#[derive(Debug, Clone, PartialEq)]
pub enum FlowAnswer {
    /// Model text or a fallback string
    Text(String),
    Handoff(HandoffOutcome),
}

/// Owns the use cases and the per-agent profiles for every flow
pub struct FlowRunner {
    country: CountryInfoUseCase,
    mood: MoodHandoffUseCase,
    product: SuggestProductUseCase,
    profiles: AgentProfiles,
    execution: ExecutionParams,
}

impl FlowRunner {
    pub fn new(
        gateway: Arc<dyn LlmGateway>,
        tool_executor: Arc<dyn ToolExecutorPort>,
        tool_schema: Arc<dyn ToolSchemaPort>,
        profiles: AgentProfiles,
        execution: ExecutionParams,
    ) -> Self {
        Self {
            country: CountryInfoUseCase::new(gateway.clone(), tool_executor, tool_schema),
            mood: MoodHandoffUseCase::new(gateway.clone()),
            product: SuggestProductUseCase::new(gateway),
            profiles,
            execution,
        }
    }

    pub fn with_conversation_logger(self, logger: Arc<dyn ConversationLogger>) -> Self {
        Self {
            country: self.country.with_conversation_logger(logger.clone()),
            mood: self.mood.with_conversation_logger(logger.clone()),
            product: self.product.with_conversation_logger(logger),
            ..self
        }
    }

    /// Run one input through `flow`. Never fails; remote errors are already
    /// folded into the answer text by the use cases.
    pub async fn answer(
        &self,
        flow: Flow,
        input: &str,
        progress: &dyn FlowProgressNotifier,
    ) -> FlowAnswer {
        match flow {
            Flow::Country => {
                let input = CountryInfoInput::new(
                    input,
                    self.profiles.country.clone(),
                    self.execution.clone(),
                );
                FlowAnswer::Text(self.country.execute(input, progress).await)
            }
            Flow::Mood => {
                let input = MoodHandoffInput::new(
                    input,
                    self.profiles.mood.clone(),
                    self.profiles.activity.clone(),
                );
                FlowAnswer::Handoff(self.mood.execute(input, progress).await)
            }
            Flow::Product => FlowAnswer::Text(
                self.product
                    .execute(input, &self.profiles.product, progress)
                    .await,
            ),
        }
    }
}
