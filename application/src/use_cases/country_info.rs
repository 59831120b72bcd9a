//! Country info use case.
//!
//! Asks the country agent about one country. The agent is offered the three
//! lookup functions and may call them any number of times; each call is run
//! locally and its result is sent back until the model answers in text or
//! the turn limit is reached.

use crate::config::ExecutionParams;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::{FunctionResultMessage, GatewayError, LlmGateway};
use crate::ports::progress::FlowProgressNotifier;
use crate::ports::tool_executor::ToolExecutorPort;
use crate::ports::tool_schema::ToolSchemaPort;
use handoff_domain::{AgentProfile, CountryReport, CountryTable, PromptTemplate, one_line_preview};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while asking the country agent.
///
/// The display text is what the operator sees after `Error:` in the fallback.
#[derive(Error, Debug)]
pub enum CountryInfoError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error("No response from model")]
    EmptyResponse,
}

/// Input for the [`CountryInfoUseCase`].
#[derive(Debug, Clone)]
pub struct CountryInfoInput {
    /// Country name exactly as the operator typed it
    pub country: String,
    pub profile: AgentProfile,
    /// `max_tool_turns` bounds the function-call loop
    pub execution: ExecutionParams,
}

impl CountryInfoInput {
    pub fn new(country: impl Into<String>, profile: AgentProfile, execution: ExecutionParams) -> Self {
        Self {
            country: country.into(),
            profile,
            execution,
        }
    }
}

/// Use case for the country info bot.
///
/// 1. Open a session for the country agent
/// 2. Send the prompt with the lookup function declarations
/// 3. Run requested functions sequentially and send the results back
/// 4. Return the last text the model produced
pub struct CountryInfoUseCase {
    gateway: Arc<dyn LlmGateway>,
    tool_executor: Arc<dyn ToolExecutorPort>,
    tool_schema: Arc<dyn ToolSchemaPort>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl CountryInfoUseCase {
    pub fn new(
        gateway: Arc<dyn LlmGateway>,
        tool_executor: Arc<dyn ToolExecutorPort>,
        tool_schema: Arc<dyn ToolSchemaPort>,
    ) -> Self {
        Self {
            gateway,
            tool_executor,
            tool_schema,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Text shown when the agent could not answer
    pub fn fallback_message(country: &str, error: &CountryInfoError) -> String {
        format!("Could not retrieve information for {}. Error: {}", country, error)
    }

    /// Answer from the local table only, without contacting the model
    pub fn offline_report(country: &str) -> CountryReport {
        CountryTable::report(country)
    }

    /// Run the flow; failures become the fallback message.
    pub async fn execute(&self, input: CountryInfoInput, progress: &dyn FlowProgressNotifier) -> String {
        progress.on_country_lookup(&input.country);
        progress.on_agent_start(input.profile.role);

        match self.run(&input, progress).await {
            Ok(answer) => {
                progress.on_agent_complete(input.profile.role, true);
                answer
            }
            Err(e) => {
                warn!("Country agent failed for {}: {}", input.country, e);
                self.conversation_logger
                    .log(ConversationEvent::flow_error(&input.profile, &e.to_string()));
                progress.on_agent_complete(input.profile.role, false);
                Self::fallback_message(&input.country, &e)
            }
        }
    }

    /// Run the flow, returning errors to the caller.
    pub async fn run(
        &self,
        input: &CountryInfoInput,
        progress: &dyn FlowProgressNotifier,
    ) -> Result<String, CountryInfoError> {
        info!("Country info request: {}", one_line_preview(&input.country, 60));

        let session = self.gateway.create_session(&input.profile).await?;
        let tools = self
            .tool_schema
            .all_tools_schema(self.tool_executor.tool_spec());

        debug!(
            "Country agent: model {}, {} functions declared",
            input.profile.model,
            tools.len()
        );

        let prompt = PromptTemplate::country_info(&input.country);
        self.conversation_logger
            .log(ConversationEvent::prompt(&input.profile, &prompt));

        let mut response = session.send_with_tools(&prompt, &tools).await?;
        let mut answer = response.text_content();

        let max_turns = input.execution.max_tool_turns;
        let mut turn_count = 0;

        loop {
            let tool_calls = response.tool_calls();
            if tool_calls.is_empty() {
                break;
            }

            turn_count += 1;
            if turn_count > max_turns {
                warn!("Country tool loop exceeded max_tool_turns ({})", max_turns);
                break;
            }

            let mut messages = Vec::with_capacity(tool_calls.len());
            for call in &tool_calls {
                progress.on_tool_call(call, turn_count);
                self.conversation_logger
                    .log(ConversationEvent::tool_call(call, turn_count));

                let result = self.tool_executor.execute(call).await;

                progress.on_tool_result(&result);
                self.conversation_logger
                    .log(ConversationEvent::tool_result(&result));

                let is_error = !result.is_success();
                let output = match result.error() {
                    Some(error) => error.message.clone(),
                    None => result.output().unwrap_or_default().to_string(),
                };
                messages.push(FunctionResultMessage {
                    name: call.tool_name.clone(),
                    output,
                    is_error,
                });
            }

            debug!(
                "Country tool turn {}/{}: sending {} function results",
                turn_count,
                max_turns,
                messages.len()
            );

            response = session.send_function_results(&messages).await?;
            let text = response.text_content();
            if !text.is_empty() {
                answer = text;
            }
        }

        if answer.is_empty() {
            return Err(CountryInfoError::EmptyResponse);
        }

        info!("Country info completed in {} tool turns", turn_count);
        self.conversation_logger
            .log(ConversationEvent::llm_response(&input.profile, &answer));

        Ok(answer)
    }
}
