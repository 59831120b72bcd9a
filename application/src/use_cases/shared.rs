//! Shared helpers for the single-turn use cases.

use crate::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use handoff_domain::AgentProfile;
use tracing::debug;

/// Open a fresh session for `profile`, send one prompt, return the reply text.
///
/// The prompt and reply are written to the transcript.
pub(crate) async fn ask_once(
    gateway: &dyn LlmGateway,
    profile: &AgentProfile,
    prompt: &str,
    logger: &dyn ConversationLogger,
) -> Result<String, GatewayError> {
    let session = gateway.create_session(profile).await?;
    logger.log(ConversationEvent::prompt(profile, prompt));

    debug!("{}: sending {} bytes to {}", profile.role, prompt.len(), profile.model);
    let reply = session.send(prompt).await?;

    logger.log(ConversationEvent::llm_response(profile, &reply));
    Ok(reply)
}
