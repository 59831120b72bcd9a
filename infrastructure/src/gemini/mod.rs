//! Gemini REST adapter
//!
//! ```text
//! GeminiLlmGateway ──create_session(profile)──▶ GeminiSession
//!                                                 │ history: Vec<Content>
//!                                                 ▼
//!                      POST {base_url}/models/{model}:generateContent (x-goog-api-key)
//! ```

mod credential;
mod error;
mod gateway;
mod protocol;
mod session;

pub use credential::ApiCredential;
pub use gateway::GeminiLlmGateway;
pub use session::GeminiSession;
