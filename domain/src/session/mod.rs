//! Model session domain.
//!
//! - [`response::LlmResponse`]: one structured reply from the model
//! - [`response::ContentBlock`]: text or a function-call request within a reply

pub mod response;
