//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// These only arise when parsing names that must belong to a closed set
/// (mood labels, lookup functions, flows). Normalization paths never error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown mood label: {0}")]
    UnknownMood(String),

    #[error("Unknown lookup function: {0}")]
    UnknownFunction(String),

    #[error("Unknown flow: {0}")]
    UnknownFlow(String),

    #[error("Missing argument '{argument}' for {function}")]
    MissingArgument { function: String, argument: String },
}

impl DomainError {
    /// Whether the error refers to a name outside a closed set
    pub fn is_unknown_name(&self) -> bool {
        matches!(
            self,
            DomainError::UnknownMood(_)
                | DomainError::UnknownFunction(_)
                | DomainError::UnknownFlow(_)
        )
    }
}
