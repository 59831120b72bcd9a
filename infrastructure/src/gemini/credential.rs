//! API credential resolution

use crate::config::FileGeminiConfig;
use tracing::warn;

/// The Gemini API key, resolved once at startup.
///
/// The key is never printed; `Debug` shows a redacted placeholder.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiCredential(String);

impl ApiCredential {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Resolve from configuration: a non-empty `api_key` wins, then the
    /// environment variable named by `api_key_env`.
    ///
    /// A missing key is not an error here. The empty key is sent as-is and
    /// the service rejects it.
    pub fn resolve(config: &FileGeminiConfig) -> Self {
        Self::resolve_with(config, |name| std::env::var(name).ok())
    }

    fn resolve_with(config: &FileGeminiConfig, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(key) = config.api_key.as_deref().map(str::trim)
            && !key.is_empty()
        {
            return Self::new(key);
        }

        match lookup(&config.api_key_env).map(|k| k.trim().to_string()) {
            Some(key) if !key.is_empty() => Self(key),
            _ => {
                warn!(
                    "No API key found (set {} or gemini.api_key); remote calls will fail",
                    config.api_key_env
                );
                Self(String::new())
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The raw key, for the request header only
    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            f.write_str("ApiCredential(<empty>)")
        } else {
            f.write_str("ApiCredential(***)")
        }
    }
}
