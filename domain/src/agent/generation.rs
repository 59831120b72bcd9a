//! Sampling parameters sent with every request of an agent.

use serde::{Deserialize, Serialize};

/// Generation parameters for one agent.
///
/// Every field is optional; unset fields are left out of the request so the
/// service applies its own defaults.
///
/// # Example
///
/// ```
/// use handoff_domain::agent::GenerationConfig;
///
/// let config = GenerationConfig::product_advisor();
/// assert_eq!(config.temperature, Some(0.7));
/// assert_eq!(config.top_k, Some(64));
///
/// assert!(GenerationConfig::default().is_empty());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

impl GenerationConfig {
    /// Low temperature for factual answers
    pub fn country_info() -> Self {
        Self::default().with_temperature(0.2)
    }

    pub fn product_advisor() -> Self {
        Self::default()
            .with_temperature(0.7)
            .with_top_p(0.95)
            .with_top_k(64)
            .with_max_output_tokens(512)
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }

    pub fn with_top_k(mut self, top_k: u32) -> Self {
        self.top_k = Some(top_k);
        self
    }

    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = Some(max_output_tokens);
        self
    }

    /// Fields set in `overrides` replace those in `self`
    pub fn merged(self, overrides: GenerationConfig) -> Self {
        Self {
            temperature: overrides.temperature.or(self.temperature),
            top_p: overrides.top_p.or(self.top_p),
            top_k: overrides.top_k.or(self.top_k),
            max_output_tokens: overrides.max_output_tokens.or(self.max_output_tokens),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
