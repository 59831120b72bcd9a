//! Configuration file loading for handoff
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `HANDOFF_*` environment variables (`__` separates nested keys)
//! 2. `--config <path>` specified file
//! 3. Project root: `./handoff.toml` or `./.handoff.toml`
//! 4. Global: `$XDG_CONFIG_HOME/handoff/config.toml` (or the platform equivalent)
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL, FileAgentConfig, FileConfig, FileFlowConfig,
    FileFlowsConfig, FileGeminiConfig, FileLoggingConfig, FileReplConfig,
};
pub use loader::ConfigLoader;
