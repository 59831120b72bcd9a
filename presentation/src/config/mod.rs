//! Presentation-level configuration

use std::path::PathBuf;

/// REPL configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Show progress messages and spinners
    pub show_progress: bool,
    /// Path to history file; `None` keeps history in memory only
    pub history_file: Option<PathBuf>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: Self::default_history_file(),
        }
    }
}

impl ReplConfig {
    /// `$XDG_DATA_HOME/handoff/history.txt` (or the platform equivalent)
    pub fn default_history_file() -> Option<PathBuf> {
        dirs::data_dir().map(|p| p.join("handoff").join("history.txt"))
    }
}
