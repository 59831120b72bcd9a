//! CLI command definitions

use crate::repl::Flow;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for handoff
#[derive(Parser, Debug)]
#[command(name = "handoff")]
#[command(author, version, about = "Single-turn Gemini agents with lookup tools and a mood handoff")]
#[command(long_about = r#"
handoff runs small interactive agents on Google Gemini:

  country   Country info bot; the model may call capital/language/population lookups
  mood      Mood analyzer; a sad or stressed mood is handed off to an activity suggester
  product   Smart store agent suggesting a product for a need
  lookup    Offline fact sheet from the built-in country table (no model call)

Each agent command starts an interactive loop when no input is given.
Type 'exit' to leave the loop.

Configuration files are loaded from (in priority order):
1. HANDOFF_* environment variables
2. --config <path>     Explicit config file
3. ./handoff.toml      Project-level config
4. ~/.config/handoff/config.toml   Global config

The API key is read from GOOGLE_API_KEY (a .env file in the working
directory is honoured).

Example:
  handoff country
  handoff country Japan
  handoff mood "I am so stressed about my exams"
  handoff -m gemini-2.0-flash product "something for a headache"
  handoff lookup France
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Override the model for every agent
    #[arg(short, long, global = true, value_name = "MODEL")]
    pub model: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress messages
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long, global = true)]
    pub show_config: bool,

    /// Write a JSONL transcript of prompts and responses
    #[arg(long, global = true, value_name = "PATH")]
    pub transcript: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Country info bot (interactive when COUNTRY is omitted)
    Country {
        /// Country to ask about
        country: Option<String>,
    },

    /// Mood analyzer with handoff (interactive when MESSAGE is omitted)
    Mood {
        /// How you are feeling
        message: Option<String>,
    },

    /// Smart store agent (interactive when NEED is omitted)
    Product {
        /// What you need
        need: Option<String>,
    },

    /// Print the offline fact sheet for a country (no model call)
    Lookup {
        country: String,
    },
}

impl Command {
    /// The agent flow and its one-shot input; `None` for `lookup`
    pub fn flow(&self) -> Option<(Flow, Option<&str>)> {
        match self {
            Command::Country { country } => Some((Flow::Country, country.as_deref())),
            Command::Mood { message } => Some((Flow::Mood, message.as_deref())),
            Command::Product { need } => Some((Flow::Product, need.as_deref())),
            Command::Lookup { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_interactive_country() {
        let cli = Cli::try_parse_from(["handoff", "country"]).unwrap();
        assert_eq!(cli.command, Some(Command::Country { country: None }));
        assert_eq!(cli.command.unwrap().flow(), Some((Flow::Country, None)));
    }

    #[test]
    fn test_parse_one_shot_with_global_flags() {
        let cli = Cli::try_parse_from([
            "handoff",
            "mood",
            "I am so stressed",
            "-vv",
            "--quiet",
            "--model",
            "gemini-2.0-flash",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.quiet);
        assert_eq!(cli.model.as_deref(), Some("gemini-2.0-flash"));
        assert_eq!(
            cli.command.unwrap().flow(),
            Some((Flow::Mood, Some("I am so stressed")))
        );
    }

    #[test]
    fn test_lookup_requires_country() {
        assert!(Cli::try_parse_from(["handoff", "lookup"]).is_err());
        let cli = Cli::try_parse_from(["handoff", "lookup", "France"]).unwrap();
        let command = cli.command.unwrap();
        assert_eq!(command.flow(), None);
        assert_eq!(
            command,
            Command::Lookup {
                country: "France".to_string()
            }
        );
    }

    #[test]
    fn test_show_config_without_command() {
        let cli = Cli::try_parse_from(["handoff", "--show-config", "--no-config"]).unwrap();
        assert!(cli.show_config);
        assert!(cli.no_config);
        assert!(cli.command.is_none());
    }
}
