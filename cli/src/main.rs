//! CLI entrypoint for handoff
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser};
use handoff_application::{CountryInfoUseCase, LlmGateway};
use handoff_domain::Model;
use handoff_infrastructure::{
    ApiCredential, ConfigLoader, FileConfig, GeminiLlmGateway, JsonSchemaToolConverter,
    JsonlConversationLogger, LookupToolExecutor,
};
use handoff_presentation::{
    Cli, Command, ConsoleFormatter, FlowRepl, FlowRunner, ReedlineSource, ReplConfig,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting handoff");

    if let Ok(path) = dotenvy::dotenv() {
        debug!("Loaded environment from {}", path.display());
    }

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    for issue in config.validate() {
        eprintln!("Warning: {}", issue);
    }

    let Some(command) = cli.command.clone() else {
        Cli::command().print_help()?;
        return Ok(());
    };

    // Offline path: no credential, no gateway
    if let Command::Lookup { country } = &command {
        print!(
            "{}",
            ConsoleFormatter::format_report(&CountryInfoUseCase::offline_report(country))
        );
        return Ok(());
    }

    let runner = build_runner(&cli, &config)?;
    let repl_config = ReplConfig {
        show_progress: config.repl.show_progress && !cli.quiet,
        history_file: config
            .repl
            .history_file
            .as_deref()
            .map(expand_home)
            .or_else(ReplConfig::default_history_file),
    };

    let Some((flow, input)) = command.flow() else {
        return Ok(());
    };
    let repl = FlowRepl::new(&runner, flow).with_config(&repl_config);
    let mut stdout = std::io::stdout();

    match input {
        Some(input) => repl.answer_one(input, &mut stdout).await?,
        None => {
            let mut source = ReedlineSource::new(repl_config.history_file.as_deref());
            let answered = repl.run(&mut source, &mut stdout).await?;
            info!("{} loop finished after {} inputs", flow, answered);
        }
    }

    Ok(())
}

/// Wire the Gemini gateway, lookup tools and transcript into a runner
fn build_runner(cli: &Cli, config: &FileConfig) -> Result<FlowRunner> {
    let (mut profiles, _) = config.agent_profiles();
    if let Some(model) = &cli.model {
        let model: Model = model.parse().unwrap_or_default();
        profiles = profiles.with_model_for_all(model);
    }

    let credential = ApiCredential::resolve(&config.gemini);
    let gateway: Arc<dyn LlmGateway> =
        Arc::new(GeminiLlmGateway::from_config(&config.gemini, credential)?);

    let mut runner = FlowRunner::new(
        gateway,
        Arc::new(LookupToolExecutor::new()),
        Arc::new(JsonSchemaToolConverter),
        profiles,
        config.agent.to_execution_params(),
    );

    let transcript = cli
        .transcript
        .clone()
        .or_else(|| config.logging.transcript.as_deref().map(expand_home));
    if let Some(path) = transcript {
        let logger = JsonlConversationLogger::open(&path)
            .with_context(|| format!("Failed to open transcript {}", path.display()))?;
        info!("Writing transcript to {}", path.display());
        runner = runner.with_conversation_logger(Arc::new(logger));
    }

    Ok(runner)
}

/// Expand a leading `~/` to the home directory
fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home("/tmp/h.txt"), PathBuf::from("/tmp/h.txt"));
        assert_eq!(expand_home("relative.jsonl"), PathBuf::from("relative.jsonl"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/x/history.txt"), home.join("x").join("history.txt"));
        }
    }
}
