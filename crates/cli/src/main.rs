//! InfoHub Assistant CLI
//!
//! Main entry point for the `infohub` command-line tool.
//! Answers Georgian tax and customs questions from infohub.rs.ge documents.

mod commands;

use clap::{Parser, Subcommand};
use commands::{AskCommand, ChatCommand, SearchCommand};
use infohub_core::{config::AppConfig, logging, AppResult};
use std::path::PathBuf;

/// InfoHub Assistant - tax and customs Q&A over infohub.rs.ge
#[derive(Parser, Debug)]
#[command(name = "infohub")]
#[command(about = "Tax and customs Q&A over infohub.rs.ge documents", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, env = "INFOHUB_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "RUST_LOG")]
    log_level: Option<String>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output (the NO_COLOR variable is read with the config)
    #[arg(long, global = true)]
    no_color: bool,

    /// Model identifier
    #[arg(short, long, global = true, env = "INFOHUB_MODEL")]
    model: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Answer a question from InfoHub documents
    Ask(AskCommand),

    /// Search and rank documents without calling the LLM
    Search(SearchCommand),

    /// Interactive question-answer session
    Chat(ChatCommand),
}

#[tokio::main]
async fn main() -> AppResult<()> {
    // Parse command-line arguments first (needed for logging config)
    let cli = Cli::parse();

    // Load configuration (.env, YAML file, environment)
    let config = AppConfig::load(cli.config.as_deref())?;

    // Apply CLI overrides
    let config = config.with_overrides(cli.model, cli.log_level, cli.verbose, cli.no_color);

    // Initialize logging with final configuration
    logging::init_logging(config.log_level.as_deref(), config.no_color)?;

    tracing::info!("InfoHub Assistant starting");
    tracing::debug!(config_file = ?config.config_file, "Configuration loaded");
    tracing::debug!(provider = %config.llm.provider, model = %config.llm.model, "LLM settings");

    let command_name = match &cli.command {
        Commands::Ask(_) => "ask",
        Commands::Search(_) => "search",
        Commands::Chat(_) => "chat",
    };
    let _span = tracing::info_span!("command", name = command_name).entered();

    // Route to command handlers
    let result = match cli.command {
        Commands::Ask(cmd) => cmd.execute(&config).await,
        Commands::Search(cmd) => cmd.execute(&config).await,
        Commands::Chat(cmd) => cmd.execute(&config).await,
    };

    match &result {
        Ok(_) => tracing::info!("Command completed successfully"),
        Err(e) => tracing::error!("Command failed: {}", e),
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_color_variable_does_not_break_parsing() {
        std::env::set_var("NO_COLOR", "1");
        let cli = Cli::try_parse_from(["infohub", "search", "დღგ"]);
        std::env::remove_var("NO_COLOR");

        let cli = cli.unwrap();
        assert!(!cli.no_color);
        assert!(matches!(cli.command, Commands::Search(_)));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["infohub", "ask", "რა არის დღგ?", "--no-color", "--json"])
                .unwrap();

        assert!(cli.no_color);
        match cli.command {
            Commands::Ask(cmd) => {
                assert_eq!(cmd.question, "რა არის დღგ?");
                assert!(cmd.json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_search_limits() {
        let cli = Cli::try_parse_from([
            "infohub",
            "search",
            "იმპორტი",
            "-k",
            "20",
            "--rerank-k",
            "3",
        ])
        .unwrap();

        match cli.command {
            Commands::Search(cmd) => {
                assert_eq!(cmd.top_k, Some(20));
                assert_eq!(cmd.rerank_k, Some(3));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
