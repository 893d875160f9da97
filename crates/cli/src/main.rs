//! Developer tools for the lodge chatbot and the ghost behavior trees.
//!
//! Run with: `cargo run -p ghost-cli -- <command>`

mod commands;
mod config;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use commands::{Chat, ParseText, Simulate};
use config::CliConfig;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Developer tools for the lodge chatbot and the ghost behavior trees
#[derive(Parser)]
#[command(name = "ghost")]
#[command(about = "Chatbot and behavior tree tools", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Talk to the chatbot (interactive, or one message with --message)
    Chat(Chat),

    /// Show how a message is tokenized
    Parse(ParseText),

    /// Tick the demo ghost behavior tree
    Simulate(Simulate),
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();
    setup_logging(config.log_dir.as_deref())?;

    let cli = Cli::parse();

    match cli.command {
        Command::Chat(cmd) => cmd.execute(&config),
        Command::Parse(cmd) => cmd.execute(&config),
        Command::Simulate(cmd) => cmd.execute(),
    }
}

/// Logs to stderr, and to `<log_dir>/ghost.log` when a directory is set.
fn setup_logging(log_dir: Option<&Path>) -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let file_layer = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let file_appender = tracing_appender::rolling::never(dir, "ghost.log");
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
            // Leak the guard to keep file writer alive
            std::mem::forget(guard);
            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(non_blocking_file)
                    .with_ansi(false),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    if let Some(dir) = log_dir {
        tracing::debug!("Log file: {}/ghost.log", dir.display());
    }

    Ok(())
}
