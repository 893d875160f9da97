//! Talk to the chatbot from the terminal.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chatbot::{ChatBot, Reply};
use clap::Parser;
use console::style;

use super::{load_database, load_parser_config};
use crate::config::CliConfig;

/// Talk to the chatbot
#[derive(Parser)]
pub struct Chat {
    /// Send one message and exit instead of starting a session
    #[arg(short, long, value_name = "TEXT")]
    message: Option<String>,

    /// Chat rules file, RON or TOML (overrides GHOST_RULES)
    #[arg(short, long, value_name = "FILE")]
    rules: Option<PathBuf>,

    /// Parser configuration file, TOML (overrides GHOST_PARSER_CONFIG)
    #[arg(short, long, value_name = "FILE")]
    parser_config: Option<PathBuf>,

    /// Seed for response picking (overrides GHOST_SEED)
    #[arg(long)]
    seed: Option<u64>,

    /// Show which rule answered
    #[arg(short, long)]
    verbose: bool,
}

impl Chat {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let database = load_database(self.rules.as_deref(), config.rules_path.as_ref())?;
        let parser_config =
            load_parser_config(self.parser_config.as_deref(), config.parser_config_path.as_ref())?;

        tracing::info!("Loaded {} chat rules", database.len());

        let mut bot = match self.seed.or(config.seed) {
            Some(seed) => ChatBot::with_seed(database, parser_config, seed),
            None => ChatBot::new(database, parser_config),
        };

        if let Some(message) = &self.message {
            let reply = bot.respond(message);
            self.print_reply(&reply);
            return Ok(());
        }

        println!(
            "{} {}",
            style("ghost").magenta().bold(),
            style("(empty line or Ctrl-D to quit)").dim()
        );

        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();
        loop {
            print!("{} ", style(">").cyan().bold());
            io::stdout().flush().context("Failed to flush stdout")?;

            let Some(line) = lines.next() else {
                break;
            };
            let line = line.context("Failed to read from stdin")?;
            let message = line.trim();
            if message.is_empty() {
                break;
            }

            let reply = bot.respond(message);
            self.print_reply(&reply);
        }

        Ok(())
    }

    fn print_reply(&self, reply: &Reply) {
        if self.verbose {
            let rule = reply.rule_id.as_deref().unwrap_or("<none>");
            println!("{}", style(format!("[{rule}]")).dim());
        }
        for message in &reply.messages {
            println!("{} {}", style("ghost:").magenta(), message);
        }
    }
}
