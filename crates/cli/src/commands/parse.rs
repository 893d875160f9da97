//! Show how the word parser sees a message.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chatbot::{ParseResult, WordParser};
use clap::Parser;
use console::style;

use super::load_parser_config;
use crate::config::CliConfig;

/// Show how a message is tokenized
#[derive(Parser)]
pub struct ParseText {
    /// Message to parse
    #[arg(value_name = "TEXT")]
    text: String,

    /// Parser configuration file, TOML (overrides GHOST_PARSER_CONFIG)
    #[arg(short, long, value_name = "FILE")]
    parser_config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Tokens, n-grams and terms, one list per line
    Summary,
    /// Full JSON output
    Json,
}

impl ParseText {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let parser_config =
            load_parser_config(self.parser_config.as_deref(), config.parser_config_path.as_ref())?;
        let result = WordParser::new(parser_config).parse(&self.text);

        match self.format {
            OutputFormat::Summary => display_summary(&result),
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&result)
                    .context("Failed to serialize parse result")?;
                println!("{json}");
            }
        }

        Ok(())
    }
}

fn display_summary(result: &ParseResult) {
    println!("{} {:?}", style("original:").bold(), result.original);
    if result.is_empty() {
        println!("{}", style("no terms").yellow());
        return;
    }
    println!("{} {}", style("tokens:").bold(), result.tokens.join(" | "));
    println!("{} {}", style("ngrams:").bold(), result.ngrams.join(" | "));
    println!(
        "{} {}",
        style(format!("terms ({}):", result.all_terms.len())).bold(),
        result.all_terms.join(" | ")
    );
}
