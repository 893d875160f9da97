//! Command implementations for the `ghost` binary
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod chat;
mod parse;
mod simulate;

pub use chat::Chat;
pub use parse::ParseText;
pub use simulate::Simulate;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chatbot::{ChatDatabase, ParserConfig};

/// Flag value first, then environment, then the bundled site data.
fn load_database(flag: Option<&Path>, env: Option<&PathBuf>) -> Result<ChatDatabase> {
    match flag.or(env.map(PathBuf::as_path)) {
        Some(path) => ChatDatabase::load(path)
            .with_context(|| format!("Failed to load chat rules from {}", path.display())),
        None => ChatDatabase::site().context("Bundled site rules are invalid"),
    }
}

fn load_parser_config(flag: Option<&Path>, env: Option<&PathBuf>) -> Result<ParserConfig> {
    match flag.or(env.map(PathBuf::as_path)) {
        Some(path) => ParserConfig::load(path)
            .with_context(|| format!("Failed to load parser config from {}", path.display())),
        None => Ok(ParserConfig::site()),
    }
}
