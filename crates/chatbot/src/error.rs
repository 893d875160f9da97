//! Errors raised while loading chatbot content.
//!
//! Matching itself never fails: a message with no matching rule gets the
//! fallback rule or the fallback response.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid RON content: {0}")]
    Ron(#[from] ron::error::SpannedError),

    #[error("invalid TOML content: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("rule id `{0}` is defined more than once")]
    DuplicateRuleId(String),

    #[error("rule `{rule}` chains to unknown rule `{next}`")]
    UnknownNextRule { rule: String, next: String },
}

pub type Result<T> = std::result::Result<T, ChatError>;

pub(crate) fn read_file(path: &std::path::Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| ChatError::Io {
        path: path.to_path_buf(),
        source,
    })
}
