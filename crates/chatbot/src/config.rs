//! Parser configuration.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, read_file};

/// Tunables of [`WordParser`](crate::WordParser).
///
/// Loadable from TOML; every field is optional:
///
/// ```toml
/// max_ngram = 3
/// stemming = true
/// stopwords = ["the", "a"]   # omit to use the built-in list
///
/// [synonyms]
/// rooms = "room"
/// checkin = "check in"
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Replaces the built-in stopword list when set.
    pub stopwords: Option<Vec<String>>,
    /// Canonical spelling for known variants, applied before and after stemming.
    pub synonyms: HashMap<String, String>,
    /// Longest phrase length, clamped to `1..=MAX_NGRAM_LIMIT`.
    pub max_ngram: usize,
    pub stemming: bool,
}

impl ParserConfig {
    pub const DEFAULT_MAX_NGRAM: usize = 3;
    pub const MAX_NGRAM_LIMIT: usize = 5;

    /// Configuration used by the booking site bot: default stopwords plus
    /// the site vocabulary.
    pub fn site() -> Self {
        Self {
            synonyms: site_synonyms(),
            ..Self::default()
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        Self::from_toml_str(&read_file(path)?)
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            stopwords: None,
            synonyms: HashMap::new(),
            max_ngram: Self::DEFAULT_MAX_NGRAM,
            stemming: true,
        }
    }
}

/// Common filler words that carry no intent.
pub const DEFAULT_STOPWORDS: &[&str] = &[
    "the", "a", "an", "is", "are", "am", "i", "you", "we", "he", "she", "it", "they", "to", "of",
    "in", "on", "at", "for", "and", "or", "not", "do", "does", "did", "with", "please", "can",
    "could", "would", "should", "may", "might", "be", "been", "from", "this", "that", "these",
    "those", "my", "your", "our", "their",
];

/// Booking-site vocabulary folded onto canonical terms.
pub fn site_synonyms() -> HashMap<String, String> {
    [
        ("rooms", "room"),
        ("cabins", "cabin"),
        ("booked", "book"),
        ("booking", "book"),
        ("reservation", "book"),
        ("check-in", "check in"),
        ("checkin", "check in"),
        ("check-out", "check out"),
        ("checkout", "check out"),
        ("haunting", "haunt"),
        ("ghosts", "ghost"),
    ]
    .into_iter()
    .map(|(from, to)| (from.to_string(), to.to_string()))
    .collect()
}
