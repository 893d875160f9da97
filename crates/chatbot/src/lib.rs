//! Rule-based chatbot for the lodge booking site.
//!
//! Messages are normalized, tokenized, stripped of stopwords, folded onto
//! canonical terms (synonyms plus a tiny stemmer) and expanded into n-gram
//! phrases. The highest-priority [`ChatRule`] with a keyword among those
//! terms answers; otherwise the first keyword-less rule does.
//!
//! - [`WordParser`]: text to [`ParseResult`]
//! - [`ChatDatabase`]: ordered rules, loadable from RON or TOML
//! - [`RuleMatcher`]: rule selection, random response, rule chaining
//! - [`ChatBot`]: parser and matcher behind one call

pub mod bot;
pub mod config;
pub mod error;
pub mod matcher;
pub mod parser;
pub mod rule;

pub use bot::ChatBot;
pub use config::{DEFAULT_STOPWORDS, ParserConfig, site_synonyms};
pub use error::{ChatError, Result};
pub use matcher::{FALLBACK_RESPONSE, Reply, RuleMatcher};
pub use parser::{ParseResult, WordParser};
pub use rule::{ChatDatabase, ChatRule, SITE_RULES_RON};
