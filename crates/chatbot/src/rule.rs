//! Chat rules and the rule database.

use std::collections::HashSet;
use std::path::Path;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::error::{ChatError, Result, read_file};
use crate::parser::ParseResult;

/// Rule set shipped with the booking site bot.
pub const SITE_RULES_RON: &str = include_str!("../data/site_rules.ron");

/// A keyword-triggered set of canned responses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRule {
    /// Unique id, also used for chaining.
    pub id: String,
    /// Trigger terms (lowercase, no punctuation). Empty marks the fallback rule.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Higher beats lower when several rules match.
    #[serde(default = "ChatRule::default_priority")]
    pub priority: i32,
    /// Candidate replies, one picked uniformly at random.
    #[serde(default)]
    pub responses: Vec<String>,
    /// Rule whose response follows this one's.
    #[serde(default)]
    pub next_rule_id: Option<String>,
}

impl ChatRule {
    pub const DEFAULT_PRIORITY: i32 = 1;

    fn default_priority() -> i32 {
        Self::DEFAULT_PRIORITY
    }

    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            keywords: Vec::new(),
            priority: Self::DEFAULT_PRIORITY,
            responses: Vec::new(),
            next_rule_id: None,
        }
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_responses<I, S>(mut self, responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.responses = responses.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_next(mut self, next_rule_id: impl Into<String>) -> Self {
        self.next_rule_id = Some(next_rule_id.into());
        self
    }

    /// Rules without keywords never match directly; they answer when
    /// nothing else does.
    pub fn is_fallback(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Returns `true` if any keyword appears among the parsed terms.
    pub fn matches(&self, parse: &ParseResult) -> bool {
        self.keywords.iter().any(|keyword| parse.contains_term(keyword))
    }

    /// Picks one response uniformly at random.
    pub fn random_response<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.responses.choose(rng).map(String::as_str)
    }

    /// The chained rule id, ignoring blank values.
    pub fn next(&self) -> Option<&str> {
        self.next_rule_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}

/// Ordered collection of rules. Order breaks priority ties.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatDatabase {
    #[serde(default)]
    pub rules: Vec<ChatRule>,
}

impl ChatDatabase {
    /// Builds a database, rejecting duplicate ids and dangling chains.
    pub fn new(rules: Vec<ChatRule>) -> Result<Self> {
        let database = Self { rules };
        database.validate()?;
        Ok(database)
    }

    /// The bundled booking site rules.
    pub fn site() -> Result<Self> {
        Self::from_ron_str(SITE_RULES_RON)
    }

    pub fn from_ron_str(content: &str) -> Result<Self> {
        let database: Self = ron::from_str(content)?;
        database.validate()?;
        Ok(database)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let database: Self = toml::from_str(content)?;
        database.validate()?;
        Ok(database)
    }

    /// Loads rules from a `.toml` file, or RON for any other extension.
    pub fn load(path: &Path) -> Result<Self> {
        let content = read_file(path)?;
        let database = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&content)?,
            _ => Self::from_ron_str(&content)?,
        };
        tracing::debug!(path = %path.display(), rules = database.rules.len(), "loaded chat rules");
        Ok(database)
    }

    pub fn validate(&self) -> Result<()> {
        let mut ids = HashSet::new();
        for rule in &self.rules {
            if !ids.insert(rule.id.as_str()) {
                return Err(ChatError::DuplicateRuleId(rule.id.clone()));
            }
        }

        for rule in &self.rules {
            if let Some(next) = rule.next()
                && !ids.contains(next)
            {
                return Err(ChatError::UnknownNextRule {
                    rule: rule.id.clone(),
                    next: next.to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn find_by_id(&self, id: &str) -> Option<&ChatRule> {
        self.rules.iter().find(|rule| rule.id == id)
    }

    /// First rule without keywords.
    pub fn fallback(&self) -> Option<&ChatRule> {
        self.rules.iter().find(|rule| rule.is_fallback())
    }

    /// Highest-priority rule with a keyword among the parsed terms, or the
    /// fallback rule when none matches. Ties go to the earlier rule.
    pub fn find_best_match(&self, parse: &ParseResult) -> Option<&ChatRule> {
        let mut best: Option<&ChatRule> = None;
        for rule in &self.rules {
            if rule.is_fallback() || !rule.matches(parse) {
                continue;
            }
            if best.is_none_or(|current| rule.priority > current.priority) {
                best = Some(rule);
            }
        }

        best.or_else(|| self.fallback())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
