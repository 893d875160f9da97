//! Rule selection and response picking.

use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::parser::ParseResult;
use crate::rule::{ChatDatabase, ChatRule};

/// Reply used when the selected rule has no responses, or no rule applies.
pub const FALLBACK_RESPONSE: &str = "If you're seeing this one of the devs messed up";

/// Outcome of answering one message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reply {
    /// Rule that matched the message, if any.
    pub rule_id: Option<String>,
    /// The matched rule's response followed by one per chained rule.
    pub messages: Vec<String>,
}

impl Reply {
    /// The first message, i.e. the matched rule's own response.
    pub fn text(&self) -> &str {
        self.messages.first().map_or(FALLBACK_RESPONSE, String::as_str)
    }
}

pub struct RuleMatcher {
    database: ChatDatabase,
    rng: StdRng,
}

impl RuleMatcher {
    pub fn new(database: ChatDatabase) -> Self {
        Self {
            database,
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic response picking, for tests and replays.
    pub fn with_seed(database: ChatDatabase, seed: u64) -> Self {
        Self {
            database,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn database(&self) -> &ChatDatabase {
        &self.database
    }

    pub fn find_best_match(&self, parse: &ParseResult) -> Option<&ChatRule> {
        self.database.find_best_match(parse)
    }

    /// One random response of `rule`, or [`FALLBACK_RESPONSE`].
    pub fn get_response(&mut self, rule: Option<&ChatRule>) -> String {
        pick_response(rule, &mut self.rng)
    }

    /// Matches `parse`, then follows the rule's `next_rule_id` chain, adding
    /// one response per rule. Each rule is visited at most once.
    pub fn reply(&mut self, parse: &ParseResult) -> Reply {
        let rule = self.database.find_best_match(parse);
        match rule {
            Some(rule) => {
                tracing::debug!(rule = %rule.id, priority = rule.priority, "matched rule")
            }
            None => tracing::debug!(input = %parse.original, "no rule matched"),
        }

        let mut messages = vec![pick_response(rule, &mut self.rng)];
        let mut visited: HashSet<&str> = rule.iter().map(|r| r.id.as_str()).collect();

        let mut current = rule;
        while let Some(next_id) = current.and_then(ChatRule::next) {
            if !visited.insert(next_id) {
                tracing::warn!(rule = next_id, "rule chain loops, stopping");
                break;
            }
            let Some(next) = self.database.find_by_id(next_id) else {
                tracing::warn!(rule = next_id, "chained rule not found");
                break;
            };
            messages.push(pick_response(Some(next), &mut self.rng));
            current = Some(next);
        }

        Reply {
            rule_id: rule.map(|r| r.id.clone()),
            messages,
        }
    }
}

fn pick_response(rule: Option<&ChatRule>, rng: &mut StdRng) -> String {
    match rule.and_then(|rule| rule.random_response(rng)) {
        Some(response) => response.to_string(),
        None => {
            tracing::error!(rule = ?rule.map(|r| &r.id), "chatbot error, no response found");
            FALLBACK_RESPONSE.to_string()
        }
    }
}
