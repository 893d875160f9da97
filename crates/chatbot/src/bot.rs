//! Parser plus matcher behind a single `respond` call.

use crate::config::ParserConfig;
use crate::matcher::{Reply, RuleMatcher};
use crate::parser::{ParseResult, WordParser};
use crate::rule::ChatDatabase;

/// A ready-to-use chatbot.
///
/// # Example
///
/// ```rust
/// use chatbot::{ChatBot, ChatDatabase, ParserConfig};
///
/// let mut bot = ChatBot::with_seed(ChatDatabase::site().unwrap(), ParserConfig::site(), 3);
/// let reply = bot.respond("Are the cabins haunted?");
/// assert_eq!(reply.rule_id.as_deref(), Some("ghost"));
/// ```
pub struct ChatBot {
    parser: WordParser,
    matcher: RuleMatcher,
}

impl ChatBot {
    pub fn new(database: ChatDatabase, config: ParserConfig) -> Self {
        Self {
            parser: WordParser::new(config),
            matcher: RuleMatcher::new(database),
        }
    }

    pub fn with_seed(database: ChatDatabase, config: ParserConfig, seed: u64) -> Self {
        Self {
            parser: WordParser::new(config),
            matcher: RuleMatcher::with_seed(database, seed),
        }
    }

    pub fn parse(&self, message: &str) -> ParseResult {
        self.parser.parse(message)
    }

    pub fn respond(&mut self, message: &str) -> Reply {
        let parse = self.parser.parse(message);
        self.matcher.reply(&parse)
    }

    pub fn database(&self) -> &ChatDatabase {
        self.matcher.database()
    }
}
