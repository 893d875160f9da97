//! Free text to canonical terms.
//!
//! Pipeline: normalize -> tokenize -> drop short words and stopwords ->
//! canonicalize (synonym, stem, synonym) -> n-grams.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use unicode_normalization::UnicodeNormalization;
use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

use crate::config::{DEFAULT_STOPWORDS, ParserConfig};

static SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9']+").expect("token separator pattern is valid"));

/// Canonical terms extracted from one message.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ParseResult {
    pub original: String,
    /// Canonical single-word terms, in message order.
    pub tokens: Vec<String>,
    /// Canonical multi-word phrases, longest first.
    pub ngrams: Vec<String>,
    /// N-grams then tokens, de-duplicated keeping the first occurrence.
    pub all_terms: Vec<String>,
}

impl ParseResult {
    pub fn contains_term(&self, term: &str) -> bool {
        self.all_terms.iter().any(|t| t == term)
    }

    pub fn is_empty(&self) -> bool {
        self.all_terms.is_empty()
    }
}

#[derive(Clone, Debug)]
pub struct WordParser {
    stopwords: HashSet<String>,
    synonyms: HashMap<String, String>,
    max_ngram: usize,
    stemming: bool,
}

impl WordParser {
    pub fn new(config: ParserConfig) -> Self {
        let stopwords = match config.stopwords {
            Some(words) => words.into_iter().collect(),
            None => DEFAULT_STOPWORDS.iter().map(|w| w.to_string()).collect(),
        };

        Self {
            stopwords,
            synonyms: config.synonyms,
            max_ngram: config.max_ngram.clamp(1, ParserConfig::MAX_NGRAM_LIMIT),
            stemming: config.stemming,
        }
    }

    pub fn parse(&self, input: &str) -> ParseResult {
        if input.trim().is_empty() {
            return ParseResult {
                original: input.to_string(),
                ..ParseResult::default()
            };
        }

        let normalized = normalize(input);

        let tokens: Vec<String> = SPLIT
            .split(&normalized)
            .filter(|raw| raw.chars().count() >= 2 && !self.stopwords.contains(*raw))
            .map(|raw| self.canonicalize(raw))
            .filter(|token| !token.is_empty())
            .collect();

        let ngrams = build_ngrams(&tokens, self.max_ngram);

        let mut seen = HashSet::new();
        let all_terms = ngrams
            .iter()
            .chain(&tokens)
            .filter(|term| seen.insert(term.as_str()))
            .cloned()
            .collect();

        ParseResult {
            original: input.to_string(),
            tokens,
            ngrams,
            all_terms,
        }
    }

    fn canonicalize(&self, token: &str) -> String {
        let mut token = self.synonym(token).to_string();

        if self.stemming {
            token = tiny_stem(&token).to_string();
        }

        // Second pass catches stems with a synonym ("booked" -> "book").
        self.synonym(&token).to_string()
    }

    fn synonym<'a>(&'a self, token: &'a str) -> &'a str {
        self.synonyms.get(token).map_or(token, String::as_str)
    }
}

impl Default for WordParser {
    fn default() -> Self {
        Self::new(ParserConfig::default())
    }
}

/// Lowercases, trims, turns `_`/`-` into spaces, strips nonspacing marks and
/// folds typographic quotes.
fn normalize(input: &str) -> String {
    let lowered = input.to_lowercase().trim().replace(['_', '-'], " ");

    lowered
        .nfd()
        .filter(|c| c.general_category() != GeneralCategory::NonspacingMark)
        .nfc()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{201C}' | '\u{201D}' => '"',
            other => other,
        })
        .collect()
}

/// Strips common English endings ("booking" -> "book").
fn tiny_stem(token: &str) -> &str {
    let len = token.chars().count();
    if len > 5
        && let Some(stem) = token.strip_suffix("ing")
    {
        return stem;
    }
    if len > 4
        && let Some(stem) = token.strip_suffix("ed").or_else(|| token.strip_suffix("es"))
    {
        return stem;
    }
    if len > 3 && !token.ends_with("ss")
        && let Some(stem) = token.strip_suffix('s')
    {
        return stem;
    }
    token
}

/// All phrases of `max_n` down to 2 tokens, longest first.
fn build_ngrams(tokens: &[String], max_n: usize) -> Vec<String> {
    let n_max = max_n.min(tokens.len().max(1));
    (2..=n_max)
        .rev()
        .flat_map(|n| tokens.windows(n).map(|window| window.join(" ")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stemmer_rules() {
        assert_eq!(tiny_stem("booking"), "book");
        assert_eq!(tiny_stem("sing"), "sing");
        assert_eq!(tiny_stem("haunted"), "haunt");
        assert_eq!(tiny_stem("boxes"), "box");
        assert_eq!(tiny_stem("cabins"), "cabin");
        assert_eq!(tiny_stem("class"), "class");
        assert_eq!(tiny_stem("bus"), "bus");
    }

    #[test]
    fn normalize_strips_accents_and_separators() {
        assert_eq!(normalize("  Café_Check-In "), "cafe check in");
        assert_eq!(normalize("it\u{2019}s"), "it's");
    }

    #[test]
    fn spacing_marks_still_separate_words() {
        let parser = WordParser::default();
        let result = parser.parse("room\u{0903}cabin");
        assert_eq!(result.tokens, vec!["room", "cabin"]);
    }

    #[test]
    fn ngrams_longest_first() {
        let tokens: Vec<String> = ["late", "check", "out"].iter().map(|s| s.to_string()).collect();
        assert_eq!(
            build_ngrams(&tokens, 3),
            vec!["late check out", "late check", "check out"]
        );
        assert!(build_ngrams(&tokens, 1).is_empty());
    }

    #[test]
    fn blank_input_is_empty() {
        let result = WordParser::default().parse("   ");
        assert!(result.is_empty());
        assert_eq!(result.original, "   ");
    }

    #[test]
    fn drops_stopwords_and_single_letters() {
        let result = WordParser::default().parse("I want to book a cabin");
        assert_eq!(result.tokens, vec!["want", "book", "cabin"]);
        assert_eq!(
            result.all_terms,
            vec!["want book cabin", "want book", "book cabin", "want", "book", "cabin"]
        );
    }

    #[test]
    fn duplicate_terms_are_kept_once() {
        let result = WordParser::default().parse("ghost ghost ghost");
        assert_eq!(result.tokens.len(), 3);
        assert_eq!(result.all_terms, vec!["ghost ghost ghost", "ghost ghost", "ghost"]);
    }

    #[test]
    fn max_ngram_is_clamped() {
        let config = ParserConfig {
            max_ngram: 42,
            ..ParserConfig::default()
        };
        let parser = WordParser::new(config);
        assert_eq!(parser.max_ngram, ParserConfig::MAX_NGRAM_LIMIT);
    }
}
