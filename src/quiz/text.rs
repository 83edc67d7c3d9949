//! Lexical helpers shared by the question templates.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

/// Passages shorter than this (after trimming) never produce a quiz.
pub const MIN_TEXT_CHARS: usize = 100;
/// A passage needs at least this many sentences to produce a quiz.
pub const MIN_SENTENCES: usize = 5;
/// Shortest cleaned word that counts towards key topics.
const TOPIC_MIN_LEN: usize = 5;
const MAX_KEY_TOPICS: usize = 3;

static SENTENCE_PATTERN: OnceLock<Regex> = OnceLock::new();

fn sentence_pattern() -> &'static Regex {
    // Deliberately naive: "Dr.", "3.5" and quoted speech split in odd places
    SENTENCE_PATTERN
        .get_or_init(|| Regex::new(r"[^.!?]+[.!?]+").expect("invalid sentence regex"))
}

/// Splits a passage into sentence-like units.
///
/// A unit is a run of non-terminator characters followed by `.`, `!` or `?`.
/// Trailing text without a terminator is dropped.
pub fn split_sentences(text: &str) -> Vec<String> {
    sentence_pattern()
        .find_iter(text)
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Strips every non-alphabetic character from a whitespace token.
pub fn clean_word(token: &str) -> String {
    token.chars().filter(|c| c.is_alphabetic()).collect()
}

/// Occurrence counts of lowercased words, remembering first-seen order.
#[derive(Debug, Default)]
pub struct WordFrequencyTable {
    counts: HashMap<String, usize>,
    order: Vec<String>,
}

impl WordFrequencyTable {
    /// Counts every cleaned, lowercased word longer than four letters.
    pub fn build(text: &str) -> Self {
        let mut table = Self::default();
        for token in text.split_whitespace() {
            let word = clean_word(token).to_lowercase();
            if word.chars().count() < TOPIC_MIN_LEN {
                continue;
            }
            table.add(word);
        }
        table
    }

    fn add(&mut self, word: String) {
        match self.counts.get_mut(&word) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(word.clone(), 1);
                self.order.push(word);
            }
        }
    }

    pub fn count(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Words seen more than once, most frequent first, at most three.
    /// Ties keep first-seen order.
    pub fn key_topics(&self) -> Vec<String> {
        let mut repeated: Vec<(&String, usize)> = self
            .order
            .iter()
            .map(|word| (word, self.count(word)))
            .filter(|(_, count)| *count > 1)
            .collect();
        // sort_by is stable
        repeated.sort_by(|a, b| b.1.cmp(&a.1));
        repeated
            .into_iter()
            .take(MAX_KEY_TOPICS)
            .map(|(word, _)| word.clone())
            .collect()
    }
}
