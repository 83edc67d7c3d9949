use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::quiz::{Question, QuestionKind};

/// Sentences longer than this are considered to carry a detail.
const DETAIL_MIN_CHARS: usize = 50;
pub const UNRELATED_DISTRACTOR: &str = "This topic is not discussed in the text";

static COPULA_PATTERN: OnceLock<Regex> = OnceLock::new();

fn copula_pattern() -> &'static Regex {
    COPULA_PATTERN.get_or_init(|| {
        Regex::new(r"(?i)\b(is|are|was|were)\b").expect("invalid copula regex")
    })
}

/// Asks about the first unused sentence that has a digit or is long enough
/// to hold a fact, marking it as used.
pub fn generate_question(sentences: &[String], used: &mut HashSet<usize>) -> Option<Question> {
    let (index, sentence) = sentences.iter().enumerate().find(|(i, sentence)| {
        !used.contains(i)
            && (sentence.chars().any(|c| c.is_ascii_digit())
                || sentence.chars().count() > DETAIL_MIN_CHARS)
    })?;
    used.insert(index);

    let fact = sentence.trim_end_matches(|c: char| matches!(c, '.' | '!' | '?')).to_string();
    log::debug!("Detail question built from sentence #{}", index);

    let options = [
        fact.clone(),
        opposite(&fact),
        similar(&fact),
        UNRELATED_DISTRACTOR.to_string(),
    ];

    Some(Question::new(
        QuestionKind::Detail,
        "According to the passage, which of the following is true?".to_string(),
        options,
        format!("The passage states: \"{}\".", fact),
    ))
}

/// Negates a fact by putting "not" after its first copula.
pub fn opposite(fact: &str) -> String {
    if copula_pattern().is_match(fact) {
        return copula_pattern().replace(fact, "$1 not").into_owned();
    }
    // Without a copula the replacement would be a no-op and duplicate the answer
    format!("It is not true that {}", fact)
}

/// Swaps the middle word for "different", or pads short facts.
pub fn similar(fact: &str) -> String {
    let mut words: Vec<&str> = fact.split_whitespace().collect();
    if words.len() <= 3 {
        return format!("{} and more", fact);
    }
    let middle = words.len() / 2;
    words[middle] = "different";
    let swapped = words.join(" ");
    // A middle word that already reads "different" would leave the fact unchanged
    if swapped == fact {
        return format!("{} and more", fact);
    }
    swapped
}
