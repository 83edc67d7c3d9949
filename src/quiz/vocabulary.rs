use rand::Rng;

use crate::quiz::text::clean_word;
use crate::quiz::{Question, QuestionKind};

const MIN_WORD_LEN: usize = 7;
/// The random pick only looks at this many leading candidates.
const CANDIDATE_WINDOW: usize = 10;

const FALLBACK_DEFINITIONS: [&str; 4] = [
    "Related to the topic discussed",
    "An unrelated concept",
    "The opposite meaning",
    "A technical term from another field",
];

/// Correct definition first, then three distractors.
pub fn definitions(word: &str) -> [&'static str; 4] {
    match word.to_lowercase().as_str() {
        "important" => [
            "Of great significance or value",
            "Of little or no value",
            "Happening very quickly",
            "Difficult to understand",
        ],
        "develop" => [
            "To grow or cause to become more advanced",
            "To stop making progress",
            "To hide something from view",
            "To measure something precisely",
        ],
        "benefit" => [
            "An advantage gained from something",
            "A disadvantage or loss",
            "A type of payment for work",
            "A formal written agreement",
        ],
        "challenge" => [
            "A task or situation that tests someone's abilities",
            "An easy and simple task",
            "A reward given for success",
            "A friendly conversation",
        ],
        "improve" => [
            "To make or become better",
            "To make or become worse",
            "To keep exactly the same",
            "To remove completely",
        ],
        "essential" => [
            "Absolutely necessary",
            "Optional or unnecessary",
            "Slightly useful",
            "Harmful or dangerous",
        ],
        _ => FALLBACK_DEFINITIONS,
    }
}

/// Words of at least seven letters, in passage order.
pub fn candidate_words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(clean_word)
        .filter(|word| word.chars().count() >= MIN_WORD_LEN)
        .collect()
}

/// Picks one of the first ten long words at random and asks for its meaning.
pub fn generate_question<R: Rng + ?Sized>(text: &str, rng: &mut R) -> Option<Question> {
    let candidates = candidate_words(text);
    if candidates.is_empty() {
        return None;
    }
    let window = candidates.len().min(CANDIDATE_WINDOW);
    let word = &candidates[rng.gen_range(0..window)];
    log::debug!("Vocabulary question picked {:?}", word);

    let options = definitions(word).map(str::to_string);
    let explanation = format!(
        "In this passage, \"{}\" means: {}.",
        word,
        options[0].to_lowercase()
    );

    Some(Question::new(
        QuestionKind::Vocabulary,
        format!("What does the word \"{}\" mean in this passage?", word),
        options,
        explanation,
    ))
}

/// Recovers the quoted word from a vocabulary question.
#[cfg(test)]
pub fn asked_word(question: &Question) -> Option<&str> {
    let start = question.question.find('"')? + 1;
    let len = question.question[start..].find('"')?;
    Some(&question.question[start..start + len])
}
