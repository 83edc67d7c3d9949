use std::sync::OnceLock;

use regex::Regex;

use crate::quiz::{Question, QuestionKind};

static POSITIVE_PATTERN: OnceLock<Regex> = OnceLock::new();
static CHALLENGE_PATTERN: OnceLock<Regex> = OnceLock::new();

fn positive_pattern() -> &'static Regex {
    POSITIVE_PATTERN.get_or_init(|| {
        Regex::new(r"(?i)\b(good|great|excellent|benefit|improve|positive)\b")
            .expect("invalid positive tone regex")
    })
}

fn challenge_pattern() -> &'static Regex {
    CHALLENGE_PATTERN.get_or_init(|| {
        Regex::new(r"(?i)\b(however|challenge|difficult|problem|issue)\b")
            .expect("invalid challenge regex")
    })
}

/// Overall stance of a passage, read off its wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Balanced,
    Favorable,
    Objective,
}

impl Tone {
    pub fn detect(text: &str) -> Self {
        let has_positive = positive_pattern().is_match(text);
        let has_challenge = challenge_pattern().is_match(text);
        match (has_positive, has_challenge) {
            (true, true) => Tone::Balanced,
            (true, false) => Tone::Favorable,
            (false, _) => Tone::Objective,
        }
    }

    /// The correct inference followed by its three distractors.
    fn options(&self) -> [&'static str; 4] {
        match self {
            Tone::Balanced => [
                "The topic has both benefits and challenges",
                "The topic is entirely positive",
                "The topic should be avoided",
                "There are no challenges mentioned",
            ],
            Tone::Favorable => [
                "The author views the topic favorably",
                "The author is critical of the topic",
                "The topic is controversial",
                "The author is neutral about the topic",
            ],
            Tone::Objective => [
                "The passage presents information objectively",
                "The author is highly opinionated",
                "The author strongly disagrees with the topic",
                "The passage is promotional in nature",
            ],
        }
    }

    fn explanation(&self) -> &'static str {
        match self {
            Tone::Balanced => {
                "The passage mentions positive aspects as well as difficulties, so it presents a balanced view."
            }
            Tone::Favorable => {
                "The passage uses positive language and raises no difficulties."
            }
            Tone::Objective => {
                "The passage reports information without strongly positive wording."
            }
        }
    }
}

pub fn generate_question(text: &str) -> Question {
    let tone = Tone::detect(text);
    log::debug!("Passage tone detected as {:?}", tone);

    Question::new(
        QuestionKind::Inference,
        "What can be inferred from this passage?".to_string(),
        tone.options().map(str::to_string),
        tone.explanation().to_string(),
    )
}
