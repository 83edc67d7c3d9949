pub mod detail;
pub mod generator;
pub mod inference;
pub mod main_idea;
pub mod score;
pub mod text;
pub mod vocabulary;

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

pub use generator::{generate_quiz, DEFAULT_QUESTION_COUNT};
pub use score::QuizScore;

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Quiz {
    pub questions: Vec<Question>,
}

impl Quiz {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// The four comprehension templates, in the order the generator cycles through them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    MainIdea,
    Detail,
    Inference,
    Vocabulary,
}

impl QuestionKind {
    pub const ROTATION: [QuestionKind; 4] = [
        QuestionKind::MainIdea,
        QuestionKind::Detail,
        QuestionKind::Inference,
        QuestionKind::Vocabulary,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            QuestionKind::MainIdea => "Main idea",
            QuestionKind::Detail => "Detail",
            QuestionKind::Inference => "Inference",
            QuestionKind::Vocabulary => "Vocabulary",
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A multiple-choice question. Exactly one of `options` is correct.
///
/// Freshly generated questions always have `correct_answer == 0`; call
/// [`Question::shuffle_options`] before showing them if the position
/// should not give the answer away.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: usize,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub question: String,
    pub options: [String; 4],
    pub correct_answer: usize,
    pub explanation: String,
}

impl Question {
    /// Builds a question whose first option is the correct one.
    pub fn new(
        kind: QuestionKind,
        question: String,
        options: [String; 4],
        explanation: String,
    ) -> Self {
        Self {
            id: 0,
            kind,
            question,
            options,
            correct_answer: 0,
            explanation,
        }
    }

    /// `None` when `correct_answer` does not index an option, which only
    /// happens for state restored from storage.
    pub fn correct_option(&self) -> Option<&str> {
        self.options.get(self.correct_answer).map(String::as_str)
    }

    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_option() == Some(answer.trim())
    }

    pub fn shuffle_options<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let correct = match self.correct_option() {
            Some(correct) => correct.to_string(),
            None => return,
        };
        self.options.shuffle(rng);
        // Options are distinct, so the first match is the correct one
        self.correct_answer = self
            .options
            .iter()
            .position(|option| *option == correct)
            .unwrap_or(0);
    }
}
