//! Comprehension quiz generation.
//!
//! Questions come from lexical statistics of the passage: repeated words for
//! the main idea, a concrete sentence for the detail question, tone words for
//! the inference question and a long word for the vocabulary question. The
//! generator never fails. A passage that is too thin simply yields fewer
//! questions, or none.

use std::collections::HashSet;

use rand::Rng;

use crate::quiz::text::{split_sentences, MIN_SENTENCES, MIN_TEXT_CHARS};
use crate::quiz::{detail, inference, main_idea, vocabulary, Question, QuestionKind};

pub const DEFAULT_QUESTION_COUNT: usize = 5;

/// Generates up to `min(num_questions, 4)` questions, one per template.
///
/// Uses the thread-local random source for the vocabulary question, so that
/// question may differ between runs on the same text.
pub fn generate_quiz(text: &str, num_questions: usize) -> Vec<Question> {
    generate_quiz_with_rng(text, num_questions, &mut rand::thread_rng())
}

/// Same as [`generate_quiz`], drawing the vocabulary word from `rng`.
pub fn generate_quiz_with_rng<R: Rng + ?Sized>(
    text: &str,
    num_questions: usize,
    rng: &mut R,
) -> Vec<Question> {
    let text = text.trim();
    if text.chars().count() < MIN_TEXT_CHARS {
        log::debug!("Passage too short for a quiz ({} chars)", text.chars().count());
        return Vec::new();
    }

    let sentences = split_sentences(text);
    if sentences.len() < MIN_SENTENCES {
        log::debug!("Passage has only {} sentences", sentences.len());
        return Vec::new();
    }

    let mut used_sentences = HashSet::new();
    let mut questions = Vec::new();

    for kind in QuestionKind::ROTATION.iter().take(num_questions) {
        let question = match kind {
            QuestionKind::MainIdea => main_idea::generate_question(text),
            QuestionKind::Detail => detail::generate_question(&sentences, &mut used_sentences),
            QuestionKind::Inference => Some(inference::generate_question(text)),
            QuestionKind::Vocabulary => vocabulary::generate_question(text, &mut *rng),
        };

        match question {
            Some(mut question) => {
                question.id = questions.len() + 1;
                questions.push(question);
            }
            None => log::debug!("No material for a {} question, skipping", kind),
        }
    }

    log::info!(
        "Generated {} of {} requested questions",
        questions.len(),
        num_questions
    );
    questions
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const CLIMATE: &str = "Climate change represents one of the most significant challenges facing humanity today. Rising global temperatures, melting ice caps, and extreme weather events are becoming increasingly common. Scientists agree that human activities, particularly the burning of fossil fuels, are the primary drivers of these changes. The consequences affect every aspect of life, from agriculture to human health. While the challenges are daunting, solutions exist through renewable energy and sustainable practices.";

    const STUDY: &str = "Researchers ran a careful sleep experiment. The study involved 200 participants and lasted six months. Most people slept better. However, some had a problem adjusting. Overall the benefit was clear to everyone involved.";

    fn rng() -> StdRng {
        StdRng::seed_from_u64(2024)
    }

    #[test]
    fn test_short_text_yields_nothing() {
        assert!(generate_quiz("Too short. Far too short.", 4).is_empty());
        assert!(generate_quiz("", 4).is_empty());
        assert!(generate_quiz("   \n\t  ", 4).is_empty());
    }

    #[test]
    fn test_too_few_sentences_yields_nothing() {
        let text = "This passage is long enough in characters to pass the first check easily. \
                    But it only has a handful of sentences in it. Three at most, really!";
        assert!(text.len() >= MIN_TEXT_CHARS);
        assert!(generate_quiz(text, 4).is_empty());
    }

    #[test]
    fn test_length_threshold_is_one_hundred_trimmed_chars() {
        let at_limit = "Owls hunt at night. Bats fly at dusk. Frogs sing in ponds. \
                        Deer graze in fields. Foxes hide so well.";
        let below_limit = "Owls hunt at night. Bats fly at dusk. Frogs sing in ponds. \
                           Deer graze in fields. Foxes hid so well.";
        assert_eq!(at_limit.chars().count(), MIN_TEXT_CHARS);
        assert_eq!(below_limit.chars().count(), MIN_TEXT_CHARS - 1);

        assert!(!generate_quiz_with_rng(at_limit, 4, &mut rng()).is_empty());
        assert!(generate_quiz_with_rng(below_limit, 4, &mut rng()).is_empty());

        // Surrounding whitespace does not count towards the length
        let padded = format!("   {}\n\n", below_limit);
        assert!(padded.chars().count() > MIN_TEXT_CHARS);
        assert!(generate_quiz_with_rng(&padded, 4, &mut rng()).is_empty());
    }

    #[test]
    fn test_zero_requested_yields_nothing() {
        assert!(generate_quiz_with_rng(CLIMATE, 0, &mut rng()).is_empty());
    }

    #[test]
    fn test_climate_passage_end_to_end() {
        let questions = generate_quiz_with_rng(CLIMATE, 4, &mut rng());
        assert_eq!(questions.len(), 4);

        let kinds: Vec<QuestionKind> = questions.iter().map(|q| q.kind).collect();
        assert_eq!(kinds, QuestionKind::ROTATION.to_vec());

        for (i, question) in questions.iter().enumerate() {
            assert_eq!(question.id, i + 1);
            assert_eq!(question.options.len(), 4);
            assert_eq!(question.correct_answer, 0);
        }

        assert_eq!(questions[0].options[0], "The importance of challenges");
        assert_eq!(
            questions[1].options[0],
            "Climate change represents one of the most significant challenges facing humanity today"
        );
        // None of good/great/excellent/benefit/improve/positive occurs as a whole word
        assert_eq!(
            questions[2].options[0],
            "The passage presents information objectively"
        );
    }

    #[test]
    fn test_never_more_than_four_questions() {
        let questions = generate_quiz_with_rng(CLIMATE, DEFAULT_QUESTION_COUNT, &mut rng());
        assert_eq!(questions.len(), 4);
        assert_eq!(generate_quiz_with_rng(CLIMATE, 2, &mut rng()).len(), 2);
    }

    #[test]
    fn test_detail_prefers_first_qualifying_sentence() {
        let questions = generate_quiz_with_rng(STUDY, 4, &mut rng());
        let detail = questions
            .iter()
            .find(|q| q.kind == QuestionKind::Detail)
            .unwrap();
        assert_eq!(
            detail.options[0],
            "The study involved 200 participants and lasted six months"
        );
        assert_eq!(
            detail.options[1],
            "It is not true that The study involved 200 participants and lasted six months"
        );
    }

    #[test]
    fn test_balanced_inference_in_study_passage() {
        let questions = generate_quiz_with_rng(STUDY, 4, &mut rng());
        let inference = questions
            .iter()
            .find(|q| q.kind == QuestionKind::Inference)
            .unwrap();
        assert_eq!(
            inference.options[0],
            "The topic has both benefits and challenges"
        );
    }

    #[test]
    fn test_deterministic_apart_from_vocabulary() {
        let first = generate_quiz(CLIMATE, 4);
        let second = generate_quiz(CLIMATE, 4);
        assert_eq!(first[..3], second[..3]);

        let last = &first[3];
        assert_eq!(last.kind, QuestionKind::Vocabulary);
        let word = vocabulary::asked_word(last).unwrap();
        assert_eq!(last.options[0], vocabulary::definitions(word)[0]);
    }

    #[test]
    fn test_skipped_slot_shortens_quiz() {
        // No sentence has a digit or runs past fifty characters
        let text = "Cats nap in sun. Dogs run fast. Birds sing loud. \
                    Fish swim deep. Cows eat grass. Ants dig holes. Bees make honey.";
        assert!(text.len() >= MIN_TEXT_CHARS);
        let questions = generate_quiz_with_rng(text, 4, &mut rng());
        assert!(questions.iter().all(|q| q.kind != QuestionKind::Detail));
        assert!(questions.len() < 4);
        for (i, question) in questions.iter().enumerate() {
            assert_eq!(question.id, i + 1);
        }
    }
}
