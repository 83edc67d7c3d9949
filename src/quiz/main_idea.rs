use crate::quiz::text::WordFrequencyTable;
use crate::quiz::{Question, QuestionKind};

pub fn generate_question(text: &str) -> Option<Question> {
    let topics = WordFrequencyTable::build(text).key_topics();
    // Nothing repeats, so there is no main idea to ask about
    let main_topic = topics.first()?;
    let second = topics.get(1).map(String::as_str);
    let third = topics.get(2).map(String::as_str);

    let options = [
        format!("The importance of {}", main_topic),
        format!("The history of {}", second.unwrap_or("technology")),
        format!("The problems with {}", third.unwrap_or("modern society")),
        format!(
            "How {} compares to {}",
            second.unwrap_or("science"),
            third.unwrap_or("everyday life")
        ),
    ];

    let explanation = format!(
        "The passage keeps returning to \"{}\", which makes it the central theme.",
        main_topic
    );

    Some(Question::new(
        QuestionKind::MainIdea,
        "What is the main idea of this passage?".to_string(),
        options,
        explanation,
    ))
}
