mod config;
mod quiz;

use std::sync::Arc;

use dotenv::dotenv;
use log::{debug, info, warn};
use quiz::{Question, Quiz, QuizScore, DEFAULT_QUESTION_COUNT};
use teloxide::{
    dispatching::dialogue::{serializer::Json, ErasedStorage, SqliteStorage, Storage},
    prelude::*,
    types::{ChatAction, KeyboardButton, KeyboardMarkup, KeyboardRemove},
};

use crate::config::Config;
use crate::quiz::text::MIN_TEXT_CHARS;

type QuizDialogue = Dialogue<State, ErasedStorage<State>>;
type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[derive(Clone, Default, serde::Serialize, serde::Deserialize)]
pub enum State {
    #[default]
    Start,
    ReceivePassage,
    ReceiveAmountOfQuestions {
        passage: String,
    },
    ComprehensionQuiz {
        quiz: Quiz,
        question_number: usize,
        score: usize,
    },
}

type QuizStateStorage = Arc<ErasedStorage<State>>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Load .env before the logger so RUST_LOG can live there too
    let dotenv_result = dotenv();

    pretty_env_logger::init();
    if let Err(err) = dotenv_result {
        warn!("No .env file loaded: {}", err);
    }

    let config = Config::from_env()?;
    info!("Starting reading quiz bot with {:?}", config);

    let bot = Bot::from_env();

    info!(
        "Opening dialogue storage at {}",
        config.database_path.display()
    );
    let storage: QuizStateStorage =
        SqliteStorage::open(&config.database_path.to_string_lossy(), Json)
            .await?
            .erase();

    Dispatcher::builder(
        bot,
        Update::filter_message()
            .enter_dialogue::<Message, ErasedStorage<State>, State>()
            .branch(dptree::case![State::Start].endpoint(start))
            .branch(dptree::case![State::ReceivePassage].endpoint(receive_passage))
            .branch(
                dptree::case![State::ReceiveAmountOfQuestions { passage }]
                    .endpoint(receive_amount_of_questions),
            )
            .branch(
                dptree::case![State::ComprehensionQuiz {
                    quiz,
                    question_number,
                    score
                }]
                .endpoint(comprehension_quiz),
            ),
    )
    .dependencies(dptree::deps![storage, Arc::new(config)])
    .enable_ctrlc_handler()
    .build()
    .dispatch()
    .await;

    Ok(())
}

const GREETING_TEXT: &str = "Hi! I turn any passage you are reading into a short comprehension quiz. \
Send me a few paragraphs of text (at least five sentences) to get started.";
const NEXT_PASSAGE_TEXT: &str = "Send me another passage whenever you are ready.";
const ALL_QUESTIONS_CHOICE: &str = "All";

async fn start(bot: Bot, dialogue: QuizDialogue, msg: Message) -> HandlerResult {
    bot.send_message(msg.chat.id, GREETING_TEXT).await?;

    dialogue.update(State::ReceivePassage).await?;
    Ok(())
}

async fn receive_passage(bot: Bot, dialogue: QuizDialogue, msg: Message) -> HandlerResult {
    let passage = match msg.text() {
        Some(text) => text.trim(),
        None => {
            bot.send_message(msg.chat.id, "Please send the passage as plain text")
                .await?;
            return Ok(());
        }
    };

    if passage.chars().count() < MIN_TEXT_CHARS {
        bot.send_message(
            msg.chat.id,
            format!(
                "That passage is too short. Please send at least {} characters.",
                MIN_TEXT_CHARS
            ),
        )
        .await?;
        return Ok(());
    }

    let keyboard = KeyboardMarkup::new(vec![
        vec![KeyboardButton::new("1"), KeyboardButton::new("2")],
        vec![KeyboardButton::new("3"), KeyboardButton::new("4")],
        vec![KeyboardButton::new(ALL_QUESTIONS_CHOICE)],
    ]);
    bot.send_message(msg.chat.id, "How many questions would you like?")
        .reply_markup(keyboard)
        .await?;

    dialogue
        .update(State::ReceiveAmountOfQuestions {
            passage: passage.to_string(),
        })
        .await?;
    Ok(())
}

/// Generates the quiz and, if configured, hides the answer position.
fn prepare_quiz(passage: &str, amount: usize, shuffle_options: bool) -> Quiz {
    let mut questions = quiz::generate_quiz(passage, amount);
    if shuffle_options {
        let mut rng = rand::thread_rng();
        for question in questions.iter_mut() {
            question.shuffle_options(&mut rng);
        }
    }
    Quiz::new(questions)
}

fn parse_amount(text: &str) -> Result<usize, std::num::ParseIntError> {
    let text = text.trim();
    if text.eq_ignore_ascii_case(ALL_QUESTIONS_CHOICE) {
        return Ok(DEFAULT_QUESTION_COUNT);
    }
    text.parse()
}

async fn receive_amount_of_questions(
    config: Arc<Config>,
    bot: Bot,
    dialogue: QuizDialogue,
    passage: String,
    msg: Message,
) -> HandlerResult {
    let amount = match msg.text().map(parse_amount) {
        Some(Ok(amount)) if amount > 0 => amount,
        Some(Ok(_)) => {
            bot.send_message(msg.chat.id, "The number of questions can't be 0")
                .await?;
            return Ok(());
        }
        _ => {
            bot.send_message(msg.chat.id, "Please enter a number")
                .await?;
            return Ok(());
        }
    };

    let _ = bot.send_chat_action(msg.chat.id, ChatAction::Typing).await;

    let quiz = prepare_quiz(&passage, amount, config.shuffle_options);
    if quiz.is_empty() {
        info!("Chat {}: passage too thin for a quiz", msg.chat.id.0);
        bot.send_message(
            msg.chat.id,
            "I couldn't build a meaningful quiz from that passage. \
             Try a longer text with at least five full sentences.",
        )
        .reply_markup(KeyboardRemove::new())
        .await?;
        dialogue.update(State::ReceivePassage).await?;
        return Ok(());
    }

    if quiz.len() < amount {
        bot.send_message(
            msg.chat.id,
            format!(
                "This passage only supports {} question(s), so that's what you'll get.",
                quiz.len()
            ),
        )
        .await?;
    }

    bot.send_message(msg.chat.id, "Great! Let's begin.")
        .reply_markup(KeyboardMarkup::new(vec![vec![KeyboardButton::new("Go!")]]))
        .await?;

    dialogue
        .update(State::ComprehensionQuiz {
            quiz,
            question_number: 0,
            score: 0,
        })
        .await?;
    Ok(())
}

fn render_question(question: &Question, total: usize) -> String {
    format!(
        "Question {} of {} ({}):\n{}",
        question.id, total, question.kind, question.question
    )
}

async fn comprehension_quiz(
    bot: Bot,
    dialogue: QuizDialogue,
    (quiz, question_number, score): (Quiz, usize, usize),
    msg: Message,
) -> HandlerResult {
    let mut current_score = score;
    if question_number != 0 {
        let answer = match msg.text() {
            Some(answer) => answer,
            None => {
                bot.send_message(msg.chat.id, "Please pick one of the options")
                    .await?;
                return Ok(());
            }
        };
        let (question, correct) = match quiz
            .questions
            .get(question_number - 1)
            .and_then(|question| Some((question, question.correct_option()?)))
        {
            Some(found) => found,
            None => {
                warn!(
                    "Chat {}: stored quiz has no valid question #{}, resetting",
                    msg.chat.id.0, question_number
                );
                bot.send_message(
                    msg.chat.id,
                    format!("Sorry, I lost track of this quiz. {}", NEXT_PASSAGE_TEXT),
                )
                .reply_markup(KeyboardRemove::new())
                .await?;
                dialogue.update(State::ReceivePassage).await?;
                return Ok(());
            }
        };
        if question.is_correct(answer) {
            bot.send_message(msg.chat.id, "Correct!").await?;
            current_score += 1;
        } else {
            debug!(
                "Chat {}: wrong answer {:?} to question {}",
                msg.chat.id.0, answer, question.id
            );
            bot.send_message(
                msg.chat.id,
                format!(
                    "Not quite. The correct answer is: {}\n\n{}",
                    correct,
                    question.explanation
                ),
            )
            .await?;
        }
    }

    if question_number >= quiz.len() {
        let quiz_score = QuizScore::new(current_score, quiz.len());
        info!("Chat {}: quiz finished, {}", msg.chat.id.0, quiz_score);

        let verdict = if quiz_score.passed() {
            "Well done!"
        } else {
            "Keep reading and try again!"
        };
        bot.send_message(
            msg.chat.id,
            format!(
                "Quiz finished! {}\n{}\n\n{}",
                quiz_score, verdict, NEXT_PASSAGE_TEXT
            ),
        )
        .reply_markup(KeyboardRemove::new())
        .await?;

        dialogue.update(State::ReceivePassage).await?;
        return Ok(());
    }

    let question = &quiz.questions[question_number];
    let keyboard = KeyboardMarkup::new(
        question
            .options
            .iter()
            .map(|option| vec![KeyboardButton::new(option.clone())])
            .collect::<Vec<_>>(),
    );

    bot.send_message(msg.chat.id, render_question(question, quiz.len()))
        .reply_markup(keyboard)
        .await?;

    dialogue
        .update(State::ComprehensionQuiz {
            quiz,
            question_number: question_number + 1,
            score: current_score,
        })
        .await?;
    Ok(())
}
