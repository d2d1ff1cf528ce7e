//! Test fixtures and factory functions for creating test data.

use arcade_backend::models::{PictureQuestion, QuizQuestion, WordQuestion};
use arcade_backend::services::question_bank::QuestionBank;

/// Create a word question.
pub fn word(hint: &str, answer: &str) -> WordQuestion {
    WordQuestion {
        hint: hint.to_string(),
        answer: answer.to_string(),
    }
}

/// Create a picture question whose image name is `<answer>.jpeg`.
pub fn picture(answer: &str) -> PictureQuestion {
    PictureQuestion {
        src: format!("images/{answer}.jpeg"),
        answer: answer.to_string(),
    }
}

/// Create a quiz question with the first option correct.
pub fn quiz(question: &str, options: &[&str]) -> QuizQuestion {
    QuizQuestion {
        question: question.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct_index: 0,
    }
}

/// A small bank with one question per mode.
pub fn small_bank() -> QuestionBank {
    QuestionBank {
        picture: vec![picture("cat")],
        word: vec![word("It has four legs and barks.", "dog")],
        quiz: vec![quiz("What animal says 'moo'?", &["Cow", "Dog"])],
    }
}
