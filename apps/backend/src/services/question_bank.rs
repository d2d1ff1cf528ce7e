//! In-memory question bank served by the API.

use std::path::Path;

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{GameMode, PictureQuestion, QuizQuestion, WordQuestion};

const BUILTIN_QUESTIONS: &str = include_str!("../../data/questions.json");

#[derive(Debug, Error)]
pub enum BankError {
    #[error("failed to read question bank: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse question bank: {0}")]
    Json(#[from] serde_json::Error),
    #[error("quiz question {index} is invalid: {reason}")]
    InvalidQuiz { index: usize, reason: String },
}

/// Questions for the picture, word and quiz games.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionBank {
    #[serde(default)]
    pub picture: Vec<PictureQuestion>,
    #[serde(default)]
    pub word: Vec<WordQuestion>,
    #[serde(default)]
    pub quiz: Vec<QuizQuestion>,
}

impl QuestionBank {
    /// The question set shipped with the server.
    pub fn builtin() -> Result<Self, BankError> {
        Self::from_json(BUILTIN_QUESTIONS)
    }

    /// Load a bank from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, BankError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, BankError> {
        let bank: Self = serde_json::from_str(content)?;
        bank.validate()?;
        Ok(bank)
    }

    fn validate(&self) -> Result<(), BankError> {
        for (index, q) in self.quiz.iter().enumerate() {
            if q.correct_option().is_none() {
                return Err(BankError::InvalidQuiz {
                    index,
                    reason: format!(
                        "correctAnswerIndex {} out of range for {} options",
                        q.correct_index,
                        q.options.len()
                    ),
                });
            }
        }
        Ok(())
    }

    /// Number of stored questions for a mode (always 0 for math).
    pub fn count(&self, mode: GameMode) -> usize {
        match mode {
            GameMode::Picture => self.picture.len(),
            GameMode::Word => self.word.len(),
            GameMode::Quiz => self.quiz.len(),
            GameMode::Math => 0,
        }
    }

    pub fn shuffled_pictures(&self, limit: usize) -> Vec<PictureQuestion> {
        shuffled(&self.picture, limit)
    }

    pub fn shuffled_words(&self, limit: usize) -> Vec<WordQuestion> {
        shuffled(&self.word, limit)
    }

    pub fn shuffled_quiz(&self, limit: usize) -> Vec<QuizQuestion> {
        shuffled(&self.quiz, limit)
    }
}

fn shuffled<T: Clone>(items: &[T], limit: usize) -> Vec<T> {
    let mut items = items.to_vec();
    items.shuffle(&mut rand::rng());
    items.truncate(limit);
    items
}
