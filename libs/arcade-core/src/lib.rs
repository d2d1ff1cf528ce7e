//! Core game engine shared by the question server and the terminal player.
//!
//! Provides:
//! - Lenient answer matching for the picture and word games
//! - Level-scaled arithmetic question generation for the math game
//! - The game session state machine (score, countdown, question progression)
//! - Shared types (questions, game modes, configuration, summaries)

pub mod error;
pub mod math;
pub mod matching;
pub mod provider;
pub mod session;
pub mod types;

pub use error::{GameError, Result};
pub use math::{MathQuestion, MathQuestionGenerator, Operator};
pub use matching::{compare_answers, matches, MatchResult, MatchRule};
pub use provider::QuestionProvider;
pub use session::{
    CurrentQuestion, GameSession, SessionState, Submission, Tick, TimerUrgency, Verdict,
};
pub use types::{
    ConfigOverrides, GameConfig, GameMode, GameSummary, MatchingMode, Penalty, PictureQuestion,
    QuestionSet, QuizQuestion, WordQuestion,
};
