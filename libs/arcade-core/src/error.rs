//! Error types for arcade-core.

use thiserror::Error;

use crate::types::GameMode;

/// Result type alias using GameError.
pub type Result<T> = std::result::Result<T, GameError>;

/// Errors scoped to a single game session.
///
/// None of these are fatal: callers report them to the player and either
/// re-prompt or leave the session in its current state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("failed to load questions: {0}")]
    FetchFailure(String),

    #[error("no {0} questions available")]
    EmptyQuestionSet(GameMode),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("malformed question {index}: {reason}")]
    MalformedQuestion { index: usize, reason: String },

    #[error("no questions loaded")]
    NoQuestions,

    #[error("game already running")]
    AlreadyRunning,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_empty_set() {
        let error = GameError::EmptyQuestionSet(GameMode::Quiz);
        assert_eq!(error.to_string(), "no quiz questions available");
    }

    #[test]
    fn test_error_display_fetch_failure() {
        let error = GameError::FetchFailure("connection refused".to_string());
        assert_eq!(
            error.to_string(),
            "failed to load questions: connection refused"
        );
    }

    #[test]
    fn test_error_display_malformed() {
        let error = GameError::MalformedQuestion {
            index: 2,
            reason: "correct index 4 out of range".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "malformed question 2: correct index 4 out of range"
        );
    }
}
