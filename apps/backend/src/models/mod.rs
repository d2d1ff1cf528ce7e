//! API request and response types

use serde::{Deserialize, Serialize};

// Re-export shared question types from arcade-core
pub use arcade_core::types::{GameMode, PictureQuestion, QuizQuestion, WordQuestion};

/// Query parameters for GET /api/questions/{mode}
#[derive(Debug, Default, Deserialize)]
pub struct QuestionsQuery {
    pub limit: Option<usize>,
}

/// Math game readiness. Math questions are generated by the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MathStatusResponse {
    pub status: String,
    pub message: String,
}

impl MathStatusResponse {
    pub fn ready() -> Self {
        Self {
            status: "ready".to_string(),
            message: "Math questions are generated on the client based on level.".to_string(),
        }
    }
}
