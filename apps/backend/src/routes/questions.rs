//! Question endpoints

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::{GameMode, MathStatusResponse, QuestionsQuery};
use crate::AppState;

/// GET /api/questions/{mode}
/// Returns the mode's questions in a fresh random order
pub async fn list(
    State(state): State<AppState>,
    Path(mode): Path<String>,
    Query(query): Query<QuestionsQuery>,
) -> Result<Response> {
    let mode: GameMode = mode.parse().map_err(ApiError::NotFound)?;

    if query.limit == Some(0) {
        return Err(ApiError::BadRequest("limit must be positive".to_string()));
    }
    let limit = query.limit.unwrap_or(usize::MAX);

    let response = match mode {
        GameMode::Picture => Json(state.bank.shuffled_pictures(limit)).into_response(),
        GameMode::Word => Json(state.bank.shuffled_words(limit)).into_response(),
        GameMode::Quiz => Json(state.bank.shuffled_quiz(limit)).into_response(),
        GameMode::Math => Json(MathStatusResponse::ready()).into_response(),
    };

    tracing::debug!("Served {} questions", mode);

    Ok(response)
}
