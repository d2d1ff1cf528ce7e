//! Question source abstraction.

use std::future::Future;

use crate::error::Result;
use crate::types::{GameMode, QuestionSet};

/// Supplies question lists for the picture, word and quiz games.
///
/// Implementations make a single attempt per call and report failures as
/// [`GameError::FetchFailure`](crate::GameError::FetchFailure).
pub trait QuestionProvider {
    /// Fetch the ordered question list for `mode`.
    fn fetch(&self, mode: GameMode) -> impl Future<Output = Result<QuestionSet>> + Send;

    /// Liveness probe, used before starting the locally generated math game.
    fn status(&self) -> impl Future<Output = Result<()>> + Send;
}
