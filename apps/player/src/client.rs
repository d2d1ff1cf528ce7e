//! HTTP client for the question API.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use arcade_core::types::{GameMode, QuestionSet};
use arcade_core::{GameError, QuestionProvider};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client errors.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Backend error: {status} - {message}")]
    Backend { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<ClientError> for GameError {
    fn from(e: ClientError) -> Self {
        GameError::FetchFailure(e.to_string())
    }
}

#[derive(Debug, Deserialize)]
struct StatusResponse {
    status: String,
    message: String,
}

/// Fetches questions from the question API.
///
/// Cheap to clone: the underlying reqwest client shares its connection pool.
#[derive(Debug, Clone)]
pub struct HttpQuestionProvider {
    client: Client,
    base_url: String,
}

impl HttpQuestionProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, mode: GameMode) -> Result<T, ClientError> {
        let url = format!("{}/api/questions/{}", self.base_url, mode);
        tracing::debug!("GET {}", url);

        let resp = self
            .client
            .get(&url)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(ClientError::Backend { status, message });
        }

        resp.json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))
    }
}

impl QuestionProvider for HttpQuestionProvider {
    async fn fetch(&self, mode: GameMode) -> arcade_core::Result<QuestionSet> {
        let questions = match mode {
            GameMode::Picture => QuestionSet::Picture(self.get_json(mode).await?),
            GameMode::Word => QuestionSet::Word(self.get_json(mode).await?),
            GameMode::Quiz => QuestionSet::Quiz(self.get_json(mode).await?),
            GameMode::Math => {
                return Err(GameError::FetchFailure(
                    "math questions are generated locally".to_string(),
                ))
            }
        };

        tracing::info!(
            "Fetched {} {} questions",
            questions.len().unwrap_or_default(),
            mode
        );
        Ok(questions)
    }

    async fn status(&self) -> arcade_core::Result<()> {
        let response: StatusResponse = self.get_json(GameMode::Math).await?;
        tracing::info!("Math backend status: {}", response.message);

        if response.status == "ready" {
            Ok(())
        } else {
            Err(GameError::FetchFailure(format!(
                "math backend not ready: {}",
                response.status
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_trimmed() {
        let provider = HttpQuestionProvider::new("http://127.0.0.1:5000/");
        assert_eq!(provider.base_url(), "http://127.0.0.1:5000");
    }

    #[test]
    fn client_errors_become_fetch_failures() {
        let err: GameError = ClientError::Backend {
            status: 503,
            message: "unavailable".to_string(),
        }
        .into();
        assert_eq!(
            err,
            GameError::FetchFailure("Backend error: 503 - unavailable".to_string())
        );
    }
}
