//! Server configuration from environment variables

use std::path::PathBuf;

/// Runtime configuration.
///
/// - HOST: bind address (default 0.0.0.0)
/// - PORT: bind port (default 5000)
/// - QUESTION_BANK_PATH: optional JSON question bank replacing the built-in one
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub question_bank_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match std::env::var("PORT") {
            Ok(value) => value
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid PORT {value:?}: {e}"))?,
            Err(_) => 5000,
        };
        let question_bank_path = std::env::var_os("QUESTION_BANK_PATH").map(PathBuf::from);

        Ok(Self {
            host,
            port,
            question_bank_path,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
