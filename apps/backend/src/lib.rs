pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::models::GameMode;
use crate::services::question_bank::QuestionBank;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub bank: Arc<QuestionBank>,
}

impl AppState {
    pub fn new(bank: QuestionBank) -> Self {
        Self {
            bank: Arc::new(bank),
        }
    }
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let bank = match &config.question_bank_path {
        Some(path) => {
            tracing::info!("Loading question bank from {}", path.display());
            QuestionBank::from_file(path)?
        }
        None => QuestionBank::builtin()?,
    };
    for mode in [GameMode::Picture, GameMode::Word, GameMode::Quiz] {
        tracing::info!("Loaded {} {} questions", bank.count(mode), mode);
    }

    let app = build_router(AppState::new(bank))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = config.addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the API router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::home))
        .route("/health", get(routes::health_check))
        .route("/api/questions/{mode}", get(routes::questions::list))
        .with_state(state)
}
