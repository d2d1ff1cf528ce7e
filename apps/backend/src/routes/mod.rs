//! HTTP route handlers

pub mod questions;

/// GET /
pub async fn home() -> &'static str {
    "Backend is running! Access API endpoints like /api/questions/picture"
}

/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}
