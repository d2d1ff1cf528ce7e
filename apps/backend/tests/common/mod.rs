//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext for building the router over a question bank
//! - Helper functions for creating test data

pub mod fixtures;

use axum::Router;
use axum_test::TestServer;

use arcade_backend::services::question_bank::QuestionBank;
use arcade_backend::{build_router, AppState};

/// Test context wrapping the API router.
pub struct TestContext {
    app: Router,
}

impl TestContext {
    /// Create a test context over the built-in question bank.
    pub fn new() -> Self {
        let bank = QuestionBank::builtin().expect("built-in bank should parse");
        Self::with_bank(bank)
    }

    /// Create a test context over a custom question bank.
    pub fn with_bank(bank: QuestionBank) -> Self {
        Self {
            app: build_router(AppState::new(bank)),
        }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Start an in-memory test server.
    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).expect("failed to start test server")
    }
}
