//! Terminal front end for the trivia arcade.
//!
//! Fetches questions from the question API, drives a [`GameSession`] from a
//! one-second ticker and stdin, and renders feedback and the summary.
//!
//! [`GameSession`]: arcade_core::GameSession

pub mod cli;
pub mod client;
pub mod game;
pub mod render;
