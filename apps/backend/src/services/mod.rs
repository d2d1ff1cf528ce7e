//! Backend services

pub mod question_bank;
