//! Error types for the InfoHub assistant.
//!
//! This module defines a unified error enum covering configuration, I/O,
//! search, LLM and prompt failures.

use thiserror::Error;

/// Unified error type for the InfoHub assistant.
///
/// Library functions return `Result<T, AppError>`; nothing panics on bad input.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors (including missing credentials)
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O and filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Document search errors
    #[error("Search error: {0}")]
    Search(String),

    /// LLM provider errors
    #[error("LLM error: {0}")]
    Llm(String),

    /// Prompt rendering errors
    #[error("Prompt error: {0}")]
    Prompt(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
