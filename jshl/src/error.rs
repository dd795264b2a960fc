//! Error handling module for the jshl CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use thiserror::Error;

/// Main error type for the jshl CLI application.
#[derive(Error, Debug)]
pub enum JshlError {
    /// Error when the configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when the tracing subscriber cannot be installed.
    #[error("Failed to initialize logging: {0}")]
    Logging(String),

    /// Error when an input cannot be read.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when a flag or configuration value is out of range.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The checked inputs contain lexical errors.
    #[error("found {errors} lexical error(s) in {files} file(s)")]
    LexicalErrors {
        /// Total number of error tokens.
        errors: usize,
        /// Number of files with at least one error token.
        files: usize,
    },

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using JshlError.
pub type Result<T> = std::result::Result<T, JshlError>;
