//! Error handling module for the mytok CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use std::path::PathBuf;

use mython_lex::LexerError;
use thiserror::Error;

/// Main error type for the mytok CLI application.
#[derive(Error, Debug)]
pub enum MytokError {
    /// Error when a configuration file is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when a source file cannot be opened.
    #[error("Cannot open {}: {source}", path.display())]
    Open {
        /// The path that failed.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Error raised while tokenizing.
    #[error("Lexer error: {0}")]
    Lexer(#[from] LexerError),

    /// One or more files failed `mytok check`.
    #[error("{failed} of {total} file(s) failed to tokenize")]
    CheckFailed {
        /// Number of files that failed.
        failed: usize,
        /// Number of files checked.
        total: usize,
    },

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using MytokError.
pub type Result<T> = std::result::Result<T, MytokError>;
