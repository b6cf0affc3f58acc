//! Error types for brasis

use thiserror::Error;

/// Main error type for brasis operations
#[derive(Error, Debug)]
pub enum BrasisError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Scan error raised by a markup scanner
    #[error("Scan error: {0}")]
    Scan(String),
}

/// Result type alias for brasis operations
pub type Result<T> = std::result::Result<T, BrasisError>;
