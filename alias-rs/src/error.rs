//! Error types for alias-rs

use thiserror::Error;

/// Result type alias for alias operations
pub type Result<T> = std::result::Result<T, AliasError>;

/// Alias service error types
#[derive(Error, Debug)]
pub enum AliasError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP transport error talking to the downstream mail server
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// No domain could be resolved for alias generation
    #[error("No domain available for alias generation")]
    Generation,

    /// The downstream mail server rejected the registration
    #[error("Registration failed: {0}")]
    Registration(String),
}
