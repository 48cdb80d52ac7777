//! Error types for the language client.

use thiserror::Error;

/// Result type for language client operations.
pub type Result<T> = std::result::Result<T, LanguageError>;

#[derive(Debug, Error)]
pub enum LanguageError {
    /// Configuration error (missing key, bad endpoint)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection failed, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// API error (non-2xx response)
    #[error("API error: {0}")]
    Api(String),

    /// Parse error (unexpected response body)
    #[error("Parse error: {0}")]
    Parse(String),
}
