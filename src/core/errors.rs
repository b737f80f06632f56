//! Custom error types for translation operations

use thiserror::Error;

/// Translation-related errors
#[derive(Error, Debug)]
pub enum PolyglotError {
    /// Request never produced an HTTP response (DNS, connect, timeout)
    #[error("Transport error: {message}")]
    Transport {
        message: String,
    },

    /// Endpoint answered with a non-success HTTP status
    #[error("Protocol error: status {status}")]
    Protocol {
        status: u16,
    },

    /// Response parsed but the expected payload was missing or empty
    #[error("Content error: {message}")]
    Content {
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        message: String,
    },

    /// Local store error
    #[error("Store error: {path} - {message}")]
    Store {
        path: String,
        message: String,
    },

    /// Generative backend is not configured or not reachable
    #[error("Assistant backend unavailable: {message}")]
    AssistantUnavailable {
        message: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Reqwest error
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, PolyglotError>;
