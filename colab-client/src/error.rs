//! Client error types

use thiserror::Error;

/// Client error type
///
/// These never reach the store: the controller turns them into a
/// transport [`SyncFailure`](shared::SyncFailure).
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed before a response was received
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// Transport failure reported by a non-reqwest [`HttpClient`](crate::HttpClient)
    #[error("{0}")]
    Transport(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Session file I/O failed
    #[error("Session storage error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
