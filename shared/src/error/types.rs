//! Tagged failure value

use super::category::FailureKind;
use super::messages;
use crate::models::InputError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure of a store operation, with the message shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct SyncFailure {
    pub kind: FailureKind,
    pub message: String,
}

/// Result type for store operations
pub type SyncResult<T> = Result<T, SyncFailure>;

impl SyncFailure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// No bearer token in the session
    pub fn missing_token() -> Self {
        Self::new(FailureKind::Precondition, messages::NO_TOKEN)
    }

    /// Network-level failure; an empty detail falls back to a generic one
    pub fn transport(detail: impl AsRef<str>) -> Self {
        let detail = detail.as_ref();
        let detail = if detail.trim().is_empty() {
            messages::UNKNOWN_ERROR
        } else {
            detail
        };
        Self::new(FailureKind::Transport, messages::connection(detail))
    }

    /// 2xx response with an unexpected envelope
    pub fn structural() -> Self {
        Self::new(FailureKind::Structural, messages::UNEXPECTED_STRUCTURE)
    }
}

impl From<InputError> for SyncFailure {
    fn from(err: InputError) -> Self {
        Self::new(FailureKind::InvalidInput, err.to_string())
    }
}
