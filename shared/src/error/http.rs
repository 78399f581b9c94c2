//! HTTP status interpretation
//!
//! Precedence: 401, 403 and 404 map to fixed messages regardless of the
//! body. Only the remaining statuses consult the
//! body's `message` field.

use super::category::{FailureKind, Operation};
use super::messages;
use super::types::SyncFailure;
use crate::response::ErrorBody;
use http::StatusCode;

impl SyncFailure {
    /// Classify a non-2xx response.
    pub fn from_response(op: Operation, status: StatusCode, body: &str) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => {
                Self::new(FailureKind::Unauthorized, messages::SESSION_EXPIRED)
            }
            StatusCode::FORBIDDEN => {
                let message = match op {
                    Operation::Remove => messages::FORBIDDEN_REMOVE,
                    _ => messages::FORBIDDEN_ACTION,
                };
                Self::new(FailureKind::Forbidden, message)
            }
            StatusCode::NOT_FOUND => {
                let message = if op.targets_item() {
                    messages::NOT_FOUND
                } else {
                    messages::COLLECTION_NOT_FOUND
                };
                Self::new(FailureKind::NotFound, message)
            }
            _ => Self::from_body(op, status, body),
        }
    }

    fn from_body(op: Operation, status: StatusCode, body: &str) -> Self {
        let kind = if status == StatusCode::BAD_REQUEST {
            FailureKind::Validation
        } else {
            FailureKind::Server
        };

        // The list endpoint reports the status line, never the body
        if op == Operation::Fetch {
            let reason = status.canonical_reason().unwrap_or_default();
            return Self::new(kind, messages::fetch_failed(status.as_u16(), reason));
        }

        let detail = body_detail(op, body);
        let message = if kind == FailureKind::Validation {
            messages::validation(detail.as_deref().unwrap_or(messages::INVALID_DATA))
        } else {
            let detail = detail.as_deref().unwrap_or(messages::UNKNOWN_ERROR);
            match op {
                Operation::Create => messages::create_failed(detail),
                Operation::Update => messages::update_failed(detail),
                _ => messages::remove_failed(detail),
            }
        };
        Self::new(kind, message)
    }
}

/// Non-empty `message` from the body; removals also fall back to `error`
fn body_detail(op: Operation, body: &str) -> Option<String> {
    let body = ErrorBody::parse_lenient(body);
    let non_empty = |s: Option<String>| s.filter(|s| !s.is_empty());

    match op {
        Operation::Remove => non_empty(body.message).or_else(|| non_empty(body.error)),
        _ => non_empty(body.message),
    }
}
