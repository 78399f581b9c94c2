//! Failure classification

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of failure an operation ended with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// No bearer token; nothing was sent
    Precondition,
    /// Input rejected client-side before sending (e.g. hire date)
    InvalidInput,
    /// Network unreachable, DNS, connection reset, ...
    Transport,
    /// HTTP 401
    Unauthorized,
    /// HTTP 403
    Forbidden,
    /// HTTP 404
    NotFound,
    /// HTTP 400
    Validation,
    /// Any other non-2xx status
    Server,
    /// 2xx response whose envelope does not have the expected shape
    Structural,
}

impl FailureKind {
    /// Whether the request ever reached the server
    pub fn reached_server(&self) -> bool {
        !matches!(self, Self::Precondition | Self::InvalidInput | Self::Transport)
    }

    /// Whether the user should sign in again
    pub fn requires_login(&self) -> bool {
        matches!(self, Self::Precondition | Self::Unauthorized)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Precondition => "precondition",
            Self::InvalidInput => "invalid_input",
            Self::Transport => "transport",
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
            Self::NotFound => "not_found",
            Self::Validation => "validation",
            Self::Server => "server",
            Self::Structural => "structural",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Store operation a failure is attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Fetch,
    Create,
    Update,
    Remove,
}

impl Operation {
    /// Operations addressed at a single collaborator (`{base}/{id}`)
    pub fn targets_item(&self) -> bool {
        matches!(self, Self::Update | Self::Remove)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Fetch => "fetch",
            Self::Create => "create",
            Self::Update => "update",
            Self::Remove => "remove",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reached_server() {
        assert!(!FailureKind::Precondition.reached_server());
        assert!(!FailureKind::InvalidInput.reached_server());
        assert!(!FailureKind::Transport.reached_server());
        assert!(FailureKind::Unauthorized.reached_server());
        assert!(FailureKind::Structural.reached_server());
    }

    #[test]
    fn test_requires_login() {
        assert!(FailureKind::Precondition.requires_login());
        assert!(FailureKind::Unauthorized.requires_login());
        assert!(!FailureKind::Forbidden.requires_login());
    }

    #[test]
    fn test_item_operations() {
        assert!(Operation::Update.targets_item());
        assert!(Operation::Remove.targets_item());
        assert!(!Operation::Fetch.targets_item());
        assert!(!Operation::Create.targets_item());
    }
}
