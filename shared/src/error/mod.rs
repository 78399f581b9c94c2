//! Failure taxonomy for collaborator synchronization
//!
//! This module provides:
//! - [`FailureKind`]: classification of every way an operation can fail
//! - [`Operation`]: which store operation a failure belongs to
//! - [`SyncFailure`]: the tagged failure value, carrying its user-facing message
//! - [`messages`]: the fixed user-facing messages
//!
//! Status-coded failures are authoritative over response bodies: a 401 is
//! always reported as an expired session, whatever the body says.
//!
//! # Example
//!
//! ```
//! use shared::error::{FailureKind, Operation, SyncFailure};
//! use http::StatusCode;
//!
//! let failure = SyncFailure::from_response(
//!     Operation::Remove,
//!     StatusCode::FORBIDDEN,
//!     r#"{"message":"ok"}"#,
//! );
//! assert_eq!(failure.kind, FailureKind::Forbidden);
//! assert_eq!(failure.message, "You do not have permission to remove collaborators");
//! ```

mod category;
mod http;
pub mod messages;
mod types;

pub use category::{FailureKind, Operation};
pub use types::{SyncFailure, SyncResult};
