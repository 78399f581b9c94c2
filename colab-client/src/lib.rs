//! Colab Client - collaborator administration over HTTP
//!
//! Keeps an in-memory list of collaborators in sync with the
//! `/api/v1/funcionarios` REST resource: refresh, create, update and
//! confirmed removal, each gated on a bearer token taken from an explicit
//! [`SessionContext`].

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod gate;
pub mod logger;
pub mod session;
pub mod store;

pub use client::{HttpClient, HttpResponse, NetworkHttpClient};
pub use config::ClientConfig;
pub use controller::{Confirm, PendingRemoval, RemovalOutcome, SyncController};
pub use error::{ClientError, ClientResult};
pub use gate::{can_remove, can_remove_from};
pub use session::{FileSessionStore, MemorySessionStore, SessionContext, SessionStore};
pub use store::{CollaboratorStore, StoreSnapshot};

// Re-export shared types for convenience
pub use shared::{
    Collaborator, CollaboratorDraft, CollaboratorPayload, FailureKind, Operation, Role,
    SyncFailure, SyncResult, WriteRole,
};
