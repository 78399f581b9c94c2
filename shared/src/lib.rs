//! Shared types for the collaborator admin client
//!
//! Wire models, the role and CPF normalization rules, the list envelope and
//! the failure taxonomy. Nothing in this crate performs I/O.

pub mod cpf;
pub mod error;
pub mod models;
pub mod response;

// Re-exports
pub use cpf::format_cpf;
pub use error::{FailureKind, Operation, SyncFailure, SyncResult};
pub use http;
pub use models::{
    Collaborator, CollaboratorDraft, CollaboratorPayload, InputError, Role, WriteRole,
    map_role_for_api,
};
pub use response::{ErrorBody, ListEnvelope};
