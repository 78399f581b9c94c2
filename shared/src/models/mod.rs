//! Data models
//!
//! Read model ([`Collaborator`]) and write model ([`CollaboratorPayload`])
//! are distinct types; [`CollaboratorDraft`] is the form-shaped input the
//! write model is built from. All IDs are `i64`.

pub mod collaborator;
pub mod payload;
pub mod role;

// Re-exports
pub use collaborator::*;
pub use payload::*;
pub use role::*;
