//! Role Model
//!
//! The server emits four role tags but only accepts three on writes.
//! [`Role`] is the read vocabulary, [`WriteRole`] the write vocabulary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role tag as returned by the server
///
/// Any tag outside the known four is kept verbatim in [`Role::Other`], so a
/// single unexpected value never rejects a whole list. A null or missing
/// tag reads as an empty `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum Role {
    Admin,
    Manager,
    Employee,
    /// Legacy tag, never accepted on writes
    Usuario,
    /// Unrecognized tag, displayed as emitted and written as `employee`
    Other(String),
}

impl Role {
    /// Raw wire tag
    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::Employee => "employee",
            Self::Usuario => "usuario",
            Self::Other(tag) => tag,
        }
    }

    /// Label shown in the role column (the raw tag, unmapped)
    pub fn label(&self) -> &str {
        self.as_str()
    }

    pub fn is_legacy(&self) -> bool {
        matches!(self, Self::Usuario)
    }
}

impl Default for Role {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<&str> for Role {
    fn from(tag: &str) -> Self {
        match tag {
            "admin" => Self::Admin,
            "manager" => Self::Manager,
            "employee" => Self::Employee,
            "usuario" => Self::Usuario,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<Option<String>> for Role {
    fn from(tag: Option<String>) -> Self {
        tag.as_deref().map(Self::from).unwrap_or_default()
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role tag accepted by the API on create/update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteRole {
    Admin,
    Manager,
    #[default]
    Employee,
}

impl WriteRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::Employee => "employee",
        }
    }
}

impl fmt::Display for WriteRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&Role> for WriteRole {
    fn from(role: &Role) -> Self {
        map_role_for_api(role.as_str())
    }
}

impl From<Role> for WriteRole {
    fn from(role: Role) -> Self {
        Self::from(&role)
    }
}

/// Map any role string onto the write vocabulary.
///
/// `admin` and `manager` pass through; everything else, including the
/// legacy `usuario`, the empty string and unknown tags, becomes `employee`.
/// Matching is exact and case-sensitive.
pub fn map_role_for_api(role: &str) -> WriteRole {
    match role {
        "admin" => WriteRole::Admin,
        "manager" => WriteRole::Manager,
        _ => WriteRole::Employee,
    }
}
