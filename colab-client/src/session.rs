//! Session context and session stores
//!
//! The bearer token and the role live in a key-value store owned by the
//! embedding application. Operations never read that store themselves:
//! the caller captures a [`SessionContext`] and passes it in.

use crate::ClientResult;
use dashmap::DashMap;
use serde_json::{Map, Value};
use shared::{SyncFailure, SyncResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Key holding the bearer credential
pub const TOKEN_KEY: &str = "token";
/// Key holding the role string
pub const ROLE_KEY: &str = "role";

/// Synchronous key-value session storage
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> ClientResult<()>;
    fn remove(&self, key: &str) -> ClientResult<()>;
}

/// In-memory session store
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    values: DashMap<String, String>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with a token and a role
    pub fn with_login(token: &str, role: &str) -> Self {
        let store = Self::new();
        store.values.insert(TOKEN_KEY.to_string(), token.to_string());
        store.values.insert(ROLE_KEY.to_string(), role.to_string());
        store
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).map(|v| v.value().clone())
    }

    fn set(&self, key: &str, value: &str) -> ClientResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> ClientResult<()> {
        self.values.remove(key);
        Ok(())
    }
}

/// Session store persisted as a flat JSON object on disk
///
/// Reads go to the file every time so that changes made by another
/// process (e.g. a logout) are observed. A missing or corrupt file reads
/// as an empty session.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Map<String, Value> {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default()
    }

    fn save(&self, values: &Map<String, Value>) -> ClientResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(values)?)?;
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.load()
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    fn set(&self, key: &str, value: &str) -> ClientResult<()> {
        let mut values = self.load();
        values.insert(key.to_string(), Value::String(value.to_string()));
        self.save(&values)
    }

    fn remove(&self, key: &str) -> ClientResult<()> {
        let mut values = self.load();
        if values.remove(key).is_some() {
            self.save(&values)?;
        }
        Ok(())
    }
}

/// Read-only snapshot of the session, passed to every operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    pub token: Option<String>,
    pub role: Option<String>,
}

impl SessionContext {
    pub fn new(token: Option<String>, role: Option<String>) -> Self {
        Self { token, role }
    }

    /// Session with both values present
    pub fn authenticated(token: impl Into<String>, role: impl Into<String>) -> Self {
        Self::new(Some(token.into()), Some(role.into()))
    }

    /// Read token and role from a store at this moment
    pub fn capture(store: &dyn SessionStore) -> Self {
        Self::new(store.get(TOKEN_KEY), store.get(ROLE_KEY))
    }

    /// Bearer token, or the precondition failure when absent or empty
    pub fn bearer(&self) -> SyncResult<&str> {
        self.token
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or_else(SyncFailure::missing_token)
    }

    /// Whether the caller should send the user to the login entry point
    pub fn requires_login(&self) -> bool {
        self.bearer().is_err() || self.role.is_none()
    }

    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }
}
