//! Collaborator Store
//!
//! Holds the canonical list (`items`), a loading flag and a single error
//! slot. Only the sync controller settles results into it; each settle
//! writes every affected field under one lock acquisition, so readers
//! always observe a self-consistent snapshot.
//!
//! Outcomes are applied in the order they settle (last settled wins). There
//! is no request sequencing: two overlapping refreshes leave whichever
//! resolved last.

use shared::error::messages;
use shared::{Collaborator, SyncResult};
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct StoreState {
    items: Vec<Collaborator>,
    /// Refreshes currently in flight; `loading` is `in_flight > 0`
    in_flight: usize,
    error: Option<String>,
}

/// Point-in-time copy of the store
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreSnapshot {
    pub items: Vec<Collaborator>,
    pub loading: bool,
    pub error: Option<String>,
}

/// In-memory collaborator list plus loading and error state
#[derive(Debug, Default)]
pub struct CollaboratorStore {
    state: RwLock<StoreState>,
}

impl CollaboratorStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with a list, as if a refresh had already succeeded
    pub fn with_items(items: Vec<Collaborator>) -> Self {
        Self {
            state: RwLock::new(StoreState {
                items,
                ..Default::default()
            }),
        }
    }

    pub async fn snapshot(&self) -> StoreSnapshot {
        let state = self.state.read().await;
        StoreSnapshot {
            items: state.items.clone(),
            loading: state.in_flight > 0,
            error: state.error.clone(),
        }
    }

    pub async fn items(&self) -> Vec<Collaborator> {
        self.state.read().await.items.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.in_flight > 0
    }

    pub async fn error(&self) -> Option<String> {
        self.state.read().await.error.clone()
    }

    pub async fn find(&self, id: i64) -> Option<Collaborator> {
        self.state
            .read()
            .await
            .items
            .iter()
            .find(|c| c.id == id)
            .cloned()
    }

    /// Name used in the removal prompt, or a generic noun when unknown
    pub async fn display_name_for(&self, id: i64) -> String {
        self.find(id)
            .await
            .map(|c| c.name)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| messages::GENERIC_COLLABORATOR.to_string())
    }

    pub(crate) async fn begin_refresh(&self) {
        self.state.write().await.in_flight += 1;
    }

    /// Settle a refresh: success replaces the list wholesale and clears the
    /// error; failure sets the error and keeps the list.
    pub(crate) async fn finish_refresh(&self, result: &SyncResult<Vec<Collaborator>>) {
        let mut state = self.state.write().await;
        state.in_flight = state.in_flight.saturating_sub(1);
        match result {
            Ok(items) => {
                state.items = items.clone();
                state.error = None;
            }
            Err(failure) => state.error = Some(failure.message.clone()),
        }
    }

    /// Settle an outcome that does not carry list data
    pub(crate) async fn record(&self, result: &SyncResult<()>) {
        let mut state = self.state.write().await;
        state.error = result.as_ref().err().map(|f| f.message.clone());
    }
}
