//! Sync Controller
//!
//! Binds store operations to HTTP calls. Every mutation follows
//! `idle -> in-flight -> {success -> refreshing -> idle | failed -> idle}`:
//! there is no retry, and the store only changes through a full refresh,
//! never by local insertion or removal.
//!
//! A failed refresh after a successful mutation overwrites the error slot;
//! the mutation's success is not remembered separately.

mod removal;

pub use removal::{Confirm, PendingRemoval, RemovalOutcome};

use crate::client::{HttpClient, HttpResponse, NetworkHttpClient};
use crate::session::SessionContext;
use crate::store::CollaboratorStore;
use crate::{ClientConfig, ClientError, ClientResult};
use shared::error::messages;
use shared::{
    Collaborator, CollaboratorDraft, CollaboratorPayload, ListEnvelope, Operation, SyncFailure,
    SyncResult,
};
use std::sync::Arc;

/// Orchestrates refresh/create/update/remove against the collaborators API
#[derive(Debug)]
pub struct SyncController<C: HttpClient> {
    http: C,
    config: ClientConfig,
    store: Arc<CollaboratorStore>,
}

impl SyncController<NetworkHttpClient> {
    /// Controller over the reqwest transport with an empty store
    pub fn from_config(config: ClientConfig) -> ClientResult<Self> {
        let http = config.build_http_client()?;
        Ok(Self::new(http, config))
    }
}

impl<C: HttpClient> SyncController<C> {
    pub fn new(http: C, config: ClientConfig) -> Self {
        Self::with_store(http, config, Arc::new(CollaboratorStore::new()))
    }

    pub fn with_store(http: C, config: ClientConfig, store: Arc<CollaboratorStore>) -> Self {
        Self {
            http,
            config,
            store,
        }
    }

    pub fn store(&self) -> &Arc<CollaboratorStore> {
        &self.store
    }

    pub fn http(&self) -> &C {
        &self.http
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    // ========== Refresh ==========

    /// Reload the active collaborators; returns how many were loaded.
    ///
    /// Without a token nothing is sent. Any failure leaves `items` as it was.
    pub async fn refresh(&self, session: &SessionContext) -> SyncResult<usize> {
        let bearer = match session.bearer() {
            Ok(bearer) => bearer,
            Err(failure) => return Err(self.fail(Operation::Fetch, failure).await),
        };

        self.store.begin_refresh().await;
        let result = self.fetch(bearer).await;
        self.store.finish_refresh(&result).await;

        match result {
            Ok(items) => {
                tracing::info!(count = items.len(), "Collaborators loaded");
                Ok(items.len())
            }
            Err(failure) => {
                tracing::warn!(
                    kind = %failure.kind,
                    message = %failure.message,
                    "Failed to load collaborators"
                );
                Err(failure)
            }
        }
    }

    async fn fetch(&self, bearer: &str) -> SyncResult<Vec<Collaborator>> {
        let path = format!("{}?ativo=true", self.config.collection_path());
        let response = self.http.get(&path, bearer).await.map_err(transport_failure)?;
        let response = check(Operation::Fetch, response)?;

        ListEnvelope::parse(&response.body).ok_or_else(|| {
            tracing::error!(body_len = response.body.len(), "Unexpected list envelope");
            SyncFailure::structural()
        })
    }

    // ========== Mutations ==========

    /// Create a collaborator, then refresh the list.
    pub async fn create(
        &self,
        session: &SessionContext,
        draft: &CollaboratorDraft,
    ) -> SyncResult<()> {
        let result = self.send_create(session, draft).await;
        self.settle(Operation::Create, session, result).await
    }

    async fn send_create(
        &self,
        session: &SessionContext,
        draft: &CollaboratorDraft,
    ) -> SyncResult<()> {
        let bearer = session.bearer()?;
        let payload = CollaboratorPayload::for_create(draft)?;
        tracing::debug!(payload = ?payload.redacted(), "Creating collaborator");

        let response = self
            .http
            .post(&self.config.collection_path(), bearer, &payload)
            .await
            .map_err(transport_failure)?;
        check(Operation::Create, response).map(drop)
    }

    /// Update a collaborator, then refresh the list.
    ///
    /// A blank draft password is left out of the request, keeping the
    /// current one. An unparsable hire date fails before anything is sent.
    pub async fn update(
        &self,
        id: i64,
        session: &SessionContext,
        draft: &CollaboratorDraft,
    ) -> SyncResult<()> {
        let result = self.send_update(id, session, draft).await;
        self.settle(Operation::Update, session, result).await
    }

    async fn send_update(
        &self,
        id: i64,
        session: &SessionContext,
        draft: &CollaboratorDraft,
    ) -> SyncResult<()> {
        let bearer = session.bearer()?;
        let payload = CollaboratorPayload::for_update(draft)?;
        tracing::debug!(id, payload = ?payload.redacted(), "Updating collaborator");

        let response = self
            .http
            .put(&self.config.item_path(id), bearer, &payload)
            .await
            .map_err(transport_failure)?;
        check(Operation::Update, response).map(drop)
    }

    // ========== Removal ==========

    /// Enter the pending-confirmation state for removing `id`.
    pub async fn request_removal(&self, id: i64) -> PendingRemoval {
        let name = self.store.display_name_for(id).await;
        PendingRemoval::new(id, messages::confirm_removal(&name))
    }

    /// Perform a confirmed removal, then refresh the list.
    pub async fn confirm_removal(
        &self,
        pending: PendingRemoval,
        session: &SessionContext,
    ) -> SyncResult<()> {
        let id = pending.id();
        let result = self.send_remove(id, session).await;
        self.settle(Operation::Remove, session, result).await
    }

    async fn send_remove(&self, id: i64, session: &SessionContext) -> SyncResult<()> {
        let bearer = session.bearer()?;
        tracing::debug!(id, "Removing collaborator");

        let response = self
            .http
            .delete(&self.config.item_path(id), bearer)
            .await
            .map_err(transport_failure)?;
        check(Operation::Remove, response).map(drop)
    }

    /// Ask for confirmation, then remove. Declining is a silent no-op.
    pub async fn remove<F>(
        &self,
        id: i64,
        session: &SessionContext,
        confirm: &F,
    ) -> SyncResult<RemovalOutcome>
    where
        F: Confirm + ?Sized,
    {
        let pending = self.request_removal(id).await;
        if !confirm.confirm(pending.prompt()) {
            pending.decline();
            return Ok(RemovalOutcome::Cancelled);
        }
        self.confirm_removal(pending, session)
            .await
            .map(|()| RemovalOutcome::Removed)
    }

    // ========== Settling ==========

    async fn settle(
        &self,
        op: Operation,
        session: &SessionContext,
        result: SyncResult<()>,
    ) -> SyncResult<()> {
        if let Err(failure) = result {
            return Err(self.fail(op, failure).await);
        }

        tracing::info!(%op, "Collaborator mutation succeeded");
        self.store.record(&Ok(())).await;
        if let Err(failure) = self.refresh(session).await {
            tracing::warn!(%op, message = %failure.message, "Refresh after mutation failed");
        }
        Ok(())
    }

    async fn fail(&self, op: Operation, failure: SyncFailure) -> SyncFailure {
        tracing::warn!(
            %op,
            kind = %failure.kind,
            reached_server = failure.kind.reached_server(),
            message = %failure.message,
            "Operation failed"
        );
        self.store.record(&Err(failure.clone())).await;
        failure
    }
}

/// Status first: a non-2xx response is classified before its body is used
fn check(op: Operation, response: HttpResponse) -> SyncResult<HttpResponse> {
    if response.is_success() {
        Ok(response)
    } else {
        Err(SyncFailure::from_response(op, response.status, &response.body))
    }
}

fn transport_failure(err: ClientError) -> SyncFailure {
    tracing::error!(error = %err, "Request did not complete");
    SyncFailure::transport(err.to_string())
}
