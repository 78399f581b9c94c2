//! Removal confirmation step
//!
//! `request_removal` yields a [`PendingRemoval`]: the pending-confirmation
//! state. It is consumed either by `confirm_removal` (which performs the
//! call) or by [`PendingRemoval::decline`], which has no effect at all.

/// Removal awaiting the user's confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a pending removal must be confirmed or declined"]
pub struct PendingRemoval {
    id: i64,
    prompt: String,
}

impl PendingRemoval {
    pub(crate) fn new(id: i64, prompt: String) -> Self {
        Self { id, prompt }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    /// Question to put to the user, naming the target collaborator
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Drop the removal; no request, no state change
    pub fn decline(self) {
        tracing::info!(id = self.id, "Removal cancelled by user");
    }
}

/// How a removal request ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalOutcome {
    Removed,
    /// User declined the confirmation; not an error
    Cancelled,
}

/// Interactive yes/no confirmation
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}
