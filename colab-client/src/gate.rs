//! Authorization gate for destructive actions
//!
//! Shapes client affordances only (e.g. enabling the remove button). The
//! backend stays the authority; a `true` here grants nothing by itself.
//! Evaluate on every render: the stored role can change between renders.

use crate::session::{ROLE_KEY, SessionContext, SessionStore};

/// Role allowed to remove collaborators
pub const ADMIN_ROLE: &str = "admin";

/// True iff the role is exactly `admin` (case-sensitive)
pub fn is_admin_role(role: Option<&str>) -> bool {
    role == Some(ADMIN_ROLE)
}

/// Gate over a captured session
pub fn can_remove(session: &SessionContext) -> bool {
    is_admin_role(session.role())
}

/// Gate read straight from the store; never cached
pub fn can_remove_from(store: &dyn SessionStore) -> bool {
    is_admin_role(store.get(ROLE_KEY).as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemorySessionStore;

    #[test]
    fn test_only_exact_admin_passes() {
        assert!(is_admin_role(Some("admin")));
        for role in ["Admin", "ADMIN", "administrator", " admin", "manager", "employee", "usuario", ""] {
            assert!(!is_admin_role(Some(role)), "{role}");
        }
        assert!(!is_admin_role(None));
    }

    #[test]
    fn test_can_remove_session() {
        assert!(can_remove(&SessionContext::authenticated("t", "admin")));
        assert!(!can_remove(&SessionContext::authenticated("t", "manager")));
        assert!(!can_remove(&SessionContext::default()));
    }

    #[test]
    fn test_store_is_reread_each_call() {
        let store = MemorySessionStore::with_login("t", "admin");
        assert!(can_remove_from(&store));

        store.set(ROLE_KEY, "employee").unwrap();
        assert!(!can_remove_from(&store));

        store.remove(ROLE_KEY).unwrap();
        assert!(!can_remove_from(&store));
    }
}
