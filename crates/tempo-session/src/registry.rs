//! The session registry: the shared id → live-session map.

use std::collections::HashMap;

use tempo_protocol::SessionId;
use tokio::sync::RwLock;

use crate::{PacketSender, Session, SessionError, SessionHandle};

/// The shared map from session id to live session handle.
///
/// Read-mostly: every inbound packet does a lookup, while inserts and
/// removals only happen at login and disconnect. Lookups clone the
/// handle out and drop the map lock immediately, so no caller ever holds
/// the registry lock while waiting on a session's own mutex.
///
/// A lookup miss is an expected condition, not an error — the connection
/// layer removes sessions concurrently, and a stale id simply means
/// "already gone".
#[derive(Debug, Default)]
pub struct SessionRegistry {
    inner: RwLock<HashMap<SessionId, SessionHandle>>,
}

impl SessionRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }

    /// Registers a freshly created session together with its outbound
    /// queue.
    ///
    /// # Errors
    /// Returns [`SessionError::AlreadyRegistered`] if the id is taken —
    /// the connection layer guarantees unique ids, so hitting this means
    /// a lifecycle bug upstream.
    pub async fn register(
        &self,
        session: Session,
        outbound: PacketSender,
    ) -> Result<SessionHandle, SessionError> {
        let id = session.id;
        let mut map = self.inner.write().await;
        if map.contains_key(&id) {
            return Err(SessionError::AlreadyRegistered(id));
        }

        let handle = SessionHandle::new(session, outbound);
        map.insert(id, handle.clone());
        tracing::info!(%id, "session registered");
        Ok(handle)
    }

    /// Removes a session at disconnect.
    ///
    /// # Errors
    /// Returns [`SessionError::NotFound`] if no session has this id.
    pub async fn unregister(
        &self,
        id: SessionId,
    ) -> Result<(), SessionError> {
        let removed = self.inner.write().await.remove(&id);
        match removed {
            Some(_) => {
                tracing::info!(%id, "session unregistered");
                Ok(())
            }
            None => Err(SessionError::NotFound(id)),
        }
    }

    /// Looks up a live session by id.
    ///
    /// Returns a cloned handle; `None` means the session is gone (or
    /// never existed), which callers treat as a silent skip.
    pub async fn lookup(&self, id: SessionId) -> Option<SessionHandle> {
        self.inner.read().await.get(&id).cloned()
    }

    /// Adds `spectator` to `host`'s spectator set.
    ///
    /// # Errors
    /// Returns [`SessionError::NotFound`] if the host is gone.
    pub async fn add_spectator(
        &self,
        host: SessionId,
        spectator: SessionId,
    ) -> Result<(), SessionError> {
        let handle = self
            .lookup(host)
            .await
            .ok_or(SessionError::NotFound(host))?;
        handle.lock().await.spectators.insert(spectator);
        Ok(())
    }

    /// Removes `spectator` from `host`'s spectator set.
    ///
    /// Removing an id that was never in the set is a no-op.
    ///
    /// # Errors
    /// Returns [`SessionError::NotFound`] if the host is gone.
    pub async fn remove_spectator(
        &self,
        host: SessionId,
        spectator: SessionId,
    ) -> Result<(), SessionError> {
        let handle = self
            .lookup(host)
            .await
            .ok_or(SessionError::NotFound(host))?;
        handle.lock().await.spectators.remove(&spectator);
        Ok(())
    }

    /// The number of registered sessions.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    /// Whether the registry is empty.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use tempo_protocol::UserId;
    use tokio::sync::mpsc;

    use super::*;

    fn sid(id: u64) -> SessionId {
        SessionId(id)
    }

    /// Registers a throwaway session, discarding its receive side.
    /// Fine here: none of these tests assert on delivered packets.
    async fn register_session(
        registry: &SessionRegistry,
        id: u64,
    ) -> SessionHandle {
        let (tx, _rx) = mpsc::unbounded_channel();
        registry
            .register(Session::new(sid(id), UserId(id as u32), "test"), tx)
            .await
            .expect("registration should succeed")
    }

    #[tokio::test]
    async fn test_register_then_lookup_returns_handle() {
        let registry = SessionRegistry::new();

        register_session(&registry, 1).await;

        let handle = registry.lookup(sid(1)).await.expect("should resolve");
        assert_eq!(handle.id(), sid(1));
        assert_eq!(registry.len().await, 1);
    }

    #[tokio::test]
    async fn test_register_duplicate_id_returns_error() {
        let registry = SessionRegistry::new();
        register_session(&registry, 1).await;

        let (tx, _rx) = mpsc::unbounded_channel();
        let result = registry
            .register(Session::new(sid(1), UserId(2), "other"), tx)
            .await;

        assert!(matches!(
            result,
            Err(SessionError::AlreadyRegistered(id)) if id == sid(1)
        ));
    }

    #[tokio::test]
    async fn test_lookup_unknown_id_returns_none() {
        let registry = SessionRegistry::new();

        assert!(registry.lookup(sid(99)).await.is_none());
    }

    #[tokio::test]
    async fn test_unregister_removes_session() {
        let registry = SessionRegistry::new();
        register_session(&registry, 1).await;

        registry.unregister(sid(1)).await.expect("should succeed");

        assert!(registry.lookup(sid(1)).await.is_none());
        assert!(registry.is_empty().await);
    }

    #[tokio::test]
    async fn test_unregister_unknown_id_returns_not_found() {
        let registry = SessionRegistry::new();

        let result = registry.unregister(sid(7)).await;

        assert!(matches!(
            result,
            Err(SessionError::NotFound(id)) if id == sid(7)
        ));
    }

    #[tokio::test]
    async fn test_add_spectator_updates_host_set() {
        let registry = SessionRegistry::new();
        let host = register_session(&registry, 1).await;
        register_session(&registry, 2).await;

        registry
            .add_spectator(sid(1), sid(2))
            .await
            .expect("should succeed");

        assert!(host.lock().await.spectators.contains(&sid(2)));
    }

    #[tokio::test]
    async fn test_remove_spectator_updates_host_set() {
        let registry = SessionRegistry::new();
        let host = register_session(&registry, 1).await;
        registry.add_spectator(sid(1), sid(2)).await.unwrap();

        registry
            .remove_spectator(sid(1), sid(2))
            .await
            .expect("should succeed");

        assert!(host.lock().await.spectators.is_empty());
    }

    #[tokio::test]
    async fn test_add_spectator_unknown_host_returns_not_found() {
        let registry = SessionRegistry::new();

        let result = registry.add_spectator(sid(1), sid(2)).await;

        assert!(matches!(
            result,
            Err(SessionError::NotFound(id)) if id == sid(1)
        ));
    }

    #[tokio::test]
    async fn test_lookup_after_concurrent_unregister_misses_cleanly() {
        // A handle cloned before removal keeps working; fresh lookups miss.
        let registry = SessionRegistry::new();
        let handle = register_session(&registry, 1).await;

        registry.unregister(sid(1)).await.unwrap();

        assert!(registry.lookup(sid(1)).await.is_none());
        // The already-held handle still reaches the session state.
        assert_eq!(handle.lock().await.user_id, UserId(1));
    }
}
