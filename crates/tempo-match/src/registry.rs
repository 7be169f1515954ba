//! The match registry: the shared id → live-match map.

use std::collections::HashMap;
use std::sync::Arc;

use tempo_protocol::{MatchId, UserId};
use tokio::sync::{Mutex, RwLock};

use crate::{Match, MatchError};

/// A clonable reference to one live match.
pub type MatchRef = Arc<Mutex<Match>>;

/// The shared map from match id to live match.
///
/// Same locking shape as the session registry: a read-mostly `RwLock`
/// map of `Arc`ed entries, each match behind its own mutex. A lookup
/// miss means the lobby already tore the match down — callers skip, they
/// don't error.
#[derive(Debug, Default)]
pub struct MatchRegistry {
    inner: RwLock<HashMap<MatchId, MatchRef>>,
}

impl MatchRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }

    /// Creates and registers a match with the given roster.
    ///
    /// # Errors
    /// Returns [`MatchError::AlreadyExists`] if the id is taken.
    pub async fn create(
        &self,
        id: MatchId,
        participants: impl IntoIterator<Item = UserId>,
    ) -> Result<MatchRef, MatchError> {
        let mut map = self.inner.write().await;
        if map.contains_key(&id) {
            return Err(MatchError::AlreadyExists(id));
        }

        let match_ref = Arc::new(Mutex::new(Match::new(id, participants)));
        map.insert(id, Arc::clone(&match_ref));
        tracing::info!(match_id = %id, "match created");
        Ok(match_ref)
    }

    /// Removes a match at teardown.
    ///
    /// # Errors
    /// Returns [`MatchError::NotFound`] if no match has this id.
    pub async fn remove(&self, id: MatchId) -> Result<(), MatchError> {
        match self.inner.write().await.remove(&id) {
            Some(_) => {
                tracing::info!(match_id = %id, "match removed");
                Ok(())
            }
            None => Err(MatchError::NotFound(id)),
        }
    }

    /// Looks up a live match by id.
    ///
    /// `None` means the match is gone — a stale match id on a session is
    /// stale state, not a fault.
    pub async fn lookup(&self, id: MatchId) -> Option<MatchRef> {
        self.inner.read().await.get(&id).cloned()
    }

    /// The number of live matches.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    /// Whether there are no live matches.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

// =========================================================================
// Tests
// =========================================================================
