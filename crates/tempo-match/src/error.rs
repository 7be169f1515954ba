//! Error types for the match layer.

/// Errors that can occur during match lifecycle operations.
///
/// As with sessions, lookup misses are not errors — a completion signal
/// pointing at a torn-down match is stale state and gets skipped.
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    /// No match exists for the given id.
    #[error("match not found: {0}")]
    NotFound(tempo_protocol::MatchId),

    /// A match with this id is already registered.
    #[error("match {0} already exists")]
    AlreadyExists(tempo_protocol::MatchId),
}
