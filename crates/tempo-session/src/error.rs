//! Error types for the session layer.

/// Errors that can occur during session registration.
///
/// Lookup misses are deliberately NOT here: a stale session id is an
/// expected condition handled by skipping, so `lookup` returns `Option`
/// rather than a `Result`. These errors only surface from the lifecycle
/// operations the connection layer drives.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// No session exists for the given id.
    #[error("session not found: {0}")]
    NotFound(tempo_protocol::SessionId),

    /// A session with this id is already registered. The connection
    /// layer hands out unique ids, so this indicates a lifecycle bug.
    #[error("session {0} already registered")]
    AlreadyRegistered(tempo_protocol::SessionId),
}
