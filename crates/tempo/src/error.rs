//! Unified error type for the Tempo meta-crate.

use tempo_match::MatchError;
use tempo_session::SessionError;

/// Top-level error that wraps the sub-crate errors.
///
/// The handlers themselves never return errors — their skip conditions
/// are named outcomes — but the lifecycle operations a server binary
/// drives (register/unregister, match create/remove) do. With `#[from]`
/// on each variant, `?` converts the sub-crate errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum TempoError {
    /// A session-lifecycle error.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// A match-lifecycle error.
    #[error(transparent)]
    Match(#[from] MatchError),
}
