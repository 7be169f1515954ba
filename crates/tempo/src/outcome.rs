//! Named handler outcomes.
//!
//! Neither handler raises errors: a stale spectator id, a session with
//! no match, or a torn-down match are all expected conditions handled by
//! skipping. Skips are still *named* here instead of being silent, so
//! callers and tests can assert on the reason rather than on an absence
//! of effect.

use tempo_protocol::{MatchId, PlayMode};

/// Why a handler invocation did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The sender's session id did not resolve. The calling contract
    /// only invokes handlers for resolved sessions, so seeing this means
    /// the caller raced a disconnect.
    SessionGone,
    /// The session is not in a match.
    NotInMatch,
    /// The session's match id points at a match that no longer exists.
    MatchGone,
}

/// The result of one presence update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenceOutcome {
    /// State was applied and broadcast.
    Broadcast {
        /// How many sessions received the presence + stats pair
        /// (the sender plus every resolvable spectator).
        recipients: usize,
        /// The mode entered, when this update committed a mode switch.
        switched_to: Option<PlayMode>,
    },
    /// Nothing happened.
    Skipped(SkipReason),
}

/// The result of one match-completion signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// The completion was delegated to the match coordinator.
    Delegated {
        /// The match that received the signal.
        match_id: MatchId,
    },
    /// Nothing happened.
    Skipped(SkipReason),
}
