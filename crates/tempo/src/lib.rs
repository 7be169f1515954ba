//! # Tempo
//!
//! Presence-and-completion core of a rhythm-game session server.
//!
//! Tempo reacts to a connected client's status update — committing mode
//! switches, invalidating cached stats, and fanning the fresh state out
//! to the client and everyone spectating it — and forwards a client's
//! "play complete" signal to its match. The surrounding system (packet
//! framing, login/logout, spectate transitions, lobby lifecycle, the
//! stats service itself) plugs in around these handlers.
//!
//! ```rust,ignore
//! use tempo::{handle_status_update, handle_match_complete};
//!
//! let outcome =
//!     handle_status_update(&sessions, &stats, sender_id, update).await;
//! ```

mod completion;
mod error;
mod outcome;
mod presence;

pub use completion::handle_match_complete;
pub use error::TempoError;
pub use outcome::{CompletionOutcome, PresenceOutcome, SkipReason};
pub use presence::handle_status_update;

/// Common imports for server binaries and tests.
pub mod prelude {
    pub use tempo_match::{Match, MatchRegistry};
    pub use tempo_protocol::{
        ActionId, BeatmapId, GameMode, MatchId, Mods, Packet, PlayMode,
        SessionId, StatusUpdate, UserId,
    };
    pub use tempo_session::{
        NoopStatsCache, Session, SessionHandle, SessionRegistry, StatsCache,
    };

    pub use crate::{
        CompletionOutcome, PresenceOutcome, SkipReason, TempoError,
        handle_match_complete, handle_status_update,
    };
}

/// Installs the default tracing subscriber.
///
/// Reads `RUST_LOG` for the filter, falling back to `info`. Safe to call
/// more than once; later calls are ignored.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
