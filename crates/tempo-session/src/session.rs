//! Session types: one connected player's live state and its handle.

use std::collections::HashSet;
use std::sync::Arc;

use tempo_protocol::{
    ActionId, BeatmapId, GameMode, MatchId, Mods, Packet, SessionId, UserId,
};
use tokio::sync::{Mutex, MutexGuard, mpsc};

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// One connected player's server-side state record.
///
/// Created by the connection layer at login, destroyed at disconnect.
/// This crate and the handlers above it only mutate fields of an
/// existing session, never create or destroy one mid-connection.
///
/// Only the owning session's own status updates may overwrite the action
/// fields; nothing mutates another session's action state.
#[derive(Debug, Clone)]
pub struct Session {
    /// Stable for the lifetime of the connection.
    pub id: SessionId,
    /// The account behind the connection.
    pub user_id: UserId,
    /// Immutable after creation.
    pub username: String,

    /// What the player is currently doing.
    pub action: ActionId,
    /// Free-form status text. Only rewritten by a mode switch — see the
    /// presence handler for why this is not synced on every update.
    pub action_text: String,
    /// Content hash of the active beatmap, empty when none.
    pub checksum: String,
    /// The full mod bitset as last reported.
    pub mods: Mods,
    /// Whether the relax mod is committed. Never set together with
    /// `autopilot`.
    pub relax: bool,
    /// Whether the autopilot mod is committed. Never set together with
    /// `relax`.
    pub autopilot: bool,
    /// The discipline being played.
    pub game_mode: GameMode,
    /// The open beatmap.
    pub beatmap_id: BeatmapId,

    /// The match this session is playing in, if any.
    pub match_id: Option<MatchId>,
    /// Sessions currently observing this one.
    pub spectators: HashSet<SessionId>,
}

impl Session {
    /// Creates a fresh session in the idle state.
    pub fn new(
        id: SessionId,
        user_id: UserId,
        username: impl Into<String>,
    ) -> Self {
        Self {
            id,
            user_id,
            username: username.into(),
            action: ActionId::IDLE,
            action_text: String::new(),
            checksum: String::new(),
            mods: Mods::NONE,
            relax: false,
            autopilot: false,
            game_mode: GameMode::Osu,
            beatmap_id: BeatmapId(0),
            match_id: None,
            spectators: HashSet::new(),
        }
    }

    /// Commits a relax/autopilot transition from a requested bitset.
    ///
    /// The relax bit is stored as requested; the autopilot bit is stored
    /// only when relax is not also requested, which keeps the two flags
    /// mutually exclusive (relax wins, matching the branch priority of
    /// [`Mods::play_mode`]).
    pub fn commit_mode_switch(&mut self, requested: Mods) {
        self.relax = requested.has_relax();
        self.autopilot = requested.has_autopilot() && !self.relax;
    }
}

// ---------------------------------------------------------------------------
// SessionHandle
// ---------------------------------------------------------------------------

/// Channel sender for delivering outbound packets to one session's
/// connection task.
pub type PacketSender = mpsc::UnboundedSender<Packet>;

/// A clonable handle to one live session.
///
/// Pairs the shared session state with its outbound packet queue. The
/// registry hands these out; cloning is cheap (two `Arc` bumps), so
/// callers clone a handle and release the registry lock before touching
/// the session itself.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    id: SessionId,
    session: Arc<Mutex<Session>>,
    outbound: PacketSender,
}

impl SessionHandle {
    /// Wraps a session and its outbound queue into a handle.
    pub fn new(session: Session, outbound: PacketSender) -> Self {
        Self {
            id: session.id,
            session: Arc::new(Mutex::new(session)),
            outbound,
        }
    }

    /// The session's id, readable without locking.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Locks the session state for reading or mutation.
    ///
    /// The lock is per-session: holding it serializes updates for this
    /// session only, never for unrelated ones.
    pub async fn lock(&self) -> MutexGuard<'_, Session> {
        self.session.lock().await
    }

    /// Queues an outbound packet for this session.
    ///
    /// Infallible from the caller's perspective: a closed channel means
    /// the connection task is already gone, and a packet to a gone
    /// connection is dropped silently.
    pub fn enqueue(&self, packet: Packet) {
        let _ = self.outbound.send(packet);
    }
}

// =========================================================================
// Tests
// =========================================================================
