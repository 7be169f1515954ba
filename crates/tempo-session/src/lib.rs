//! Live session state for Tempo.
//!
//! This crate owns what the server knows about each connected player
//! while they are online:
//!
//! 1. **Session state** — the mutable action-state record ([`Session`])
//! 2. **Session registry** — the shared id → session map ([`SessionRegistry`])
//! 3. **Outbound queue** — the per-session packet sink ([`PacketSender`])
//! 4. **Stats cache seam** — the recompute collaborator ([`StatsCache`] trait)
//!
//! # How it fits in the stack
//!
//! ```text
//! Handlers (above)  ← look sessions up, mutate them, enqueue packets
//!     ↕
//! Session layer (this crate)  ← owns session state and its locking
//!     ↕
//! Protocol layer (below)  ← provides SessionId, StatusUpdate, Packet
//! ```
//!
//! # Concurrency
//!
//! The registry is a read-mostly `RwLock` map of clonable handles; each
//! session sits behind its own `Mutex`, so two sessions' updates never
//! contend with each other. Handlers clone a handle out of the registry,
//! release the registry lock, then lock just the one session they touch.

mod error;
mod registry;
mod session;
mod stats;

pub use error::SessionError;
pub use registry::SessionRegistry;
pub use session::{PacketSender, Session, SessionHandle};
pub use stats::{NoopStatsCache, StatsCache};
