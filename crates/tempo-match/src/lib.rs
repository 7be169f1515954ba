//! Competitive match state for Tempo.
//!
//! A match groups several sessions into one competitive round and
//! tracks, per participant, whether they have finished playing. The
//! lobby layer above this crate creates and destroys matches and decides
//! what happens when everyone is done; this crate owns the roster, the
//! completion flags, and the shared id → match map.

mod coordinator;
mod error;
mod registry;

pub use coordinator::Match;
pub use error::MatchError;
pub use registry::{MatchRef, MatchRegistry};
