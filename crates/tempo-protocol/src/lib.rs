//! Domain and message types for Tempo.
//!
//! This crate defines the vocabulary the rest of the server speaks:
//!
//! - **Identity** ([`SessionId`], [`UserId`], [`MatchId`], [`BeatmapId`]) —
//!   newtype ids used as registry keys and log fields.
//! - **Action state** ([`ActionId`], [`Mods`], [`PlayMode`], [`GameMode`]) —
//!   what a connected player is currently doing and in which mode.
//! - **Messages** ([`StatusUpdate`] inbound, [`Packet`] outbound) — the
//!   decoded form of what crosses the session boundary.
//!
//! Wire framing and packet encoding live elsewhere; everything here is
//! already decoded. The types are serde-serializable so the encoding
//! layer can pick them up unchanged.

mod packets;
mod types;

pub use packets::Packet;
pub use types::{
    ActionId, BeatmapId, GameMode, MatchId, Mods, PlayMode, SessionId,
    StatusUpdate, UserId,
};
