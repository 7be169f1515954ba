//! Core domain types: identities, action state, and the status update.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Identity types
// ---------------------------------------------------------------------------

/// A unique identifier for a connected session.
///
/// Stable for the lifetime of one connection. A user who reconnects gets
/// a fresh `SessionId` but keeps their [`UserId`].
///
/// `#[serde(transparent)]` keeps the JSON form a plain number, so a
/// `SessionId(42)` serializes as `42`, not `{"0":42}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S-{}", self.0)
    }
}

/// A unique identifier for a user account.
///
/// Unlike [`SessionId`], this survives reconnects — it is the key that
/// outbound presence and stats packets are framed around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u32);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U-{}", self.0)
    }
}

/// A unique identifier for an active competitive match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchId(pub u32);

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "M-{}", self.0)
    }
}

/// The id of the beatmap a session currently has open.
///
/// Negative values occur in the wild (unsubmitted maps), so this stays
/// signed. `0` means "no map".
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct BeatmapId(pub i32);

impl fmt::Display for BeatmapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// ActionId
// ---------------------------------------------------------------------------

/// The enumerated activity kind a session reports (idle, playing,
/// editing, spectating, ...).
///
/// Kept as a raw id rather than a closed enum: clients have grown new
/// action kinds over time and the server treats almost all of them
/// opaquely. Only the idle-like set matters to this core — see
/// [`ActionId::is_idle_like`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct ActionId(pub u8);

impl ActionId {
    /// Doing nothing in the menus.
    pub const IDLE: ActionId = ActionId(0);
    /// Marked away from keyboard.
    pub const AFK: ActionId = ActionId(1);
    /// In a solo play.
    pub const PLAYING: ActionId = ActionId(2);
    /// In the editor.
    pub const EDITING: ActionId = ActionId(3);
    /// Watching another player.
    pub const WATCHING: ActionId = ActionId(6);
    /// Playing inside a multiplayer match.
    pub const MULTIPLAYING: ActionId = ActionId(12);
    /// Client reported no meaningful action.
    pub const UNKNOWN: ActionId = ActionId(14);

    /// The idle-like actions: idle, afk, and unknown.
    ///
    /// For these the client sends no trailing space in its action text,
    /// so the mode suffix is appended without a separator ("fooon Relax"
    /// rather than "foo on Relax"). Every other action gets the
    /// space-separated suffix.
    pub fn is_idle_like(self) -> bool {
        matches!(self.0, 0 | 1 | 14)
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Mods + PlayMode
// ---------------------------------------------------------------------------

/// The active mod bitset a session reports with its status.
///
/// Most bits are opaque to the server; the two this core reads are the
/// relax and autopilot bits, which select the cached-stats variant.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Mods(pub u32);

impl Mods {
    /// No mods active.
    pub const NONE: Mods = Mods(0);
    /// The relax bit.
    pub const RELAX: u32 = 1 << 7;
    /// The autopilot bit.
    pub const AUTOPILOT: u32 = 1 << 13;

    /// Whether the relax bit is set.
    pub fn has_relax(self) -> bool {
        self.0 & Self::RELAX != 0
    }

    /// Whether the autopilot bit is set.
    pub fn has_autopilot(self) -> bool {
        self.0 & Self::AUTOPILOT != 0
    }

    /// Derives the play mode from the bitset, once.
    ///
    /// Relax takes priority over autopilot when a client manages to send
    /// both bits; everything else is vanilla. Handlers match on the
    /// returned [`PlayMode`] exhaustively instead of re-reading bits.
    pub fn play_mode(self) -> PlayMode {
        if self.has_relax() {
            PlayMode::Relax
        } else if self.has_autopilot() {
            PlayMode::Autopilot
        } else {
            PlayMode::Vanilla
        }
    }
}

/// The three mutually exclusive competitive modes.
///
/// Each has its own cached-statistics variant; switching between them is
/// what triggers a stats recompute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayMode {
    /// No alternate mode active.
    Vanilla,
    /// The relax mod is active.
    Relax,
    /// The autopilot mod is active.
    Autopilot,
}

impl PlayMode {
    /// The one-shot notification text sent to a player entering this mode.
    pub fn notification(self) -> &'static str {
        match self {
            PlayMode::Vanilla => "You switched to vanilla!",
            PlayMode::Relax => "You switched to relax!",
            PlayMode::Autopilot => "You switched to autopilot!",
        }
    }

    /// The action-text suffix for this mode, if any.
    ///
    /// Vanilla has none; the action text is used as the client sent it.
    pub fn suffix(self) -> Option<&'static str> {
        match self {
            PlayMode::Vanilla => None,
            PlayMode::Relax => Some("on Relax"),
            PlayMode::Autopilot => Some("on Autopilot"),
        }
    }
}

impl fmt::Display for PlayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlayMode::Vanilla => "vanilla",
            PlayMode::Relax => "relax",
            PlayMode::Autopilot => "autopilot",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// GameMode
// ---------------------------------------------------------------------------

/// The discipline a session is playing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default,
)]
pub enum GameMode {
    /// The standard mode.
    #[default]
    Osu,
    /// Taiko drums.
    Taiko,
    /// Catch the beat.
    Fruits,
    /// Piano keys.
    Mania,
}

impl GameMode {
    /// Decodes the numeric id the client sends (0-3).
    pub fn from_id(id: u8) -> Option<GameMode> {
        match id {
            0 => Some(GameMode::Osu),
            1 => Some(GameMode::Taiko),
            2 => Some(GameMode::Fruits),
            3 => Some(GameMode::Mania),
            _ => None,
        }
    }

    /// The numeric id used on the wire.
    pub fn id(self) -> u8 {
        match self {
            GameMode::Osu => 0,
            GameMode::Taiko => 1,
            GameMode::Fruits => 2,
            GameMode::Mania => 3,
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameMode::Osu => "osu",
            GameMode::Taiko => "taiko",
            GameMode::Fruits => "fruits",
            GameMode::Mania => "mania",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// StatusUpdate
// ---------------------------------------------------------------------------

/// A decoded status-update message from one client.
///
/// This is the input to the presence handler: the packet layer decodes
/// the raw change-action packet into this struct before the core ever
/// sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    /// The activity the client reports.
    pub action: ActionId,
    /// Free-form status text ("foo's beatmap [Insane]", etc.).
    pub text: String,
    /// Content hash of the active beatmap, empty when none.
    pub checksum: String,
    /// The active mod bitset.
    pub mods: Mods,
    /// The discipline being played.
    pub game_mode: GameMode,
    /// The id of the open beatmap.
    pub beatmap_id: BeatmapId,
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // =====================================================================
    // Identity types
    // =====================================================================

    #[test]
    fn test_session_id_serializes_as_plain_number() {
        let json = serde_json::to_string(&SessionId(42)).unwrap();
        assert_eq!(json, "42");
    }

    #[test]
    fn test_user_id_deserializes_from_plain_number() {
        let uid: UserId = serde_json::from_str("1001").unwrap();
        assert_eq!(uid, UserId(1001));
    }

    #[test]
    fn test_identity_display_prefixes() {
        assert_eq!(SessionId(7).to_string(), "S-7");
        assert_eq!(UserId(7).to_string(), "U-7");
        assert_eq!(MatchId(7).to_string(), "M-7");
        assert_eq!(BeatmapId(-1).to_string(), "-1");
    }

    #[test]
    fn test_beatmap_id_allows_negative_values() {
        let bid: BeatmapId = serde_json::from_str("-123").unwrap();
        assert_eq!(bid, BeatmapId(-123));
    }

    // =====================================================================
    // ActionId
    // =====================================================================

    #[test]
    fn test_action_id_idle_like_set_is_0_1_14() {
        assert!(ActionId::IDLE.is_idle_like());
        assert!(ActionId::AFK.is_idle_like());
        assert!(ActionId::UNKNOWN.is_idle_like());
    }

    #[test]
    fn test_action_id_gameplay_actions_are_not_idle_like() {
        assert!(!ActionId::PLAYING.is_idle_like());
        assert!(!ActionId::EDITING.is_idle_like());
        assert!(!ActionId::WATCHING.is_idle_like());
        assert!(!ActionId::MULTIPLAYING.is_idle_like());
    }

    // =====================================================================
    // Mods / PlayMode
    // =====================================================================

    #[test]
    fn test_mods_relax_bit_is_128() {
        assert_eq!(Mods::RELAX, 128);
        assert!(Mods(128).has_relax());
        assert!(!Mods(128).has_autopilot());
    }

    #[test]
    fn test_mods_autopilot_bit_is_8192() {
        assert_eq!(Mods::AUTOPILOT, 8192);
        assert!(Mods(8192).has_autopilot());
        assert!(!Mods(8192).has_relax());
    }

    #[test]
    fn test_mods_other_bits_ignored_by_flag_checks() {
        // Hidden + hardrock style bits should not read as relax/autopilot.
        let mods = Mods(0b0001_1010);
        assert!(!mods.has_relax());
        assert!(!mods.has_autopilot());
        assert_eq!(mods.play_mode(), PlayMode::Vanilla);
    }

    #[test]
    fn test_play_mode_derivation_relax() {
        assert_eq!(Mods(Mods::RELAX).play_mode(), PlayMode::Relax);
    }

    #[test]
    fn test_play_mode_derivation_autopilot() {
        assert_eq!(Mods(Mods::AUTOPILOT).play_mode(), PlayMode::Autopilot);
    }

    #[test]
    fn test_play_mode_relax_wins_over_autopilot() {
        // A client sending both bits resolves to relax.
        let both = Mods(Mods::RELAX | Mods::AUTOPILOT);
        assert_eq!(both.play_mode(), PlayMode::Relax);
    }

    #[test]
    fn test_play_mode_suffix_texts() {
        assert_eq!(PlayMode::Vanilla.suffix(), None);
        assert_eq!(PlayMode::Relax.suffix(), Some("on Relax"));
        assert_eq!(PlayMode::Autopilot.suffix(), Some("on Autopilot"));
    }

    #[test]
    fn test_play_mode_notification_texts() {
        assert_eq!(PlayMode::Relax.notification(), "You switched to relax!");
        assert_eq!(
            PlayMode::Autopilot.notification(),
            "You switched to autopilot!"
        );
        assert_eq!(
            PlayMode::Vanilla.notification(),
            "You switched to vanilla!"
        );
    }

    // =====================================================================
    // GameMode
    // =====================================================================

    #[test]
    fn test_game_mode_id_round_trip() {
        for mode in [
            GameMode::Osu,
            GameMode::Taiko,
            GameMode::Fruits,
            GameMode::Mania,
        ] {
            assert_eq!(GameMode::from_id(mode.id()), Some(mode));
        }
    }

    #[test]
    fn test_game_mode_from_id_rejects_unknown() {
        assert_eq!(GameMode::from_id(4), None);
        assert_eq!(GameMode::from_id(255), None);
    }

    // =====================================================================
    // StatusUpdate
    // =====================================================================

    #[test]
    fn test_status_update_round_trip() {
        let update = StatusUpdate {
            action: ActionId::PLAYING,
            text: "xi - Blue Zenith [FOUR DIMENSIONS]".into(),
            checksum: "a84050da9b68ca1bd8e2d1700b9c6ca8".into(),
            mods: Mods(Mods::RELAX),
            game_mode: GameMode::Osu,
            beatmap_id: BeatmapId(727),
        };
        let bytes = serde_json::to_vec(&update).unwrap();
        let decoded: StatusUpdate = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(update, decoded);
    }

    #[test]
    fn test_status_update_decode_missing_field_fails() {
        let wrong = r#"{"action": 2, "text": "foo"}"#;
        let result: Result<StatusUpdate, _> = serde_json::from_str(wrong);
        assert!(result.is_err());
    }
}
