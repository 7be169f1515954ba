//! Outbound packet model.
//!
//! These are the messages the handlers push onto a session's outbound
//! queue. They are descriptors, not encoded frames: the packet layer
//! turns a `Presence { user_id, force }` into the full user-panel bytes
//! by reading the subject's session at send time.

use serde::{Deserialize, Serialize};

use crate::UserId;

/// An outbound message queued for one session.
///
/// `#[serde(tag = "type")]` gives the internally tagged JSON form, e.g.
/// `{ "type": "Notification", "text": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Packet {
    /// A one-shot popup shown to the recipient.
    ///
    /// Sent only to a session that just performed a mode switch, naming
    /// the mode it entered.
    Notification { text: String },

    /// The user panel of `user_id`, to be rendered by the recipient.
    ///
    /// `force = true` marks the panel as being about the recipient
    /// itself; `false` means it describes someone the recipient is
    /// observing.
    Presence { user_id: UserId, force: bool },

    /// The current cached statistics of `user_id`.
    ///
    /// Same `force` semantics as [`Packet::Presence`]. Always enqueued
    /// directly after the matching presence packet, in that order.
    Stats { user_id: UserId, force: bool },
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_json_format() {
        let pkt = Packet::Notification {
            text: "You switched to relax!".into(),
        };
        let json: serde_json::Value = serde_json::to_value(&pkt).unwrap();

        assert_eq!(json["type"], "Notification");
        assert_eq!(json["text"], "You switched to relax!");
    }

    #[test]
    fn test_presence_json_format() {
        let pkt = Packet::Presence {
            user_id: UserId(1001),
            force: true,
        };
        let json: serde_json::Value = serde_json::to_value(&pkt).unwrap();

        assert_eq!(json["type"], "Presence");
        assert_eq!(json["user_id"], 1001);
        assert_eq!(json["force"], true);
    }

    #[test]
    fn test_stats_round_trip() {
        let pkt = Packet::Stats {
            user_id: UserId(5),
            force: false,
        };
        let bytes = serde_json::to_vec(&pkt).unwrap();
        let decoded: Packet = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(pkt, decoded);
    }

    #[test]
    fn test_decode_unknown_packet_type_fails() {
        let unknown = r#"{"type": "Teleport", "x": 1}"#;
        let result: Result<Packet, _> = serde_json::from_str(unknown);
        assert!(result.is_err());
    }
}
