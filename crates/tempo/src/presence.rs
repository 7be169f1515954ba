//! The presence update handler.
//!
//! One inbound status update drives three things, in order: a possible
//! relax/autopilot mode switch (with its stats-cache invalidation), a
//! possible game-mode switch (ditto), and the unconditional sync of the
//! remaining action fields — followed by a presence + stats broadcast to
//! the sender and its spectators.

use tempo_protocol::{
    ActionId, Packet, PlayMode, SessionId, StatusUpdate,
};
use tempo_session::{SessionRegistry, StatsCache};

use crate::{PresenceOutcome, SkipReason};

/// Applies one status update and broadcasts the result.
///
/// Contract, matching the long-standing client behavior:
///
/// - The mode-switch block runs only when the requested relax bit
///   differs from the stored one. A request that flips only the
///   autopilot bit does not retrigger it; the stored autopilot flag (and
///   the action text) stay as they are until the next relax-bit change.
/// - Action text is written only inside the mode-switch block. The
///   unconditional sync below covers action id, checksum, mods, and
///   beatmap id — not text. Both quirks are load-bearing for existing
///   clients; do not "fix" them here.
/// - When both the mode switch and the game-mode switch fire, the
///   vanilla recompute runs in addition to the mode-specific one.
///   Recomputes are idempotent, so the duplicate is not deduplicated.
///
/// Spectator ids that no longer resolve are skipped silently; per
/// recipient, the presence packet is always enqueued before the stats
/// packet. The sender's session mutex is held across the whole
/// mutate-and-broadcast sequence, so concurrent updates for the same
/// session cannot interleave their field writes.
pub async fn handle_status_update<S: StatsCache>(
    sessions: &SessionRegistry,
    stats: &S,
    sender: SessionId,
    update: StatusUpdate,
) -> PresenceOutcome {
    let Some(handle) = sessions.lookup(sender).await else {
        tracing::warn!(%sender, "status update for unknown session, skipped");
        return PresenceOutcome::Skipped(SkipReason::SessionGone);
    };

    let mut session = handle.lock().await;

    // Mode switch: gated on the relax bit alone.
    let mut switched_to = None;
    if update.mods.has_relax() != session.relax {
        session.commit_mode_switch(update.mods);

        let mode = update.mods.play_mode();
        handle.enqueue(Packet::Notification {
            text: mode.notification().to_owned(),
        });
        session.action_text =
            suffixed_action_text(mode, update.action, &update.text);
        match mode {
            PlayMode::Relax => stats.recompute_relax(&session).await,
            PlayMode::Autopilot => stats.recompute_autopilot(&session).await,
            PlayMode::Vanilla => stats.recompute_vanilla(&session).await,
        }
        switched_to = Some(mode);
    }

    // Game-mode switch, independent of the above.
    if update.game_mode != session.game_mode {
        session.game_mode = update.game_mode;
        stats.recompute_vanilla(&session).await;
    }

    // Always sync action id, checksum, mods, and beatmap id.
    session.action = update.action;
    session.checksum = update.checksum;
    session.mods = update.mods;
    session.beatmap_id = update.beatmap_id;

    // Broadcast to the sender and every still-resolvable spectator.
    // Snapshot the spectator set first: another connection's
    // spectate/unspectate can mutate it while we resolve handles.
    let spectators: Vec<SessionId> =
        session.spectators.iter().copied().collect();
    let mut recipients = vec![handle.clone()];
    for spectator in spectators {
        if let Some(spectator) = sessions.lookup(spectator).await {
            recipients.push(spectator);
        }
    }

    let user_id = session.user_id;
    for recipient in &recipients {
        // Only the sender's own copy is forced.
        let force = recipient.id() == sender;
        recipient.enqueue(Packet::Presence { user_id, force });
        recipient.enqueue(Packet::Stats { user_id, force });
    }

    tracing::info!(
        username = %session.username,
        action = %session.action,
        text = %session.action_text,
        checksum = %session.checksum,
        beatmap = %session.beatmap_id,
        "action changed"
    );

    PresenceOutcome::Broadcast {
        recipients: recipients.len(),
        switched_to,
    }
}

/// Builds the stored action text for a mode-switch branch.
///
/// Idle-like actions carry no trailing space in their client-sent text,
/// and the suffix is appended as-is; every other action gets a space
/// before the suffix. Vanilla keeps the requested text unmodified.
fn suffixed_action_text(
    mode: PlayMode,
    action: ActionId,
    requested: &str,
) -> String {
    match mode.suffix() {
        Some(suffix) if action.is_idle_like() => {
            format!("{requested}{suffix}")
        }
        Some(suffix) => format!("{requested} {suffix}"),
        None => requested.to_owned(),
    }
}
