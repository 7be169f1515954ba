//! The match completion handler.

use tempo_match::MatchRegistry;
use tempo_protocol::SessionId;
use tempo_session::SessionRegistry;

use crate::{CompletionOutcome, SkipReason};

/// Signals that one session has finished its play in its current match.
///
/// The handler's whole contract is the single delegated
/// `mark_participant_completed` call: deciding what happens once every
/// participant is done belongs to the match coordinator and the lobby
/// layer above it. A session with no match, or a match id the lobby has
/// already torn down, is stale state and skips without effect.
pub async fn handle_match_complete(
    sessions: &SessionRegistry,
    matches: &MatchRegistry,
    sender: SessionId,
) -> CompletionOutcome {
    let Some(handle) = sessions.lookup(sender).await else {
        tracing::warn!(%sender, "match completion for unknown session, skipped");
        return CompletionOutcome::Skipped(SkipReason::SessionGone);
    };

    let (user_id, match_id) = {
        let session = handle.lock().await;
        (session.user_id, session.match_id)
    };

    let Some(match_id) = match_id else {
        return CompletionOutcome::Skipped(SkipReason::NotInMatch);
    };

    let Some(match_ref) = matches.lookup(match_id).await else {
        tracing::debug!(%match_id, %user_id, "completion for stale match id, skipped");
        return CompletionOutcome::Skipped(SkipReason::MatchGone);
    };

    match_ref.lock().await.mark_participant_completed(user_id);
    CompletionOutcome::Delegated { match_id }
}
