//! The match coordinator: roster and per-participant completion.

use std::collections::HashMap;

use tempo_protocol::{MatchId, UserId};

/// One active competitive match.
///
/// Tracks which users are playing and which of them have reported their
/// play complete. The aggregate decision — what to do once everyone has
/// finished — belongs to the lobby layer, which polls
/// [`all_completed`](Match::all_completed) after each completion signal.
#[derive(Debug, Clone)]
pub struct Match {
    id: MatchId,
    /// Participant → "has completed this round".
    participants: HashMap<UserId, bool>,
}

impl Match {
    /// Creates a match with the given roster, nobody completed yet.
    pub fn new(
        id: MatchId,
        participants: impl IntoIterator<Item = UserId>,
    ) -> Self {
        Self {
            id,
            participants: participants
                .into_iter()
                .map(|user| (user, false))
                .collect(),
        }
    }

    /// The match's unique id.
    pub fn id(&self) -> MatchId {
        self.id
    }

    /// Marks one participant's play as completed.
    ///
    /// Idempotent: marking an already-completed participant changes
    /// nothing, and a user id that is not in the roster is a silent
    /// skip. Returns `true` only when the flag actually flipped, so the
    /// lobby layer can decide whether to re-check the aggregate.
    pub fn mark_participant_completed(&mut self, user: UserId) -> bool {
        match self.participants.get_mut(&user) {
            Some(completed) if !*completed => {
                *completed = true;
                tracing::debug!(match_id = %self.id, %user, "participant completed");
                true
            }
            Some(_) => false,
            None => {
                tracing::debug!(
                    match_id = %self.id,
                    %user,
                    "completion signal from non-participant, skipped"
                );
                false
            }
        }
    }

    /// Whether a participant has completed. `None` if not in the roster.
    pub fn is_completed(&self, user: UserId) -> Option<bool> {
        self.participants.get(&user).copied()
    }

    /// Whether every participant has completed.
    ///
    /// An empty roster counts as completed — the lobby layer never keeps
    /// an empty match alive, but the degenerate answer should not block
    /// teardown if it does.
    pub fn all_completed(&self) -> bool {
        self.participants.values().all(|completed| *completed)
    }

    /// Clears all completion flags for the next round.
    pub fn reset_completion(&mut self) {
        for completed in self.participants.values_mut() {
            *completed = false;
        }
    }

    /// The number of participants.
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }
}

// =========================================================================
// Tests
// =========================================================================
