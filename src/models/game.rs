//! Match record shared by the group phase (round 0) and the knock-out rounds.

use crate::models::id::{generate_id, GroupId, MatchId, PlayerId};
use serde::{Deserialize, Serialize};

/// Round number used for every group-phase match.
pub const GROUP_ROUND: u32 = 0;

/// A single 1v1 match.
///
/// Knock-out matches are addressed by `(round, position)`: the match at
/// `position` in round `r` feeds the match at `position / 2` in round `r + 1`,
/// into slot 1 when `position` is even and slot 2 when it is odd.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameMatch {
    pub id: MatchId,
    /// 0 for group play, 1..=total_rounds for knock-out rounds.
    pub round: u32,
    /// 0-based slot within the round (or within the group for round 0).
    pub position: u32,
    pub player1_id: Option<PlayerId>,
    pub player2_id: Option<PlayerId>,
    pub player1_score: Option<u32>,
    pub player2_score: Option<u32>,
    /// None if not yet played (or if this is an empty bye slot).
    pub winner_id: Option<PlayerId>,
    pub is_complete: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<GroupId>,
}

impl GameMatch {
    /// Empty knock-out match at `(round, position)`.
    pub fn knockout(round: u32, position: u32) -> Self {
        Self {
            id: generate_id(),
            round,
            position,
            player1_id: None,
            player2_id: None,
            player1_score: None,
            player2_score: None,
            winner_id: None,
            is_complete: false,
            group_id: None,
        }
    }

    /// Round-robin match between two members of a group.
    pub fn group(group_id: GroupId, position: u32, player1: PlayerId, player2: PlayerId) -> Self {
        Self {
            player1_id: Some(player1),
            player2_id: Some(player2),
            group_id: Some(group_id),
            ..Self::knockout(GROUP_ROUND, position)
        }
    }

    /// Both player slots are filled.
    pub fn is_populated(&self) -> bool {
        self.player1_id.is_some() && self.player2_id.is_some()
    }

    /// True if `player_id` occupies one of the two slots.
    pub fn has_player(&self, player_id: PlayerId) -> bool {
        self.player1_id == Some(player_id) || self.player2_id == Some(player_id)
    }

    /// Populated, not yet decided: the only state a user may resolve.
    pub fn is_playable(&self) -> bool {
        self.is_populated() && !self.is_complete
    }

    /// The player in the other slot from `winner_id`, if any.
    pub fn loser_id(&self) -> Option<PlayerId> {
        let winner = self.winner_id?;
        if self.player1_id == Some(winner) {
            self.player2_id
        } else {
            self.player1_id
        }
    }

    /// Mark complete with the given winner.
    pub fn complete_with(&mut self, winner_id: Option<PlayerId>) {
        self.winner_id = winner_id;
        self.is_complete = true;
    }
}
