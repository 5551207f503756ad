//! Round-robin groups and their derived standings.

use crate::models::game::GameMatch;
use crate::models::id::{generate_id, GroupId, PlayerId};
use serde::{Deserialize, Serialize};

/// A round-robin pool. Membership is fixed at creation; only matches mutate.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    pub player_ids: Vec<PlayerId>,
    pub matches: Vec<GameMatch>,
}

impl Group {
    /// New group with the full set of C(n, 2) round-robin matches.
    pub fn new(name: impl Into<String>, player_ids: Vec<PlayerId>) -> Self {
        let id = generate_id();
        let mut matches = Vec::new();
        for (i, &a) in player_ids.iter().enumerate() {
            for &b in &player_ids[i + 1..] {
                matches.push(GameMatch::group(id, matches.len() as u32, a, b));
            }
        }
        Self {
            id,
            name: name.into(),
            player_ids,
            matches,
        }
    }

    /// Display name for the group at `index`: "Group A", "Group B", ...
    pub fn name_for_index(index: usize) -> String {
        let letter = (b'A' + (index % 26) as u8) as char;
        format!("Group {letter}")
    }

    /// Every round-robin match has been decided.
    pub fn is_complete(&self) -> bool {
        self.matches.iter().all(|m| m.is_complete)
    }

    pub fn completed_matches(&self) -> usize {
        self.matches.iter().filter(|m| m.is_complete).count()
    }

    pub fn pending_matches(&self) -> impl Iterator<Item = &GameMatch> {
        self.matches.iter().filter(|m| !m.is_complete)
    }
}

/// Derived win/loss record of one player within a group. Never persisted.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupStanding {
    pub player_id: PlayerId,
    pub wins: u32,
    pub losses: u32,
    pub games_played: u32,
}

impl GroupStanding {
    pub fn new(player_id: PlayerId) -> Self {
        Self {
            player_id,
            wins: 0,
            losses: 0,
            games_played: 0,
        }
    }

    /// Record a win for this player.
    pub fn add_win(&mut self) {
        self.wins += 1;
        self.games_played += 1;
    }

    /// Record a loss for this player.
    pub fn add_loss(&mut self) {
        self.losses += 1;
        self.games_played += 1;
    }
}
