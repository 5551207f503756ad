//! Group standings: win/loss records and ranking within a round-robin group.

use crate::models::{Group, GroupStanding};

/// One standing per group member (zero games included), best first.
///
/// Ranked by wins descending, then losses ascending. Full ties keep the
/// group's member order (the sort is stable).
pub fn group_standings(group: &Group) -> Vec<GroupStanding> {
    let mut standings: Vec<GroupStanding> = group
        .player_ids
        .iter()
        .map(|&id| GroupStanding::new(id))
        .collect();

    for m in group.matches.iter().filter(|m| m.is_complete) {
        let Some(winner) = m.winner_id else { continue };
        if let Some(s) = standings.iter_mut().find(|s| s.player_id == winner) {
            s.add_win();
        }
        if let Some(loser) = m.loser_id() {
            if let Some(s) = standings.iter_mut().find(|s| s.player_id == loser) {
                s.add_loss();
            }
        }
    }

    standings.sort_by(|a, b| b.wins.cmp(&a.wins).then(a.losses.cmp(&b.losses)));
    standings
}
