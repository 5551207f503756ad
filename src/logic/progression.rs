//! Progression engine: record results and advance players through the tournament.
//!
//! Every entry point takes the current snapshot by reference and returns a new
//! one. Requests that cannot apply (unknown ids, a match that is not playable,
//! a winner who is not in the match) return an unchanged copy.

use crate::logic::byes::resolve_byes;
use crate::logic::standings::group_standings;
use crate::models::{GroupId, MatchId, PlayerId, Tournament};

/// Record the winner of a knock-out match and move them into the next round.
pub fn select_winner(tournament: &Tournament, match_id: MatchId, winner_id: PlayerId) -> Tournament {
    let mut next = tournament.clone();
    if !apply_knockout_result(&mut next, match_id, winner_id) {
        return next;
    }
    resolve_byes(&mut next);
    next
}

/// Record the winner of a group match, then seed the bracket if the group phase is over.
pub fn select_group_winner(
    tournament: &Tournament,
    group_id: GroupId,
    match_id: MatchId,
    winner_id: PlayerId,
) -> Tournament {
    let mut next = tournament.clone();
    let Some(m) = next
        .groups
        .iter_mut()
        .find(|g| g.id == group_id)
        .and_then(|g| g.matches.iter_mut().find(|m| m.id == match_id))
    else {
        log::debug!("Ignoring result for unknown group match {}", match_id);
        return next;
    };
    if !m.is_playable() || !m.has_player(winner_id) {
        log::debug!("Ignoring result for group match {}: not playable by {}", match_id, winner_id);
        return next;
    }
    m.complete_with(Some(winner_id));
    advance_group_phase(&mut next);
    next
}

/// Seed round 1 of the bracket from group standings once every group match is decided.
pub fn check_and_advance_group_phase(tournament: &Tournament) -> Tournament {
    let mut next = tournament.clone();
    advance_group_phase(&mut next);
    next
}

/// Returns false (and leaves the tournament untouched) if the result cannot apply.
fn apply_knockout_result(tournament: &mut Tournament, match_id: MatchId, winner_id: PlayerId) -> bool {
    let Some(index) = tournament.matches.iter().position(|m| m.id == match_id) else {
        log::debug!("Ignoring result for unknown match {}", match_id);
        return false;
    };
    let m = &mut tournament.matches[index];
    if !m.is_playable() || !m.has_player(winner_id) {
        log::debug!("Ignoring result for match {}: not playable by {}", match_id, winner_id);
        return false;
    }
    m.complete_with(Some(winner_id));
    let (round, position) = (m.round, m.position);

    if let Some(parent) = tournament.match_index(round + 1, position / 2) {
        let parent = &mut tournament.matches[parent];
        if position % 2 == 0 {
            parent.player1_id = Some(winner_id);
        } else {
            parent.player2_id = Some(winner_id);
        }
    }
    true
}

fn advance_group_phase(tournament: &mut Tournament) {
    if !tournament.has_group_phase || tournament.group_phase_complete {
        return;
    }
    if !tournament.groups.iter().all(|g| g.is_complete()) {
        return;
    }

    let seeded = seeded_order(tournament);
    for m in tournament.matches.iter_mut().filter(|m| m.round == 1) {
        let slot = m.position as usize * 2;
        m.player1_id = seeded.get(slot).copied();
        m.player2_id = seeded.get(slot + 1).copied();
    }
    tournament.group_phase_complete = true;
    tournament.current_round = 1;
    log::info!(
        "Group phase of \"{}\" complete: {} players seeded into the bracket",
        tournament.name,
        seeded.len()
    );
}

/// All group winners in group order, then all runners-up, and so on.
fn seeded_order(tournament: &Tournament) -> Vec<PlayerId> {
    let standings: Vec<_> = tournament.groups.iter().map(group_standings).collect();
    (0..tournament.advancing_per_group)
        .flat_map(|rank| standings.iter().filter_map(move |s| s.get(rank)))
        .map(|s| s.player_id)
        .collect()
}
