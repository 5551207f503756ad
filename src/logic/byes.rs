//! Bye propagation: cascade automatic advancement through the knock-out bracket.

use crate::models::Tournament;

/// Resolve every outstanding bye and return the updated snapshot.
///
/// Idempotent. Repeats until a full pass changes nothing, then marks the
/// tournament complete if the final has been decided.
pub fn propagate_byes(tournament: &Tournament) -> Tournament {
    let mut next = tournament.clone();
    resolve_byes(&mut next);
    next
}

/// In-place form used by the builders and the progression engine.
pub(crate) fn resolve_byes(tournament: &mut Tournament) {
    while resolve_pass(tournament) {}
    tournament.refresh_completion();
}

/// One sweep over rounds 1..total_rounds. Returns true if anything changed.
fn resolve_pass(tournament: &mut Tournament) -> bool {
    let mut changed = false;
    for round in 1..tournament.total_rounds {
        let pairs = 1u32 << (tournament.total_rounds - round - 1);
        for parent in 0..pairs {
            changed |= resolve_pair(tournament, round, parent);
        }
    }
    changed
}

/// Feed matches `2 * parent` and `2 * parent + 1` of `round` into `parent` of `round + 1`.
fn resolve_pair(tournament: &mut Tournament, round: u32, parent: u32) -> bool {
    let (Some(a), Some(b), Some(target)) = (
        tournament.match_index(round, parent * 2),
        tournament.match_index(round, parent * 2 + 1),
        tournament.match_index(round + 1, parent),
    ) else {
        return false;
    };

    let first = &tournament.matches[a];
    let second = &tournament.matches[b];
    let first_winner = first.winner_id.filter(|_| first.is_complete);
    let second_winner = second.winner_id.filter(|_| second.is_complete);
    // Complete without a winner: this side will never send anyone.
    let first_empty = first.is_complete && first.winner_id.is_none();
    let second_empty = second.is_complete && second.winner_id.is_none();

    let next = &mut tournament.matches[target];
    let mut changed = false;

    if let (Some(w), None) = (first_winner, next.player1_id) {
        next.player1_id = Some(w);
        changed = true;
    }
    if let (Some(w), None) = (second_winner, next.player2_id) {
        next.player2_id = Some(w);
        changed = true;
    }

    if !next.is_complete {
        match (next.player1_id, next.player2_id) {
            (Some(p), None) if second_empty => {
                log::debug!("Round {} match {}: bye for {}", round + 1, parent, p);
                next.complete_with(Some(p));
                changed = true;
            }
            (None, Some(p)) if first_empty => {
                log::debug!("Round {} match {}: bye for {}", round + 1, parent, p);
                next.complete_with(Some(p));
                changed = true;
            }
            (None, None) if first_empty && second_empty => {
                next.complete_with(None);
                changed = true;
            }
            _ => {}
        }
    }
    changed
}
