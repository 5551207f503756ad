//! Bracket builder: direct knock-out brackets and group-phase tournaments.

use crate::logic::byes::resolve_byes;
use crate::logic::distribution::plan_groups;
use crate::models::{GameMatch, Group, Player, Tournament, TournamentError};
use rand::seq::SliceRandom;
use rand::Rng;

/// Build a knock-out bracket straight from the player list (shuffled).
pub fn build_direct(name: &str, player_names: &[String]) -> Result<Tournament, TournamentError> {
    build_direct_with_rng(name, player_names, &mut rand::thread_rng())
}

/// [`build_direct`] with a caller-supplied RNG for the seeding shuffle.
///
/// The bracket is padded to the next power of two. Round-1 matches with one
/// player are byes (completed with that player as winner), matches with none
/// are completed without a winner; byes are then cascaded.
pub fn build_direct_with_rng<R: Rng + ?Sized>(
    name: &str,
    player_names: &[String],
    rng: &mut R,
) -> Result<Tournament, TournamentError> {
    if player_names.len() < 2 {
        return Err(TournamentError::NotEnoughPlayers {
            count: player_names.len(),
        });
    }
    let players = create_players(player_names);
    let mut shuffled = players.clone();
    shuffled.shuffle(rng);

    let bracket_size = players.len().next_power_of_two();
    let mut tournament = Tournament::new(name, players, bracket_size);
    tournament.matches = empty_bracket(tournament.total_rounds);

    for m in tournament.matches.iter_mut().filter(|m| m.round == 1) {
        let slot = m.position as usize * 2;
        m.player1_id = shuffled.get(slot).map(|p| p.id);
        m.player2_id = shuffled.get(slot + 1).map(|p| p.id);
        match (m.player1_id, m.player2_id) {
            (Some(p), None) | (None, Some(p)) => m.complete_with(Some(p)),
            (None, None) => m.complete_with(None),
            (Some(_), Some(_)) => {}
        }
    }

    resolve_byes(&mut tournament);
    log::info!(
        "Created knock-out tournament \"{}\": {} players, bracket of {}, {} rounds",
        tournament.name,
        tournament.players.len(),
        tournament.bracket_size,
        tournament.total_rounds
    );
    Ok(tournament)
}

/// Build a tournament that starts with a round-robin group phase.
pub fn build_with_groups(
    name: &str,
    player_names: &[String],
    bracket_size: usize,
) -> Result<Tournament, TournamentError> {
    build_with_groups_with_rng(name, player_names, bracket_size, &mut rand::thread_rng())
}

/// [`build_with_groups`] with a caller-supplied RNG for the group draw.
///
/// Players are shuffled and dealt into groups in order of the plan's sizes.
/// The knock-out bracket is created empty; group results seed round 1 later.
pub fn build_with_groups_with_rng<R: Rng + ?Sized>(
    name: &str,
    player_names: &[String],
    bracket_size: usize,
    rng: &mut R,
) -> Result<Tournament, TournamentError> {
    if bracket_size < 2 || !bracket_size.is_power_of_two() {
        return Err(TournamentError::InvalidBracketSize(bracket_size));
    }
    let plan = plan_groups(player_names.len(), bracket_size).ok_or(
        TournamentError::NoGroupDistribution {
            player_count: player_names.len(),
            bracket_size,
        },
    )?;

    let players = create_players(player_names);
    let mut shuffled = players.clone();
    shuffled.shuffle(rng);

    let mut remaining = shuffled.iter();
    let groups: Vec<Group> = plan
        .group_sizes
        .iter()
        .enumerate()
        .map(|(index, &size)| {
            let ids = remaining.by_ref().take(size).map(|p| p.id).collect();
            Group::new(Group::name_for_index(index), ids)
        })
        .collect();

    let mut tournament = Tournament::new(name, players, bracket_size);
    tournament.matches = empty_bracket(tournament.total_rounds);
    tournament.current_round = 0;
    tournament.has_group_phase = true;
    tournament.group_phase_complete = false;
    tournament.groups = groups;
    tournament.advancing_per_group = plan.advancing_per_group;

    log::info!(
        "Created group tournament \"{}\": {} players in {} groups, {} advance each into a bracket of {}",
        tournament.name,
        tournament.players.len(),
        plan.group_count,
        plan.advancing_per_group,
        bracket_size
    );
    Ok(tournament)
}

/// Display name for a knock-out round, counted back from the final.
pub fn round_name(round: u32, total_rounds: u32) -> String {
    match total_rounds.checked_sub(round) {
        Some(0) => "Final".to_string(),
        Some(1) => "Semi-Finals".to_string(),
        Some(2) => "Quarter-Finals".to_string(),
        _ => format!("Round {}", round),
    }
}

fn create_players(names: &[String]) -> Vec<Player> {
    names.iter().map(Player::new).collect()
}

/// All knock-out matches with empty slots: 2^(total - r) matches in round r.
fn empty_bracket(total_rounds: u32) -> Vec<GameMatch> {
    (1..=total_rounds)
        .flat_map(|round| {
            let count = 1u32 << (total_rounds - round);
            (0..count).map(move |position| GameMatch::knockout(round, position))
        })
        .collect()
}
