//! Setup phase: validate the entry list and start the tournament in the right mode.

use crate::logic::bracket::{build_direct_with_rng, build_with_groups_with_rng};
use crate::logic::distribution::{plan_groups, GroupPlan};
use crate::models::{Tournament, TournamentError};
use rand::Rng;
use serde::Serialize;

/// Field sizes that go straight into a knock-out bracket. Anything else needs groups.
pub const PERFECT_BRACKET_SIZES: [usize; 4] = [2, 4, 8, 16];

/// Bracket size used when a group phase is required but none of the options fit.
const FALLBACK_BRACKET_SIZE: usize = 4;

pub fn is_perfect_bracket(player_count: usize) -> bool {
    PERFECT_BRACKET_SIZES.contains(&player_count)
}

pub fn requires_group_phase(player_count: usize) -> bool {
    player_count >= 3 && !is_perfect_bracket(player_count)
}

/// Bracket sizes the group phase may feed: the perfect sizes below the field size.
pub fn bracket_options(player_count: usize) -> Vec<usize> {
    if !requires_group_phase(player_count) {
        return Vec::new();
    }
    PERFECT_BRACKET_SIZES
        .iter()
        .copied()
        .filter(|&size| size < player_count)
        .collect()
}

/// `selected` if it is a valid option, else the largest option.
pub fn effective_bracket_size(player_count: usize, selected: usize) -> usize {
    let options = bracket_options(player_count);
    if options.contains(&selected) {
        selected
    } else {
        options.last().copied().unwrap_or(FALLBACK_BRACKET_SIZE)
    }
}

/// Match counts for a planned tournament, shown before it starts.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupPreview {
    pub group_plan: Option<GroupPlan>,
    pub group_matches: usize,
    pub ko_rounds: u32,
    pub ko_matches: usize,
    pub total_matches: usize,
}

/// Preview for `player_count` entrants; `None` if no tournament can be built.
pub fn preview(player_count: usize, selected_bracket_size: usize) -> Option<SetupPreview> {
    if player_count < 2 || player_count == 3 {
        return None;
    }
    let (group_plan, bracket_size) = if is_perfect_bracket(player_count) {
        (None, player_count)
    } else {
        let size = effective_bracket_size(player_count, selected_bracket_size);
        (Some(plan_groups(player_count, size)?), size)
    };
    let group_matches: usize = group_plan
        .iter()
        .flat_map(|p| p.group_sizes.iter())
        .map(|&n| n * (n - 1) / 2)
        .sum();
    let ko_matches = bracket_size - 1;
    Some(SetupPreview {
        group_plan,
        group_matches,
        ko_rounds: bracket_size.trailing_zeros(),
        ko_matches,
        total_matches: group_matches + ko_matches,
    })
}

/// Trim and check the tournament name and entry list. Returns the trimmed names.
pub fn validate_setup(name: &str, player_names: &[String]) -> Result<Vec<String>, TournamentError> {
    if name.trim().is_empty() {
        return Err(TournamentError::MissingName);
    }
    let mut names: Vec<String> = Vec::with_capacity(player_names.len());
    for raw in player_names {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TournamentError::EmptyPlayerName);
        }
        if names.iter().any(|n| n == trimmed) {
            return Err(TournamentError::DuplicatePlayerName(trimmed.to_string()));
        }
        names.push(trimmed.to_string());
    }
    match names.len() {
        count @ (0 | 1) => Err(TournamentError::NotEnoughPlayers { count }),
        3 => Err(TournamentError::UnsupportedPlayerCount(3)),
        _ => Ok(names),
    }
}

/// Validate and build: direct knock-out for a perfect field, group phase otherwise.
pub fn start_tournament(
    name: &str,
    player_names: &[String],
    selected_bracket_size: usize,
) -> Result<Tournament, TournamentError> {
    start_tournament_with_rng(name, player_names, selected_bracket_size, &mut rand::thread_rng())
}

/// [`start_tournament`] with a caller-supplied RNG.
pub fn start_tournament_with_rng<R: Rng + ?Sized>(
    name: &str,
    player_names: &[String],
    selected_bracket_size: usize,
    rng: &mut R,
) -> Result<Tournament, TournamentError> {
    let names = validate_setup(name, player_names)?;
    let name = name.trim();
    if is_perfect_bracket(names.len()) {
        build_direct_with_rng(name, &names, rng)
    } else {
        let size = effective_bracket_size(names.len(), selected_bracket_size);
        build_with_groups_with_rng(name, &names, size, rng)
    }
}
