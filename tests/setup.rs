//! Integration tests for entry validation and tournament start.

use knockout_bracket::{
    bracket_options, effective_bracket_size, preview, requires_group_phase,
    start_tournament_with_rng, validate_setup, TournamentError,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn numbered(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("P{i}")).collect()
}

#[test]
fn three_players_are_rejected() {
    assert_eq!(
        validate_setup("Cup", &names(&["A", "B", "C"])).unwrap_err(),
        TournamentError::UnsupportedPlayerCount(3)
    );
    assert_eq!(preview(3, 2), None);
}

#[test]
fn names_are_trimmed_and_must_be_unique() {
    assert_eq!(
        validate_setup("Cup", &names(&[" A ", "B"])).unwrap(),
        names(&["A", "B"])
    );
    assert_eq!(
        validate_setup("Cup", &names(&["A", " A"])).unwrap_err(),
        TournamentError::DuplicatePlayerName("A".to_string())
    );
    assert_eq!(
        validate_setup("Cup", &names(&["A", "  "])).unwrap_err(),
        TournamentError::EmptyPlayerName
    );
    assert_eq!(
        validate_setup("  ", &names(&["A", "B"])).unwrap_err(),
        TournamentError::MissingName
    );
    assert_eq!(
        validate_setup("Cup", &names(&["A"])).unwrap_err(),
        TournamentError::NotEnoughPlayers { count: 1 }
    );
}

#[test]
fn bracket_options_are_smaller_perfect_sizes() {
    assert_eq!(bracket_options(6), vec![2, 4]);
    assert_eq!(bracket_options(12), vec![2, 4, 8]);
    assert_eq!(bracket_options(40), vec![2, 4, 8, 16]);
    assert!(bracket_options(8).is_empty());
    assert!(bracket_options(2).is_empty());
    assert!(requires_group_phase(5));
    assert!(!requires_group_phase(16));
}

#[test]
fn unavailable_selection_falls_back_to_largest_option() {
    assert_eq!(effective_bracket_size(6, 2), 2);
    assert_eq!(effective_bracket_size(6, 8), 4);
    assert_eq!(effective_bracket_size(20, 32), 16);
}

#[test]
fn preview_counts_matches() {
    let direct = preview(8, 0).unwrap();
    assert_eq!(direct.group_plan, None);
    assert_eq!(direct.group_matches, 0);
    assert_eq!(direct.ko_rounds, 3);
    assert_eq!(direct.ko_matches, 7);

    let groups = preview(6, 4).unwrap();
    assert_eq!(groups.group_plan.as_ref().unwrap().group_count, 2);
    assert_eq!(groups.group_matches, 6);
    assert_eq!(groups.ko_rounds, 2);
    assert_eq!(groups.ko_matches, 3);
    assert_eq!(groups.total_matches, 9);
}

#[test]
fn start_picks_the_mode_from_the_field_size() {
    let mut rng = StdRng::seed_from_u64(8);

    let direct = start_tournament_with_rng(" Cup ", &numbered(16), 4, &mut rng).unwrap();
    assert_eq!(direct.name, "Cup");
    assert!(!direct.has_group_phase);
    assert_eq!(direct.bracket_size, 16);

    let grouped = start_tournament_with_rng("Cup", &numbered(6), 8, &mut rng).unwrap();
    assert!(grouped.has_group_phase);
    assert_eq!(grouped.bracket_size, 4);

    let err = start_tournament_with_rng("Cup", &numbered(3), 2, &mut rng).unwrap_err();
    assert_eq!(err, TournamentError::UnsupportedPlayerCount(3));
}
