//! Integration tests for group standings.

use knockout_bracket::{group_standings, Group, GroupStanding, PlayerId};
use uuid::Uuid;

fn ids(n: usize) -> Vec<PlayerId> {
    (0..n).map(|_| Uuid::new_v4()).collect()
}

/// Decide the match between `a` and `b` in favour of `winner`.
fn decide(group: &mut Group, a: PlayerId, b: PlayerId, winner: PlayerId) {
    let m = group
        .matches
        .iter_mut()
        .find(|m| m.has_player(a) && m.has_player(b))
        .unwrap();
    m.complete_with(Some(winner));
}

#[test]
fn every_member_listed_before_any_game() {
    let players = ids(4);
    let group = Group::new("Group A", players.clone());
    let standings = group_standings(&group);
    let expected: Vec<_> = players.iter().map(|&id| GroupStanding::new(id)).collect();
    assert_eq!(standings, expected);
}

#[test]
fn ranks_by_wins_then_fewer_losses() {
    let p = ids(4);
    let mut group = Group::new("Group A", p.clone());
    decide(&mut group, p[0], p[3], p[3]);
    decide(&mut group, p[1], p[3], p[3]);
    decide(&mut group, p[2], p[3], p[3]);
    decide(&mut group, p[1], p[2], p[2]);
    decide(&mut group, p[0], p[1], p[0]);

    let s = group_standings(&group);
    let order: Vec<_> = s.iter().map(|s| s.player_id).collect();
    // p3 3-0; p2 1-1 and p0 1-1 tie; p1 0-3.
    assert_eq!(order, vec![p[3], p[0], p[2], p[1]]);
    assert_eq!(s[0].games_played, 3);
    assert_eq!(s[3].losses, 3);
}

#[test]
fn fewer_losses_break_equal_wins() {
    let p = ids(3);
    let mut group = Group::new("Group A", p.clone());
    decide(&mut group, p[0], p[1], p[1]);
    decide(&mut group, p[1], p[2], p[2]);
    // p1 1-1, p2 1-0, p0 0-1.
    let order: Vec<_> = group_standings(&group).iter().map(|s| s.player_id).collect();
    assert_eq!(order, vec![p[2], p[1], p[0]]);
}

#[test]
fn full_ties_keep_member_order() {
    let p = ids(3);
    let mut group = Group::new("Group A", p.clone());
    decide(&mut group, p[0], p[1], p[0]);
    decide(&mut group, p[1], p[2], p[1]);
    decide(&mut group, p[0], p[2], p[2]);
    for _ in 0..5 {
        let order: Vec<_> = group_standings(&group).iter().map(|s| s.player_id).collect();
        assert_eq!(order, p);
    }
}

#[test]
fn open_matches_do_not_count() {
    let p = ids(3);
    let group = Group::new("Group A", p.clone());
    assert!(group_standings(&group).iter().all(|s| s.games_played == 0));
}
