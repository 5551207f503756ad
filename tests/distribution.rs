//! Integration tests for the group distribution planner.

use knockout_bracket::{plan_groups, GroupPlan};

#[test]
fn six_players_into_four_makes_two_groups_of_three() {
    assert_eq!(
        plan_groups(6, 4),
        Some(GroupPlan {
            group_count: 2,
            advancing_per_group: 2,
            group_sizes: vec![3, 3],
        })
    );
}

#[test]
fn first_fitting_group_count_wins() {
    let plan = plan_groups(12, 8).unwrap();
    assert_eq!(plan.group_count, 4);
    assert_eq!(plan.group_sizes, vec![3, 3, 3, 3]);
    assert_eq!(plan.advancing_per_group, 2);
}

#[test]
fn remainder_goes_to_the_first_groups() {
    let plan = plan_groups(7, 4).unwrap();
    assert_eq!(plan.group_sizes, vec![4, 3]);
}

#[test]
fn falls_back_to_groups_of_two() {
    // 3 groups do not divide 8, 2 groups would hold 6 players.
    let plan = plan_groups(11, 8).unwrap();
    assert_eq!(plan.group_count, 4);
    assert_eq!(plan.group_sizes, vec![3, 3, 3, 2]);
    assert_eq!(plan.advancing_per_group, 2);
}

#[test]
fn no_plan_without_a_smaller_bracket_or_enough_players() {
    assert_eq!(plan_groups(6, 8), None);
    assert_eq!(plan_groups(6, 6), None);
    assert_eq!(plan_groups(3, 2), None);
}

#[test]
fn plans_always_satisfy_the_constraints() {
    for players in 4..=60 {
        for bracket in [2, 4, 8, 16] {
            let Some(plan) = plan_groups(players, bracket) else {
                continue;
            };
            assert_eq!(plan.group_sizes.len(), plan.group_count);
            assert_eq!(plan.group_sizes.iter().sum::<usize>(), players);
            assert_eq!(plan.advancing_per_group * plan.group_count, bracket);
            for &size in &plan.group_sizes {
                assert!((2..=5).contains(&size), "{players}/{bracket}: {size}");
                assert!(size >= plan.advancing_per_group);
            }
        }
    }
}
