//! Group distribution planner: how many groups, how big, how many advance.

use serde::{Deserialize, Serialize};

const MIN_GROUP_SIZE: usize = 3;
const MAX_GROUP_SIZE: usize = 5;
const FALLBACK_MIN_GROUP_SIZE: usize = 2;

/// A partition of the players into round-robin groups.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupPlan {
    pub group_count: usize,
    /// Players per group that enter the knock-out bracket.
    pub advancing_per_group: usize,
    /// Sizes in group order; the first `player_count % group_count` are one larger.
    pub group_sizes: Vec<usize>,
}

/// Plan the group phase for `player_count` players feeding a bracket of `bracket_size`.
///
/// Prefers groups of 3-5 (ascending group count, first fit wins). Falls back to
/// groups of 2-5 scanning from 2 groups. `None` if the bracket would not be
/// smaller than the field, if there are fewer than 4 players, or if nothing fits.
pub fn plan_groups(player_count: usize, bracket_size: usize) -> Option<GroupPlan> {
    if bracket_size >= player_count || player_count < 4 {
        return None;
    }

    let preferred = player_count.div_ceil(MAX_GROUP_SIZE)..=player_count / MIN_GROUP_SIZE;
    let plan = preferred
        .filter_map(|group_count| candidate(player_count, bracket_size, group_count, MIN_GROUP_SIZE))
        .next()
        .or_else(|| {
            (2..=player_count / 2)
                .filter_map(|group_count| {
                    candidate(player_count, bracket_size, group_count, FALLBACK_MIN_GROUP_SIZE)
                })
                .next()
        });

    match &plan {
        Some(p) => log::debug!(
            "Group plan for {} players / bracket {}: {} groups {:?}, {} advancing each",
            player_count,
            bracket_size,
            p.group_count,
            p.group_sizes,
            p.advancing_per_group
        ),
        None => log::debug!(
            "No group plan for {} players / bracket {}",
            player_count,
            bracket_size
        ),
    }
    plan
}

/// Evaluate one group count against the divisibility and size constraints.
fn candidate(
    player_count: usize,
    bracket_size: usize,
    group_count: usize,
    min_size: usize,
) -> Option<GroupPlan> {
    if group_count == 0 || bracket_size % group_count != 0 {
        return None;
    }
    let advancing_per_group = bracket_size / group_count;
    let base = player_count / group_count;
    let remainder = player_count % group_count;
    let group_sizes: Vec<usize> = (0..group_count)
        .map(|i| if i < remainder { base + 1 } else { base })
        .collect();

    // Sizes differ by at most one: the smallest is `base`, the largest is the first.
    let smallest = base;
    let largest = group_sizes[0];
    if smallest >= advancing_per_group && smallest >= min_size && largest <= MAX_GROUP_SIZE {
        Some(GroupPlan {
            group_count,
            advancing_per_group,
            group_sizes,
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_rejects_non_dividing_group_count() {
        assert_eq!(candidate(9, 4, 3, MIN_GROUP_SIZE), None);
    }

    #[test]
    fn candidate_spreads_remainder_over_first_groups() {
        let plan = candidate(11, 4, 2, FALLBACK_MIN_GROUP_SIZE);
        // 11 / 2 -> sizes 6 and 5, too big
        assert_eq!(plan, None);
        let plan = candidate(7, 4, 2, FALLBACK_MIN_GROUP_SIZE).unwrap();
        assert_eq!(plan.group_sizes, vec![4, 3]);
        assert_eq!(plan.advancing_per_group, 2);
    }
}
