//! Tournament engine: group planning, bracket building, standings, progression.

mod bracket;
mod byes;
mod distribution;
mod progression;
mod setup;
mod standings;

pub use bracket::{
    build_direct, build_direct_with_rng, build_with_groups, build_with_groups_with_rng, round_name,
};
pub use byes::propagate_byes;
pub use distribution::{plan_groups, GroupPlan};
pub use progression::{check_and_advance_group_phase, select_group_winner, select_winner};
pub use setup::{
    bracket_options, effective_bracket_size, is_perfect_bracket, preview, requires_group_phase,
    start_tournament, start_tournament_with_rng, validate_setup, SetupPreview,
    PERFECT_BRACKET_SIZES,
};
pub use standings::group_standings;
