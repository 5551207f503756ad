//! Knock-out bracket organiser: library with models, engine logic and snapshot persistence.

pub mod config;
pub mod logic;
pub mod models;
pub mod session;
pub mod store;

pub use config::StoreConfig;
pub use logic::{
    bracket_options, build_direct, build_direct_with_rng, build_with_groups,
    build_with_groups_with_rng, check_and_advance_group_phase, effective_bracket_size,
    group_standings, is_perfect_bracket, plan_groups, preview, propagate_byes,
    requires_group_phase, round_name, select_group_winner, select_winner, start_tournament,
    start_tournament_with_rng, validate_setup, GroupPlan, SetupPreview, PERFECT_BRACKET_SIZES,
};
pub use models::{
    generate_id, GameMatch, Group, GroupId, GroupStanding, MatchId, Player, PlayerId, Tournament,
    TournamentError, TournamentId, GROUP_ROUND,
};
pub use session::{SessionError, TournamentSession};
pub use store::{SnapshotStore, StoreError};
