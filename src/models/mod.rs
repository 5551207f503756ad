//! Data structures for the bracket: players, matches, groups, tournament snapshot.

mod game;
mod group;
mod id;
mod player;
mod tournament;

pub use game::{GameMatch, GROUP_ROUND};
pub use group::{Group, GroupStanding};
pub use id::{generate_id, GroupId, MatchId, PlayerId, TournamentId};
pub use player::Player;
pub use tournament::{rounds_for, Tournament, TournamentError};
