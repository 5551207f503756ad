//! Opaque identifiers for players, matches, groups and tournaments.

use uuid::Uuid;

/// Unique identifier for a player (used in matches and lookups).
pub type PlayerId = Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Unique identifier for a group.
pub type GroupId = Uuid;

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Fresh random id. Ids are only ever compared for equality.
pub fn generate_id() -> Uuid {
    Uuid::new_v4()
}
