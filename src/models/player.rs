//! Player data structure.

use crate::models::id::{generate_id, PlayerId};
use serde::{Deserialize, Serialize};

/// A player in the tournament. Immutable once the tournament is created.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

impl Player {
    /// Create a new player with the given name and a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            name: name.into(),
        }
    }
}
