//! Session: holds the current snapshot, routes user actions to the engine and
//! persists every change. This is the only layer that touches storage.

use crate::logic::{select_group_winner, select_winner, start_tournament};
use crate::models::{GroupId, MatchId, PlayerId, Tournament, TournamentError};
use crate::store::{SnapshotStore, StoreError};

/// Errors from starting a tournament: either the setup is invalid or saving failed.
#[derive(Debug)]
pub enum SessionError {
    Setup(TournamentError),
    Store(StoreError),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::Setup(e) => write!(f, "{}", e),
            SessionError::Store(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<TournamentError> for SessionError {
    fn from(e: TournamentError) -> Self {
        SessionError::Setup(e)
    }
}

impl From<StoreError> for SessionError {
    fn from(e: StoreError) -> Self {
        SessionError::Store(e)
    }
}

pub struct TournamentSession {
    store: SnapshotStore,
    tournament: Option<Tournament>,
}

impl TournamentSession {
    /// Load whatever the store holds (possibly nothing).
    pub fn open(store: SnapshotStore) -> Self {
        let tournament = store.load();
        if let Some(t) = &tournament {
            log::info!("Resumed tournament \"{}\" ({})", t.name, t.id);
        }
        Self { store, tournament }
    }

    pub fn tournament(&self) -> Option<&Tournament> {
        self.tournament.as_ref()
    }

    /// Start a new tournament, replacing any current one.
    pub fn start(
        &mut self,
        name: &str,
        player_names: &[String],
        bracket_size: usize,
    ) -> Result<&Tournament, SessionError> {
        let tournament = start_tournament(name, player_names, bracket_size)?;
        self.store.save(&tournament)?;
        Ok(self.tournament.insert(tournament))
    }

    /// Record a knock-out result. `Ok(false)` if nothing changed.
    pub fn select_winner(&mut self, match_id: MatchId, winner_id: PlayerId) -> Result<bool, StoreError> {
        self.apply(|t| select_winner(t, match_id, winner_id))
    }

    /// Record a group result. `Ok(false)` if nothing changed.
    pub fn select_group_winner(
        &mut self,
        group_id: GroupId,
        match_id: MatchId,
        winner_id: PlayerId,
    ) -> Result<bool, StoreError> {
        self.apply(|t| select_group_winner(t, group_id, match_id, winner_id))
    }

    /// Drop the current tournament from memory and storage.
    pub fn reset(&mut self) -> Result<(), StoreError> {
        self.tournament = None;
        self.store.clear()
    }

    fn apply(&mut self, action: impl FnOnce(&Tournament) -> Tournament) -> Result<bool, StoreError> {
        let Some(current) = &self.tournament else {
            return Ok(false);
        };
        let updated = action(current);
        if &updated == current {
            return Ok(false);
        }
        self.store.save(&updated)?;
        self.tournament = Some(updated);
        Ok(true)
    }
}
