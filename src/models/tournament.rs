//! Tournament snapshot and TournamentError.

use crate::models::game::GameMatch;
use crate::models::group::Group;
use crate::models::id::{generate_id, GroupId, MatchId, PlayerId, TournamentId};
use crate::models::player::Player;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Construction-time failures. Runtime mutations never error; they no-op.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Tournament name is empty after trimming.
    MissingName,
    /// A player name is empty after trimming.
    EmptyPlayerName,
    /// The same player name was entered twice.
    DuplicatePlayerName(String),
    /// Fewer than 2 players.
    NotEnoughPlayers { count: usize },
    /// Exactly 3 players: no power-of-two bracket and no group plan.
    UnsupportedPlayerCount(usize),
    /// Bracket size is not a power of two of at least 2.
    InvalidBracketSize(usize),
    /// No partition into groups fits the requested bracket size.
    NoGroupDistribution { player_count: usize, bracket_size: usize },
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::MissingName => write!(f, "Tournament name is missing"),
            TournamentError::EmptyPlayerName => write!(f, "Player names must not be empty"),
            TournamentError::DuplicatePlayerName(name) => {
                write!(f, "Player \"{}\" already exists", name)
            }
            TournamentError::NotEnoughPlayers { count } => {
                write!(f, "Need at least 2 players (got {})", count)
            }
            TournamentError::UnsupportedPlayerCount(count) => {
                write!(f, "{} players not possible - need 2, 4 or more", count)
            }
            TournamentError::InvalidBracketSize(size) => {
                write!(f, "Bracket size {} is not a power of two", size)
            }
            TournamentError::NoGroupDistribution {
                player_count,
                bracket_size,
            } => write!(
                f,
                "No valid group distribution for {} players into a bracket of {}",
                player_count, bracket_size
            ),
        }
    }
}

impl std::error::Error for TournamentError {}

/// Full tournament state: the single snapshot the caller persists after every change.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub players: Vec<Player>,
    /// Knock-out matches, ordered by round then position.
    pub matches: Vec<GameMatch>,
    /// 0 while the group phase runs, 1 once the knock-out phase starts.
    pub current_round: u32,
    pub total_rounds: u32,
    pub is_complete: bool,
    pub winner_id: Option<PlayerId>,
    pub created_at: DateTime<Utc>,
    pub has_group_phase: bool,
    pub groups: Vec<Group>,
    pub group_phase_complete: bool,
    pub bracket_size: usize,
    pub advancing_per_group: usize,
}

impl Tournament {
    /// Empty tournament shell; builders fill in players, matches and groups.
    pub(crate) fn new(name: impl Into<String>, players: Vec<Player>, bracket_size: usize) -> Self {
        Self {
            id: generate_id(),
            name: name.into(),
            players,
            matches: Vec::new(),
            current_round: 1,
            total_rounds: rounds_for(bracket_size),
            is_complete: false,
            winner_id: None,
            created_at: Utc::now(),
            has_group_phase: false,
            groups: Vec::new(),
            group_phase_complete: true,
            bracket_size,
            advancing_per_group: 0,
        }
    }

    /// Look up a player by id.
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Player name for display; `None` for an empty slot or unknown id.
    pub fn player_name(&self, id: Option<PlayerId>) -> Option<&str> {
        id.and_then(|id| self.player(id)).map(|p| p.name.as_str())
    }

    /// Knock-out matches of one round, in position order.
    pub fn round_matches(&self, round: u32) -> impl Iterator<Item = &GameMatch> {
        self.matches.iter().filter(move |m| m.round == round)
    }

    pub fn match_at(&self, round: u32, position: u32) -> Option<&GameMatch> {
        self.matches
            .iter()
            .find(|m| m.round == round && m.position == position)
    }

    pub(crate) fn match_index(&self, round: u32, position: u32) -> Option<usize> {
        self.matches
            .iter()
            .position(|m| m.round == round && m.position == position)
    }

    pub fn find_match(&self, id: MatchId) -> Option<&GameMatch> {
        self.matches.iter().find(|m| m.id == id)
    }

    /// The single match of the last round.
    pub fn final_match(&self) -> Option<&GameMatch> {
        self.match_at(self.total_rounds, 0)
    }

    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == id)
    }

    /// Copy the final's result onto the tournament once it is decided.
    pub(crate) fn refresh_completion(&mut self) {
        if let Some(winner) = self
            .final_match()
            .filter(|m| m.is_complete)
            .and_then(|m| m.winner_id)
        {
            if !self.is_complete {
                log::info!(
                    "Tournament \"{}\" won by {}",
                    self.name,
                    self.player_name(Some(winner)).unwrap_or("unknown player")
                );
            }
            self.is_complete = true;
            self.winner_id = Some(winner);
        }
    }
}

/// Number of knock-out rounds for `size` entrants: ceil(log2(size)).
pub fn rounds_for(size: usize) -> u32 {
    if size <= 1 {
        0
    } else {
        size.next_power_of_two().trailing_zeros()
    }
}
