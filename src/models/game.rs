//! Match state: phase lifecycle, players, and finished-match summaries.

use crate::models::dart::{FinishMode, GameType};
use crate::models::player::{Player, PlayerId, PlayerSummary};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Errors that can occur while setting up a game.
///
/// In-play misuse of the state machine (submitting out of phase, undoing an
/// empty history) is deliberately a no-op rather than an error; these
/// variants cover setup validation only.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GameError {
    /// Legs to play must be an odd number between 1 and 9.
    InvalidLegCount(u32),
    /// Need at least two players to start.
    NotEnoughPlayers,
    /// Game is not in a state that allows this action.
    InvalidState,
    /// Player name is empty after trimming.
    EmptyPlayerName,
    /// A player with this name already exists (names are unique, case-insensitive).
    DuplicatePlayerName,
    /// Player not found in the game.
    PlayerNotFound(PlayerId),
    /// Dart value/multiplier combination that cannot occur on a board.
    InvalidDart { value: u32, multiplier: u32 },
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::InvalidLegCount(n) => {
                write!(f, "Legs to play must be an odd number from 1 to 9 (got {})", n)
            }
            GameError::NotEnoughPlayers => write!(f, "Need at least 2 players to start"),
            GameError::InvalidState => write!(f, "Invalid state for this action"),
            GameError::EmptyPlayerName => write!(f, "Player name must not be empty"),
            GameError::DuplicatePlayerName => write!(f, "A player with this name already exists"),
            GameError::PlayerNotFound(_) => write!(f, "Player not found"),
            GameError::InvalidDart { value, multiplier } => {
                write!(f, "Impossible dart: value {} with multiplier {}", value, multiplier)
            }
        }
    }
}

/// Current phase of the match. A strict lifecycle:
/// Setup -> Playing -> (LegFinished -> Playing)* -> Finished.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    /// Adding players, choosing game type / finish mode / legs; not started.
    #[default]
    Setup,
    /// A leg is in progress; turns may be submitted.
    Playing,
    /// A leg just ended but the match continues; waiting for next_leg.
    LegFinished,
    /// The match is over; winner is set. Terminal until rematch or new game.
    Finished,
}

/// Full match state: players, scores, phase, and leg progression.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub phase: GamePhase,
    pub game_type: GameType,
    pub finish_mode: FinishMode,
    /// Odd number of legs to play; first to a majority wins the match.
    pub total_legs: u32,
    /// 1-based leg counter.
    pub current_leg: u32,
    /// Turn order is vec order, fixed for the match.
    pub players: Vec<Player>,
    /// Index into `players` of whoever throws next; rotates modulo player count.
    pub active_player_index: usize,
    /// Set only while Finished.
    pub winner: Option<PlayerId>,
    /// Set only while LegFinished.
    pub leg_winner: Option<PlayerId>,
    pub started_at: DateTime<Utc>,
    /// Set when the match completes; ordering key for saved summaries.
    pub finished_at: Option<DateTime<Utc>>,
}

impl Game {
    /// Create a new game in Setup with no players.
    pub fn new(
        game_type: GameType,
        finish_mode: FinishMode,
        total_legs: u32,
    ) -> Result<Self, GameError> {
        if total_legs % 2 == 0 || !(1..=9).contains(&total_legs) {
            return Err(GameError::InvalidLegCount(total_legs));
        }
        Ok(Self {
            phase: GamePhase::Setup,
            game_type,
            finish_mode,
            total_legs,
            current_leg: 1,
            players: Vec::new(),
            active_player_index: 0,
            winner: None,
            leg_winner: None,
            started_at: Utc::now(),
            finished_at: None,
        })
    }

    /// Create a game and register players in one call. Still Setup until started.
    pub fn with_players<I, S>(
        names: I,
        game_type: GameType,
        finish_mode: FinishMode,
        total_legs: u32,
    ) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut game = Self::new(game_type, finish_mode, total_legs)?;
        for name in names {
            game.add_player(name)?;
        }
        Ok(game)
    }

    /// Add a player (Setup only). Names must be unique (case-insensitive).
    pub fn add_player(&mut self, name: impl Into<String>) -> Result<(), GameError> {
        if self.phase != GamePhase::Setup {
            return Err(GameError::InvalidState);
        }
        let name = name.into();
        let name_trimmed = name.trim();
        if name_trimmed.is_empty() {
            return Err(GameError::EmptyPlayerName);
        }
        let is_duplicate = self
            .players
            .iter()
            .any(|p| p.name.eq_ignore_ascii_case(name_trimmed));
        if is_duplicate {
            return Err(GameError::DuplicatePlayerName);
        }
        self.players
            .push(Player::new(name_trimmed, self.game_type.starting_score()));
        Ok(())
    }

    /// Remove a player by id (Setup only).
    pub fn remove_player(&mut self, player_id: PlayerId) -> Result<(), GameError> {
        if self.phase != GamePhase::Setup {
            return Err(GameError::InvalidState);
        }
        let idx = self
            .players
            .iter()
            .position(|p| p.id == player_id)
            .ok_or(GameError::PlayerNotFound(player_id))?;
        self.players.remove(idx);
        Ok(())
    }

    /// The player whose turn it is. Meaningful while Playing.
    pub fn active_player(&self) -> Option<&Player> {
        self.players.get(self.active_player_index)
    }

    /// Mutable access to the player whose turn it is.
    pub fn active_player_mut(&mut self) -> Option<&mut Player> {
        self.players.get_mut(self.active_player_index)
    }

    /// Mutable reference to a player by id.
    pub fn get_player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    /// Read-only projection handed to persistence and the rating engine.
    /// Some only once the match is Finished.
    pub fn summary(&self) -> Option<MatchSummary> {
        if self.phase != GamePhase::Finished {
            return None;
        }
        let winner = self
            .winner
            .and_then(|id| self.players.iter().find(|p| p.id == id))?;
        Some(MatchSummary {
            winner_name: winner.name.clone(),
            players: self
                .players
                .iter()
                .map(|p| PlayerSummary::from_player(p, self.finish_mode))
                .collect(),
            finished_at: self.finished_at.unwrap_or_else(Utc::now),
        })
    }
}

/// Read-only projection of a finished match. Never mutated after creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub winner_name: String,
    /// Per-player aggregates, in turn order.
    pub players: Vec<PlayerSummary>,
    /// Completion time; the ordering key for rating computation.
    pub finished_at: DateTime<Utc>,
}
