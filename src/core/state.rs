//! The authoritative game state.
//!
//! One `GameState` instance is owned by the engine facade; everything
//! else reads snapshots. Mutating accessors are `pub(crate)` so that
//! occupancy, collapse, turn, and history writes can only come from the
//! move executor and turn manager, never from ad hoc field writes at
//! call sites.
//!
//! ## Lifecycle
//!
//! `Setup` → (both players placed) → `Playing` → (a player has no legal
//! move) → `Ended`. The transition to `Ended` happens exactly once and
//! records the winner.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::board::Board;
use super::card::Card;
use super::moves::MoveRecord;
use super::player::{Player, PlayerId, Players};
use super::position::Position;
use crate::error::{InputError, MoveError, RuleViolation, SnapshotError, StateInconsistency};

/// Where the game is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Board built, players not yet (fully) placed.
    Setup,
    /// Both players placed; moves are being made.
    Playing,
    /// One player ran out of legal moves.
    Ended,
}

/// Aggregate of board, players, turn, and history.
///
/// Snapshots are plain clones; the `im::Vector` history makes cloning
/// cheap no matter how long the game ran.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    players: Players,
    current_player: PlayerId,
    status: GameStatus,
    winner: Option<PlayerId>,
    history: Vector<MoveRecord>,
}

impl GameState {
    /// Create a setup-phase state over a pre-built board.
    ///
    /// Players are unplaced; by convention player 0 will start on the
    /// red joker and player 1 on the black joker, but placement itself
    /// is the caller's input via [`GameState::place_player`].
    #[must_use]
    pub fn new(board: Board) -> Self {
        use super::card::CardType;

        Self {
            board,
            players: Players::new(
                Player::unplaced(PlayerId::new(0), CardType::RedJoker),
                Player::unplaced(PlayerId::new(1), CardType::BlackJoker),
            ),
            current_player: PlayerId::new(0),
            status: GameStatus::Setup,
            winner: None,
            history: Vector::new(),
        }
    }

    /// Create a `Playing` state with both players already placed.
    ///
    /// The caller supplies a pre-built board and two placements; the
    /// state is validated before use.
    pub fn with_players(
        board: Board,
        position_0: Position,
        position_1: Position,
    ) -> Result<Self, MoveError> {
        let mut state = Self::new(board);
        state.place_player(PlayerId::new(0), position_0)?;
        state.place_player(PlayerId::new(1), position_1)?;
        state.validate()?;
        Ok(state)
    }

    /// Place a player on a cell during setup.
    ///
    /// Records the player's starting card, mirrors the occupancy flag,
    /// and transitions to `Playing` once both players stand on the
    /// board.
    pub fn place_player(&mut self, player: PlayerId, position: Position) -> Result<(), MoveError> {
        if self.status != GameStatus::Setup {
            return Err(RuleViolation::GameNotInProgress.into());
        }

        let card = *self
            .board
            .card_at(position)
            .ok_or(InputError::PositionOutOfRange {
                row: position.row,
                col: position.col,
            })?;
        if card.collapsed {
            return Err(RuleViolation::CellCollapsed { position }.into());
        }
        if self.players.occupant_of(position).is_some() {
            return Err(RuleViolation::CellOccupied { position }.into());
        }

        self.players[player].position = Some(position);
        self.players[player].starting_card = card.card_type;
        if let Some(cell) = self.board.card_at_mut(position) {
            cell.occupant = Some(player);
        }

        if PlayerId::both().all(|p| self.players[p].position.is_some()) {
            self.status = GameStatus::Playing;
        }
        Ok(())
    }

    // === Reads ===

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Both players.
    #[must_use]
    pub fn players(&self) -> &Players {
        &self.players
    }

    /// One player.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// Lifecycle status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The winner, set exactly when the game has ended.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Append-only log of committed moves.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Turn number, starting at 1.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.history.len() as u32 + 1
    }

    /// The card the player currently stands on.
    #[must_use]
    pub fn standing_card(&self, player: PlayerId) -> Option<&Card> {
        let position = self.players[player].position?;
        self.board.card_at(position)
    }

    // === Writes (executor/turn-manager only) ===

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub(crate) fn players_mut(&mut self) -> &mut Players {
        &mut self.players
    }

    pub(crate) fn record_move(&mut self, record: MoveRecord) {
        self.history.push_back(record);
    }

    pub(crate) fn set_current_player(&mut self, player: PlayerId) {
        self.current_player = player;
    }

    pub(crate) fn end_game(&mut self, winner: PlayerId) {
        self.status = GameStatus::Ended;
        self.winner = Some(winner);
    }

    // === Validation & snapshots ===

    /// Check the structural invariants of the data model.
    ///
    /// Used on construction and before a restored snapshot is installed
    /// as authoritative. Returns the first contradiction found.
    pub fn validate(&self) -> Result<(), StateInconsistency> {
        self.board.validate_composition()?;

        if self.status != GameStatus::Setup {
            for p in self.players.iter() {
                let position = p
                    .position
                    .ok_or(StateInconsistency::PlayerNotPlaced { player: p.id })?;
                let card = self
                    .board
                    .card_at(position)
                    .ok_or(StateInconsistency::PlayerOffBoard { player: p.id })?;
                if card.collapsed {
                    return Err(StateInconsistency::PlayerOnCollapsed { player: p.id });
                }
            }

            if let (Some(a), Some(b)) = (
                self.players[PlayerId::new(0)].position,
                self.players[PlayerId::new(1)].position,
            ) {
                if a == b {
                    return Err(StateInconsistency::PlayersOverlap { position: a });
                }
            }
        }

        for (position, card) in self.board.iter() {
            if card.collapsed && card.occupant.is_some() {
                return Err(StateInconsistency::CollapsedOccupied { position });
            }
            if card.occupant != self.players.occupant_of(position) {
                return Err(StateInconsistency::OccupancyMismatch { position });
            }
        }

        let ended = self.status == GameStatus::Ended;
        if ended != self.winner.is_some() {
            return Err(StateInconsistency::StatusWinnerMismatch);
        }
        Ok(())
    }

    /// Encode this state for the persistence/relay collaborators.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a snapshot, re-validating its structural invariants.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let state: Self = bincode::deserialize(bytes)?;
        state.validate()?;
        Ok(state)
    }
}
