//! Error taxonomy.
//!
//! Four families, matching how callers are expected to react:
//!
//! - [`InputError`]: malformed boundary input, detected before any
//!   board reasoning.
//! - [`RuleViolation`]: a well-formed but illegal move. Never fatal;
//!   the caller proposes a different move.
//! - [`StateInconsistency`]: a defect in the caller or a prior
//!   unchecked mutation. Pre-mutation instances are clean rejections;
//!   instances surfacing mid-execution trigger rollback.
//! - [`ConsistencyWarning`]: auditor findings. Logged, never blocking.
//!
//! The enum variants are the machine-readable reason codes; the
//! `#[error]` strings are the human-readable explanations.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{CardType, PlayerId, Position};

/// Malformed input at the crate boundary.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum InputError {
    #[error("unknown card type `{name}`")]
    UnknownCardType { name: String },

    #[error("position ({row}, {col}) is outside the 4x4 grid")]
    PositionOutOfRange { row: u8, col: u8 },

    #[error("move has an empty path")]
    EmptyPath,
}

/// A well-formed move that breaks a game rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum RuleViolation {
    #[error("declared distance {declared} does not match a path of {path_len} positions")]
    PathLengthMismatch { declared: u8, path_len: usize },

    #[error("card `{card_type}` does not allow distance {distance}")]
    IllegalDistance { card_type: CardType, distance: u8 },

    #[error("declared card `{declared}` does not match `{actual}` under the mover")]
    CardTypeMismatch { declared: CardType, actual: CardType },

    #[error("step {step} is not orthogonally adjacent under wraparound")]
    NonOrthogonalStep { step: usize },

    #[error("step {step} revisits {position}")]
    RevisitedPosition { step: usize, position: Position },

    #[error("move ends on its own starting cell")]
    EndsOnStart,

    #[error("destination is occupied by {occupant}")]
    EndsOnOccupied { occupant: PlayerId },

    #[error("cell {position} is collapsed")]
    CellCollapsed { position: Position },

    #[error("cell {position} is occupied")]
    CellOccupied { position: Position },

    #[error("it is not {player}'s turn")]
    NotYourTurn { player: PlayerId },

    #[error("game is not in progress")]
    GameNotInProgress,

    #[error("card `{card_type}` is not wild")]
    NotWildCard { card_type: CardType },

    #[error("no wild movement is active")]
    NoWildMoveActive,

    #[error("a wild movement is already active")]
    WildMoveAlreadyActive,

    #[error("no legal wild step is available from the starting cell")]
    NoLegalWildStep,

    #[error("a wild move must advance at least one cell before completing")]
    WildMoveTooShort,

    #[error("wild movement budget is exhausted")]
    WildBudgetExhausted,
}

/// A contradiction between recorded state and declared intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum StateInconsistency {
    #[error("mover stands on {actual}, not on the declared start {declared}")]
    StaleStartingPosition { declared: Position, actual: Position },

    #[error("destination card at {position} is missing")]
    DestinationMissing { position: Position },

    #[error("{player} has not been placed on the board")]
    PlayerNotPlaced { player: PlayerId },

    #[error("{player}'s recorded position is outside the grid")]
    PlayerOffBoard { player: PlayerId },

    #[error("board holds {found} `{card_type}` cards, expected {expected}")]
    BadComposition {
        card_type: CardType,
        expected: usize,
        found: usize,
    },

    #[error("occupancy flag at {position} disagrees with player positions")]
    OccupancyMismatch { position: Position },

    #[error("collapsed cell {position} has an occupant flag")]
    CollapsedOccupied { position: Position },

    #[error("both players stand on {position}")]
    PlayersOverlap { position: Position },

    #[error("{player} stands on a collapsed cell")]
    PlayerOnCollapsed { player: PlayerId },

    #[error("status and winner disagree")]
    StatusWinnerMismatch,
}

/// Any failure a move proposal can produce.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum MoveError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Rule(#[from] RuleViolation),

    #[error(transparent)]
    State(#[from] StateInconsistency),
}

impl MoveError {
    /// Whether the caller may recover by proposing a different move.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, MoveError::Rule(_))
    }
}

/// A non-blocking finding from the consistency auditor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ConsistencyWarning {
    #[error("occupancy flag at {position} says {flag:?} but player positions say {authoritative:?}")]
    OccupancyFlagMismatch {
        position: Position,
        flag: Option<PlayerId>,
        authoritative: Option<PlayerId>,
    },

    #[error("collapsed cell {position} carries an occupant flag")]
    CollapsedCellOccupied { position: Position },

    #[error("{collapsed} collapsed cells but {moves} recorded moves")]
    CollapseHistoryDrift { collapsed: usize, moves: usize },

    #[error("both players stand on {position}")]
    PlayersOverlap { position: Position },

    #[error("winner recorded while the game is still in progress")]
    WinnerBeforeEnd,

    #[error("game ended without a recorded winner")]
    EndedWithoutWinner,
}

/// Failure to decode or accept a serialized snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot failed to decode: {0}")]
    Codec(#[from] bincode::Error),

    #[error(transparent)]
    Invalid(#[from] StateInconsistency),
}
