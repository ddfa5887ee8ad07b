//! Move representation: a path across the grid plus its metadata.
//!
//! A move is the full ordered sequence of positions a piece passes
//! through, starting cell included, plus the distance the mover claims
//! to be traveling and the card type that grants it. The legality
//! pipeline cross-checks every one of those claims against the board
//! before anything mutates.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::CardType;
use super::player::PlayerId;
use super::position::Position;

/// Longest possible move: four steps, five positions.
pub const MAX_DISTANCE: u8 = 4;

/// An ordered sequence of positions, start included.
///
/// Inline capacity covers the longest legal move without touching the
/// heap.
pub type Path = SmallVec<[Position; 5]>;

/// A proposed (or committed) move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    /// The acting player.
    pub player: PlayerId,

    /// Card type the mover claims to be standing on.
    pub card_type: CardType,

    /// Declared travel distance. Must equal `path.len() - 1`.
    pub distance: u8,

    /// Every position the move passes through, starting cell first.
    pub path: Path,
}

impl Move {
    /// Create a move from its parts.
    #[must_use]
    pub fn new(player: PlayerId, card_type: CardType, distance: u8, path: Path) -> Self {
        Self {
            player,
            card_type,
            distance,
            path,
        }
    }

    /// Build a move whose declared distance is derived from the path.
    #[must_use]
    pub fn from_path(player: PlayerId, card_type: CardType, path: Path) -> Self {
        let distance = path.len().saturating_sub(1) as u8;
        Self::new(player, card_type, distance, path)
    }

    /// The cell the move starts from.
    #[must_use]
    pub fn starting_position(&self) -> Option<Position> {
        self.path.first().copied()
    }

    /// The cell the move ends on.
    #[must_use]
    pub fn destination(&self) -> Option<Position> {
        self.path.last().copied()
    }
}

/// A committed move with history metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The move as executed.
    pub mv: Move,

    /// Turn number at which the move was committed (starts at 1).
    pub turn: u32,

    /// Wall-clock commit time, milliseconds since the Unix epoch.
    pub timestamp_ms: u64,
}

impl MoveRecord {
    /// Create a record for a committed move.
    #[must_use]
    pub fn new(mv: Move, turn: u32, timestamp_ms: u64) -> Self {
        Self {
            mv,
            turn,
            timestamp_ms,
        }
    }

    /// Destination of the recorded move.
    ///
    /// Committed moves always have a non-empty path.
    #[must_use]
    pub fn destination(&self) -> Position {
        self.mv.destination().unwrap_or(Position { row: 0, col: 0 })
    }
}
