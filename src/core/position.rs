//! Grid positions and wraparound adjacency.
//!
//! The board is a 4×4 torus: stepping off one edge re-enters from the
//! opposite edge. Row 0's "up" neighbor is row 3 in the same column, and
//! column 0's "left" neighbor is column 3 in the same row.
//!
//! ## Usage
//!
//! ```
//! use cardgrid::core::{Direction, Position};
//!
//! let p = Position::new(0, 1);
//! assert_eq!(p.step(Direction::Up), Position::new(3, 1));
//! assert_eq!(Position::new(1, 0).step(Direction::Left), Position::new(1, 3));
//! ```

use serde::{Deserialize, Serialize};

/// Width and height of the board.
pub const BOARD_SIZE: u8 = 4;

/// A (row, column) pair on the 4×4 grid, each coordinate in `[0,3]`.
///
/// Equality is structural. Positions from external input should be built
/// with [`Position::try_new`]; in-crate code uses [`Position::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    /// Create a position, asserting both coordinates are in range.
    #[must_use]
    pub fn new(row: u8, col: u8) -> Self {
        assert!(row < BOARD_SIZE && col < BOARD_SIZE, "position out of range");
        Self { row, col }
    }

    /// Create a position from unchecked coordinates.
    ///
    /// Returns `None` if either coordinate is outside `[0,3]`.
    #[must_use]
    pub fn try_new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Check both coordinates are in range.
    ///
    /// Deserialized positions bypass the constructors, so board lookups
    /// re-check before indexing.
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Step one cell in the given direction, wrapping at the edges.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dr, dc) = direction.offset();
        Self {
            row: (self.row + dr) % BOARD_SIZE,
            col: (self.col + dc) % BOARD_SIZE,
        }
    }

    /// The four orthogonal neighbors of this position, wraparound-aware.
    pub fn neighbors(self) -> impl Iterator<Item = Position> {
        Direction::ALL.into_iter().map(move |d| self.step(d))
    }

    /// Check whether `other` is one orthogonal step away under wraparound.
    ///
    /// A step is adjacent iff exactly one axis differs, by magnitude 1
    /// (direct) or magnitude 3 (wrap on a size-4 axis).
    #[must_use]
    pub fn is_adjacent(self, other: Position) -> bool {
        let row_delta = self.row.abs_diff(other.row);
        let col_delta = self.col.abs_diff(other.col);
        let wraps = |d: u8| d == 1 || d == BOARD_SIZE - 1;
        (row_delta == 0 && wraps(col_delta)) || (col_delta == 0 && wraps(row_delta))
    }

    /// Iterate over every position on the board, row-major.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position { row, col }))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The four orthogonal movement directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The opposite direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Row/column offset of one step, expressed modularly.
    ///
    /// Up is `-1` on the row axis, which on a size-4 torus is `+3`.
    const fn offset(self) -> (u8, u8) {
        match self {
            Direction::Up => (BOARD_SIZE - 1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, BOARD_SIZE - 1),
            Direction::Right => (0, 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_new() {
        let p = Position::new(2, 3);
        assert_eq!(p.row, 2);
        assert_eq!(p.col, 3);
        assert_eq!(format!("{}", p), "(2, 3)");
    }

    #[test]
    #[should_panic(expected = "position out of range")]
    fn test_position_new_out_of_range() {
        let _ = Position::new(4, 0);
    }

    #[test]
    fn test_try_new() {
        assert_eq!(Position::try_new(0, 0), Some(Position::new(0, 0)));
        assert_eq!(Position::try_new(3, 3), Some(Position::new(3, 3)));
        assert_eq!(Position::try_new(4, 0), None);
        assert_eq!(Position::try_new(0, 4), None);
    }

    #[test]
    fn test_step_wraps_up_and_left() {
        assert_eq!(Position::new(0, 1).step(Direction::Up), Position::new(3, 1));
        assert_eq!(Position::new(1, 0).step(Direction::Left), Position::new(1, 3));
    }

    #[test]
    fn test_step_wraps_down_and_right() {
        assert_eq!(Position::new(3, 2).step(Direction::Down), Position::new(0, 2));
        assert_eq!(Position::new(2, 3).step(Direction::Right), Position::new(2, 0));
    }

    #[test]
    fn test_step_inverse() {
        for p in Position::all() {
            for d in Direction::ALL {
                assert_eq!(p.step(d).step(d.opposite()), p);
            }
        }
    }

    #[test]
    fn test_adjacency_direct_and_wrap() {
        let p = Position::new(0, 0);
        assert!(p.is_adjacent(Position::new(0, 1)));
        assert!(p.is_adjacent(Position::new(1, 0)));
        assert!(p.is_adjacent(Position::new(0, 3))); // wrap left
        assert!(p.is_adjacent(Position::new(3, 0))); // wrap up
        assert!(!p.is_adjacent(Position::new(1, 1))); // diagonal
        assert!(!p.is_adjacent(Position::new(0, 2))); // two cells away
        assert!(!p.is_adjacent(p)); // self
    }

    #[test]
    fn test_neighbors_count() {
        for p in Position::all() {
            let neighbors: Vec<_> = p.neighbors().collect();
            assert_eq!(neighbors.len(), 4);
            for n in neighbors {
                assert!(p.is_adjacent(n));
            }
        }
    }

    #[test]
    fn test_all_positions() {
        let all: Vec<_> = Position::all().collect();
        assert_eq!(all.len(), 16);
        assert_eq!(all[0], Position::new(0, 0));
        assert_eq!(all[15], Position::new(3, 3));
    }

    #[test]
    fn test_serialization() {
        let p = Position::new(1, 2);
        let json = serde_json::to_string(&p).unwrap();
        let back: Position = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
