//! # cardgrid
//!
//! Rules engine for a two-player, turn-based game on a 4×4 toroidal
//! grid of cards. Each cell's card dictates how far a piece standing on
//! it travels; vacating a cell collapses it, shrinking the board until
//! one player has no legal move and loses.
//!
//! ## Design Principles
//!
//! 1. **One authority**: a single [`GameEngine`] owns the mutable
//!    [`GameState`]. Everything else reads snapshots or proposes moves.
//!
//! 2. **Structured verdicts**: legality checks return typed results
//!    (`Result<_, MoveError>`) with machine-readable reason codes, not
//!    ad hoc flag objects.
//!
//! 3. **Atomic mutation**: a move either fully applies (occupancy,
//!    collapse, piece, history) or leaves no trace.
//!
//! ## Modules
//!
//! - `core`: positions, cards, the board, players, moves, game state
//! - `rules`: distance resolution, path/ending validation, legal-move
//!   enumeration
//! - `wild`: the interactive wild-card movement state machine
//! - `engine`: move executor, turn manager, consistency auditor, and
//!   the `GameEngine` facade
//! - `setup`: deck composition and seeded dealing (an input producer;
//!   the engine never shuffles)
//! - `error`: the error taxonomy
//!
//! ## Quick start
//!
//! ```
//! use cardgrid::engine::GameEngine;
//! use cardgrid::setup::GameSetup;
//!
//! let state = GameSetup::new().seed(42).deal();
//! let mut engine = GameEngine::new(state).unwrap();
//!
//! let player = engine.state().current_player();
//! let moves = engine.legal_moves(player);
//! assert!(!moves.is_empty());
//! ```

pub mod core;
pub mod engine;
pub mod error;
pub mod rules;
pub mod setup;
pub mod wild;

// Re-export commonly used types
pub use crate::core::{
    Board, Card, CardType, Direction, GameState, GameStatus, Move, MoveRecord, Path, Player,
    PlayerId, Players, Position, BOARD_SIZE, MAX_DISTANCE,
};

pub use crate::error::{
    ConsistencyWarning, InputError, MoveError, RuleViolation, SnapshotError, StateInconsistency,
};

pub use crate::rules::{
    distance_rule, enumerate_legal_moves, has_legal_move, validate_move, validate_path,
    DistanceRule, LegalMove,
};

pub use crate::engine::{audit, GameEngine, MoveOutcome, WildProgress};

pub use crate::wild::{WildMovement, WildStepOutcome};

pub use crate::setup::{standard_deck, GameSetup};
