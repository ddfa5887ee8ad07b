//! Core data model: positions, cards, the board, players, moves, state.
//!
//! These are the leaf types every other module builds on. Mutation of
//! the authoritative [`GameState`] is restricted to the engine; this
//! module only defines the shapes and their structural invariants.

pub mod board;
pub mod card;
pub mod moves;
pub mod player;
pub mod position;
pub mod rng;
pub mod state;

pub use board::Board;
pub use card::{Card, CardType};
pub use moves::{Move, MoveRecord, Path, MAX_DISTANCE};
pub use player::{Player, PlayerId, Players};
pub use position::{Direction, Position, BOARD_SIZE};
pub use rng::GameRng;
pub use state::{GameState, GameStatus};
