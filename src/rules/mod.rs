//! Pure movement-legality rules.
//!
//! Nothing in this module mutates state: every function takes the board
//! and players by reference and returns a structured verdict. The
//! orchestration in [`legality`] is just the other checks run in
//! diagnostic order, and the enumeration in [`enumerate`] reuses the
//! same cell checks the validators do.

pub mod distance;
pub mod ending;
pub mod enumerate;
pub mod legality;
pub mod path;

pub use distance::{check_distance, distance_rule, DistanceRule};
pub use ending::validate_ending;
pub use enumerate::{enumerate_legal_moves, has_legal_move, LegalMove};
pub use legality::validate_move;
pub use path::validate_path;
