//! Interactive wild-card movement.
//!
//! Jokers do not fix a travel distance, so a wild move is built one
//! step at a time against a budget of four. The state machine here is
//! pure; the engine facade owns its lifetime and commits the result
//! through the move executor.

pub mod machine;

pub use machine::{WildMovement, WildStepOutcome};
