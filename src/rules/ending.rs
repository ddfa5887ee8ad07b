//! Terminal constraints on a move's final cell.
//!
//! Two independent checks, both required: the move must actually
//! displace the piece, and the destination must be free of both players.
//! Occupancy is read from the authoritative player-position list, never
//! from the board's auxiliary occupant flags.

use crate::core::{Move, Players};
use crate::error::{InputError, MoveError, RuleViolation};

/// Validate a move's ending against the player list.
///
/// The mover's own starting cell counts as occupied: it is freed only
/// by being vacated, and cannot be re-entered within the same move.
pub fn validate_ending(mv: &Move, players: &Players) -> Result<(), MoveError> {
    let start = mv.starting_position().ok_or(InputError::EmptyPath)?;
    let destination = mv.destination().ok_or(InputError::EmptyPath)?;

    if destination == start {
        return Err(RuleViolation::EndsOnStart.into());
    }
    if let Some(occupant) = players.occupant_of(destination) {
        return Err(RuleViolation::EndsOnOccupied { occupant }.into());
    }
    Ok(())
}
