//! Atomic move application.
//!
//! The executor takes a move that already passed the legality pipeline
//! and applies it as one transaction: clear the starting cell's
//! occupancy, occupy the destination, collapse the vacated cell, update
//! the player, append to history. Either every step lands or the
//! visible state is unchanged: the one fallible mid-sequence step
//! (finding the destination card) rolls back its predecessor before
//! reporting.

use std::time::{SystemTime, UNIX_EPOCH};

use tracing::debug;

use crate::core::{GameState, Move, MoveRecord};
use crate::error::{InputError, MoveError, StateInconsistency};

/// Milliseconds since the Unix epoch, for move records.
fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Apply a validated move to the state.
///
/// Step (a) re-confirms the mover's recorded position against the
/// move's declared start; a mismatch means the caller validated
/// against a stale snapshot and is rejected before any mutation. Steps
/// (b)–(f) then run in order; a failure locating the destination card
/// rolls back the occupancy already cleared in (b).
pub(crate) fn apply_move(state: &mut GameState, mv: &Move) -> Result<MoveRecord, MoveError> {
    let start = mv.starting_position().ok_or(InputError::EmptyPath)?;
    let destination = mv.destination().ok_or(InputError::EmptyPath)?;

    // (a) stale-start check, before any mutation
    let recorded = state
        .player(mv.player)
        .position
        .ok_or(StateInconsistency::PlayerNotPlaced { player: mv.player })?;
    if recorded != start {
        return Err(StateInconsistency::StaleStartingPosition {
            declared: start,
            actual: recorded,
        }
        .into());
    }

    // (b) vacate the starting cell
    let start_cell = state
        .board_mut()
        .card_at_mut(start)
        .ok_or(StateInconsistency::PlayerOffBoard { player: mv.player })?;
    start_cell.occupant = None;

    // (c) occupy the destination, rolling back (b) on failure
    match state.board_mut().card_at_mut(destination) {
        Some(cell) => cell.occupant = Some(mv.player),
        None => {
            match state.board_mut().card_at_mut(start) {
                Some(cell) => cell.occupant = Some(mv.player),
                None => unreachable!("start cell existed in step (b)"),
            }
            return Err(StateInconsistency::DestinationMissing {
                position: destination,
            }
            .into());
        }
    }

    // (d) collapse the vacated cell
    match state.board_mut().card_at_mut(start) {
        Some(cell) => cell.collapsed = true,
        None => unreachable!("start cell existed in step (b)"),
    }

    // (e) move the piece
    state.players_mut()[mv.player].position = Some(destination);

    // (f) record history
    let record = MoveRecord::new(mv.clone(), state.turn_number(), now_ms());
    state.record_move(record.clone());

    debug!(
        player = %mv.player,
        card = %mv.card_type,
        distance = mv.distance,
        %start,
        %destination,
        "move applied"
    );
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, CardType, PlayerId, Position};
    use smallvec::smallvec;

    fn p(row: u8, col: u8) -> Position {
        Position::new(row, col)
    }

    fn fixed_board() -> Board {
        use CardType::*;
        Board::from_cards([
            RedJoker, Ace, Two, Ace,
            Ace, Three, Two, Three,
            Two, Three, BlackJoker, Four,
            Ace, Two, Three, Four,
        ])
    }

    fn state() -> GameState {
        GameState::with_players(fixed_board(), p(0, 0), p(2, 2)).unwrap()
    }

    fn sample_move() -> Move {
        Move::new(
            PlayerId::new(0),
            CardType::RedJoker,
            2,
            smallvec![p(0, 0), p(0, 1), p(0, 2)],
        )
    }

    #[test]
    fn test_apply_mutates_all_six_facets() {
        let mut state = state();
        let record = apply_move(&mut state, &sample_move()).unwrap();

        // start vacated and collapsed
        let start = state.board().card_at(p(0, 0)).unwrap();
        assert!(start.collapsed);
        assert_eq!(start.occupant, None);

        // destination occupied
        assert_eq!(state.board().occupant_at(p(0, 2)), Some(PlayerId::new(0)));

        // player position updated
        assert_eq!(state.player(PlayerId::new(0)).position, Some(p(0, 2)));

        // history appended
        assert_eq!(state.history().len(), 1);
        assert_eq!(record.turn, 1);
        assert_eq!(record.destination(), p(0, 2));

        // result still satisfies the structural invariants
        assert!(state.validate().is_ok());
    }

    #[test]
    fn test_stale_start_rejected_without_mutation() {
        let mut state = state();
        let mv = Move::new(
            PlayerId::new(0),
            CardType::Two,
            2,
            smallvec![p(0, 2), p(0, 3), p(1, 3)],
        );

        let err = apply_move(&mut state, &mv).unwrap_err();
        assert_eq!(
            err,
            MoveError::State(StateInconsistency::StaleStartingPosition {
                declared: p(0, 2),
                actual: p(0, 0),
            })
        );

        // nothing moved
        assert_eq!(state.board().occupant_at(p(0, 0)), Some(PlayerId::new(0)));
        assert_eq!(state.player(PlayerId::new(0)).position, Some(p(0, 0)));
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_missing_destination_rolls_back_occupancy() {
        let mut state = state();
        // A destination that cannot resolve to a card: out-of-range
        // coordinates can only arrive through a deserialized move.
        let mv = Move::new(
            PlayerId::new(0),
            CardType::RedJoker,
            1,
            smallvec![p(0, 0), Position { row: 7, col: 0 }],
        );

        let err = apply_move(&mut state, &mv).unwrap_err();
        assert_eq!(
            err,
            MoveError::State(StateInconsistency::DestinationMissing {
                position: Position { row: 7, col: 0 },
            })
        );

        // step (b) was rolled back: occupancy restored, no collapse
        let start = state.board().card_at(p(0, 0)).unwrap();
        assert_eq!(start.occupant, Some(PlayerId::new(0)));
        assert!(!start.collapsed);
        assert_eq!(state.player(PlayerId::new(0)).position, Some(p(0, 0)));
        assert!(state.history().is_empty());
        assert!(state.validate().is_ok());
    }

    #[test]
    fn test_turn_numbers_increment() {
        let mut state = state();
        apply_move(&mut state, &sample_move()).unwrap();

        let second = Move::new(
            PlayerId::new(1),
            CardType::BlackJoker,
            1,
            smallvec![p(2, 2), p(2, 1)],
        );
        let record = apply_move(&mut state, &second).unwrap();
        assert_eq!(record.turn, 2);
        assert_eq!(state.history().len(), 2);
    }
}
