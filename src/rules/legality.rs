//! Full move-legality orchestration.
//!
//! Combines the distance resolver, ending validator, path validator,
//! and a board walk over the traversed cells. Check order follows
//! diagnostic precision, cheapest first: declared distance against the
//! path length, distance against the card, ending constraints, path
//! geometry, then board contents. Evaluation short-circuits at the
//! first failure.

use crate::core::{GameState, Move, Position};
use crate::error::{InputError, MoveError, RuleViolation};

use super::distance::check_distance;
use super::ending::validate_ending;
use super::path::validate_path;

/// Check whether a piece may enter `position` right now.
///
/// A cell is enterable iff it exists, is face-up, and carries no piece.
pub(crate) fn check_cell_enterable(state: &GameState, position: Position) -> Result<(), MoveError> {
    let card = state
        .board()
        .card_at(position)
        .ok_or(InputError::PositionOutOfRange {
            row: position.row,
            col: position.col,
        })?;
    if card.collapsed {
        return Err(RuleViolation::CellCollapsed { position }.into());
    }
    if state.players().occupant_of(position).is_some() {
        return Err(RuleViolation::CellOccupied { position }.into());
    }
    Ok(())
}

/// Validate a proposed move end to end, without mutating anything.
///
/// On success the move is safe to hand to the executor (modulo the
/// executor's own stale-start re-check).
pub fn validate_move(state: &GameState, mv: &Move) -> Result<(), MoveError> {
    // Declared distance vs path shape: a distinct failure mode, checked
    // before any geometry or board access.
    if mv.distance as usize + 1 != mv.path.len() {
        return Err(RuleViolation::PathLengthMismatch {
            declared: mv.distance,
            path_len: mv.path.len(),
        }
        .into());
    }

    check_distance(mv.card_type, mv.distance)?;
    validate_ending(mv, state.players())?;
    validate_path(&mv.path)?;

    // Board checks last: the declared card must be the one under the
    // mover, and every traversed cell after the start must be face-up
    // and free. The final cell's occupancy was already covered by the
    // ending check; collapse still applies to it.
    let start = mv.starting_position().ok_or(InputError::EmptyPath)?;
    let start_card = state
        .board()
        .card_at(start)
        .ok_or(InputError::PositionOutOfRange {
            row: start.row,
            col: start.col,
        })?;
    if start_card.card_type != mv.card_type {
        return Err(RuleViolation::CardTypeMismatch {
            declared: mv.card_type,
            actual: start_card.card_type,
        }
        .into());
    }
    for &position in &mv.path[1..] {
        check_cell_enterable(state, position)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, CardType, GameState, Path, PlayerId};
    use smallvec::smallvec;

    /// A handcrafted board with a known layout:
    ///
    /// ```text
    ///   RJ  A   2   A
    ///   A   3   2   3
    ///   2   3   BJ  4
    ///   A   2   3   4
    /// ```
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
        GameState::with_players(fixed_board(), Position::new(0, 0), Position::new(2, 2)).unwrap()
    }

    fn p(row: u8, col: u8) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn test_legal_numbered_move() {
        // Player 1 stands on the black joker; move player 0 off the red
        // joker instead: distance 2 along the top row.
        let state = state();
        let mv = Move::new(
            PlayerId::new(0),
            CardType::RedJoker,
            2,
            smallvec![p(0, 0), p(0, 1), p(0, 2)],
        );
        assert!(validate_move(&state, &mv).is_ok());
    }

    #[test]
    fn test_path_length_mismatch_is_distinct() {
        let state = state();
        // Declares distance 2 but supplies a 1-step path.
        let mv = Move::new(
            PlayerId::new(0),
            CardType::RedJoker,
            2,
            smallvec![p(0, 0), p(0, 1)],
        );
        assert_eq!(
            validate_move(&state, &mv),
            Err(MoveError::Rule(RuleViolation::PathLengthMismatch {
                declared: 2,
                path_len: 2,
            }))
        );
    }

    #[test]
    fn test_card_distance_mismatch() {
        // A piece on a two must move exactly 2; a 1-step path with a
        // consistent declaration still violates the card's rule.
        let board = fixed_board();
        let state =
            GameState::with_players(board, Position::new(0, 2), Position::new(2, 2)).unwrap();
        let mv = Move::new(
            PlayerId::new(0),
            CardType::Two,
            1,
            smallvec![p(0, 2), p(0, 3)],
        );
        assert_eq!(
            validate_move(&state, &mv),
            Err(MoveError::Rule(RuleViolation::IllegalDistance {
                card_type: CardType::Two,
                distance: 1,
            }))
        );
    }

    #[test]
    fn test_card_type_mismatch() {
        let state = state();
        let mv = Move::new(
            PlayerId::new(0),
            CardType::Ace,
            1,
            smallvec![p(0, 0), p(0, 1)],
        );
        assert_eq!(
            validate_move(&state, &mv),
            Err(MoveError::Rule(RuleViolation::CardTypeMismatch {
                declared: CardType::Ace,
                actual: CardType::RedJoker,
            }))
        );
    }

    #[test]
    fn test_collapsed_intermediate_cell_rejected() {
        let mut state = state();
        state
            .board_mut()
            .card_at_mut(p(0, 1))
            .unwrap()
            .collapsed = true;

        let mv = Move::new(
            PlayerId::new(0),
            CardType::RedJoker,
            2,
            smallvec![p(0, 0), p(0, 1), p(0, 2)],
        );
        assert_eq!(
            validate_move(&state, &mv),
            Err(MoveError::Rule(RuleViolation::CellCollapsed {
                position: p(0, 1),
            }))
        );
    }

    #[test]
    fn test_ending_on_opponent_rejected() {
        let state = state();
        let mv = Move::new(
            PlayerId::new(0),
            CardType::RedJoker,
            4,
            smallvec![p(0, 0), p(1, 0), p(2, 0), p(2, 1), p(2, 2)],
        );
        assert_eq!(
            validate_move(&state, &mv),
            Err(MoveError::Rule(RuleViolation::EndsOnOccupied {
                occupant: PlayerId::new(1),
            }))
        );
    }

    #[test]
    fn test_pass_through_opponent_rejected() {
        // Opponent at (0,2); the path crosses it mid-way.
        let state =
            GameState::with_players(fixed_board(), Position::new(0, 0), Position::new(0, 2))
                .unwrap();
        let mv = Move::new(
            PlayerId::new(0),
            CardType::RedJoker,
            4,
            smallvec![p(0, 0), p(0, 1), p(0, 2), p(0, 3), p(1, 3)],
        );
        assert_eq!(
            validate_move(&state, &mv),
            Err(MoveError::Rule(RuleViolation::CellOccupied {
                position: p(0, 2),
            }))
        );
    }

    #[test]
    fn test_wild_accepts_any_distance() {
        let state = state();
        let cases: [(u8, Path); 4] = [
            (1, smallvec![p(0, 0), p(0, 1)]),
            (2, smallvec![p(0, 0), p(0, 1), p(1, 1)]),
            (3, smallvec![p(0, 0), p(0, 1), p(1, 1), p(1, 2)]),
            (4, smallvec![p(0, 0), p(0, 1), p(1, 1), p(1, 2), p(0, 2)]),
        ];
        for (distance, path) in cases {
            let mv = Move::new(PlayerId::new(0), CardType::RedJoker, distance, path);
            assert!(validate_move(&state, &mv).is_ok(), "distance {}", distance);
        }
    }

    #[test]
    fn test_geometry_checked_after_ending() {
        let state = state();
        // Diagonal step; ending is fine, geometry is not.
        let mv = Move::new(
            PlayerId::new(0),
            CardType::RedJoker,
            1,
            smallvec![p(0, 0), p(1, 1)],
        );
        assert_eq!(
            validate_move(&state, &mv),
            Err(MoveError::Rule(RuleViolation::NonOrthogonalStep { step: 1 }))
        );
    }
}
