//! Turn switching and the game-end decision.
//!
//! After a successful move the turn passes to the opponent, and their
//! legal moves are enumerated. An empty enumeration is the game's sole
//! termination condition: the player who just moved wins. There is no
//! resignation or stalemate rule.

use tracing::{debug, info};

use crate::core::{GameState, GameStatus, PlayerId};
use crate::rules::has_legal_move;

/// Result of a turn switch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct TurnOutcome {
    pub status: GameStatus,
    pub winner: Option<PlayerId>,
}

/// Hand the turn to the opponent and check their liveness.
pub(crate) fn advance_turn(state: &mut GameState) -> TurnOutcome {
    let mover = state.current_player();
    let next = mover.opponent();
    state.set_current_player(next);

    if has_legal_move(state, next) {
        debug!(next = %next, "turn passed");
    } else {
        state.end_game(mover);
        info!(winner = %mover, loser = %next, "game over: no legal moves remain");
    }

    TurnOutcome {
        status: state.status(),
        winner: state.winner(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, CardType, Position};

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

    #[test]
    fn test_turn_passes_while_moves_remain() {
        let mut state =
            GameState::with_players(fixed_board(), p(0, 0), p(2, 2)).unwrap();
        let outcome = advance_turn(&mut state);

        assert_eq!(state.current_player(), PlayerId::new(1));
        assert_eq!(outcome.status, GameStatus::Playing);
        assert_eq!(outcome.winner, None);
    }

    #[test]
    fn test_boxed_in_player_loses() {
        let mut state =
            GameState::with_players(fixed_board(), p(0, 0), p(2, 2)).unwrap();
        // Strand player 1 before handing them the turn.
        for neighbor in p(2, 2).neighbors() {
            state.board_mut().card_at_mut(neighbor).unwrap().collapsed = true;
        }

        let outcome = advance_turn(&mut state);
        assert_eq!(outcome.status, GameStatus::Ended);
        assert_eq!(outcome.winner, Some(PlayerId::new(0)));
        assert_eq!(state.winner(), Some(PlayerId::new(0)));
    }

    #[test]
    fn test_double_advance_alternates() {
        let mut state =
            GameState::with_players(fixed_board(), p(0, 0), p(2, 2)).unwrap();
        advance_turn(&mut state);
        advance_turn(&mut state);
        assert_eq!(state.current_player(), PlayerId::new(0));
        assert_eq!(state.status(), GameStatus::Playing);
    }
}
