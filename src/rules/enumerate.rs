//! Legal-move enumeration.
//!
//! For a given player, search for paths of each candidate distance that
//! pass the full legality pipeline. The same search backs two callers:
//! the turn manager's liveness check (does at least one move exist?) and
//! the highlighting boundary (list every reachable destination).
//!
//! The search is an explicit iterative depth-first search. Depth is at
//! most 4 and branching at most 3 once the no-revisit rule removes the
//! cell just vacated, so a full sweep tries at most 81 paths; the cost
//! is bounded and there is nothing worth caching.

use serde::{Deserialize, Serialize};
use smallvec::smallvec;

use crate::core::{GameState, Path, PlayerId, Position};

use super::distance::distance_rule;
use super::legality::check_cell_enterable;

/// One legal move: where it lands, how far it travels, and a witness
/// path that realizes it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalMove {
    pub destination: Position,
    pub distance: u8,
    pub path: Path,
}

/// Walk every legal path of exactly `distance` steps from `start`,
/// invoking `visit` with each complete path. `visit` returns `true` to
/// stop the search early.
///
/// Every pushed position has already passed the enterable check, and
/// revisits are pruned, so any path reaching full length satisfies the
/// whole legality pipeline: distinct cells imply a non-zero
/// displacement, and the final cell is face-up and free.
fn for_each_path(
    state: &GameState,
    start: Position,
    distance: u8,
    visit: &mut impl FnMut(&Path) -> bool,
) -> bool {
    let target_len = distance as usize + 1;
    let mut stack: Vec<Path> = vec![smallvec![start]];

    while let Some(path) = stack.pop() {
        if path.len() == target_len {
            if visit(&path) {
                return true;
            }
            continue;
        }

        let last = path[path.len() - 1];
        for next in last.neighbors() {
            if path.contains(&next) {
                continue;
            }
            if check_cell_enterable(state, next).is_err() {
                continue;
            }
            let mut extended = path.clone();
            extended.push(next);
            stack.push(extended);
        }
    }

    false
}

/// Enumerate the player's legal moves, one entry per reachable
/// `(destination, distance)` pair with the first witness path found.
///
/// An unplaced player, or one standing in a `Setup`/`Ended` game, has
/// no moves; the caller gates on status.
#[must_use]
pub fn enumerate_legal_moves(state: &GameState, player: PlayerId) -> Vec<LegalMove> {
    let Some(start) = state.player(player).position else {
        return Vec::new();
    };
    let Some(card) = state.board().card_at(start) else {
        return Vec::new();
    };

    let mut seen = rustc_hash::FxHashSet::default();
    let mut moves = Vec::new();

    for distance in distance_rule(card.card_type).candidates() {
        for_each_path(state, start, distance, &mut |path| {
            let destination = path[path.len() - 1];
            if seen.insert((destination, distance)) {
                moves.push(LegalMove {
                    destination,
                    distance,
                    path: path.clone(),
                });
            }
            false
        });
    }

    moves
}

/// Liveness check: does the player have at least one legal move?
///
/// Short-circuits on the first complete path per candidate distance.
#[must_use]
pub fn has_legal_move(state: &GameState, player: PlayerId) -> bool {
    let Some(start) = state.player(player).position else {
        return false;
    };
    let Some(card) = state.board().card_at(start) else {
        return false;
    };

    distance_rule(card.card_type)
        .candidates()
        .into_iter()
        .any(|distance| for_each_path(state, start, distance, &mut |_| true))
}
