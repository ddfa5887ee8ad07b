//! The wild-movement state machine.
//!
//! A joker's distance is chosen interactively: the mover extends a path
//! one cell at a time and may stop after any step, up to a budget of
//! four. The machine is pure: it reads the game state but never writes
//! it, and it owns no rendering concerns. Commit happens outside, via
//! the move executor, once the machine yields a finished [`Move`].
//!
//! Lifecycle: `begin` (budget 4, path seeded with the mover's cell) →
//! zero or more `step`s → `into_move` on an explicit stop, a spent
//! budget, or a dead end. Cancellation is just dropping the machine; no
//! board effect exists to undo.

use serde::{Deserialize, Serialize};
use smallvec::smallvec;

use crate::core::{CardType, GameState, Move, Path, PlayerId, Position, MAX_DISTANCE};
use crate::error::{MoveError, RuleViolation, StateInconsistency};
use crate::rules::legality::check_cell_enterable;

/// Outcome of one accepted wild step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WildStepOutcome {
    /// Step recorded; the mover may continue or stop.
    Stepped { remaining_budget: u8 },
    /// Step recorded and no continuation exists (budget spent or no
    /// legal next cell). The accumulated path must be committed.
    MustComplete,
}

/// In-flight state of one interactively built wild move.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WildMovement {
    player: PlayerId,
    card_type: CardType,
    path: Path,
    budget: u8,
}

impl WildMovement {
    /// Activate wild movement for a player standing on a joker.
    ///
    /// Fails with [`RuleViolation::NotWildCard`] off a numbered card and
    /// with [`RuleViolation::NoLegalWildStep`] when every adjacent cell
    /// is collapsed or occupied. In that case the player has no move at
    /// all, which is a game-end condition, not a silent pass.
    pub fn begin(state: &GameState, player: PlayerId) -> Result<Self, MoveError> {
        let position = state
            .player(player)
            .position
            .ok_or(StateInconsistency::PlayerNotPlaced { player })?;
        let card = state
            .standing_card(player)
            .ok_or(StateInconsistency::PlayerOffBoard { player })?;
        if !card.card_type.is_wild() {
            return Err(RuleViolation::NotWildCard {
                card_type: card.card_type,
            }
            .into());
        }

        let machine = Self {
            player,
            card_type: card.card_type,
            path: smallvec![position],
            budget: MAX_DISTANCE,
        };
        if !machine.has_legal_step(state) {
            return Err(RuleViolation::NoLegalWildStep.into());
        }
        Ok(machine)
    }

    /// The acting player.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.player
    }

    /// The path accumulated so far, starting cell first.
    #[must_use]
    pub fn path(&self) -> &[Position] {
        &self.path
    }

    /// Steps still available.
    #[must_use]
    pub fn remaining_budget(&self) -> u8 {
        self.budget
    }

    /// Steps taken so far.
    #[must_use]
    pub fn steps_taken(&self) -> usize {
        self.path.len() - 1
    }

    /// Whether an explicit stop is allowed (at least one step taken).
    #[must_use]
    pub fn can_complete(&self) -> bool {
        self.path.len() >= 2
    }

    /// Whether any legal continuation exists from the path's last cell.
    #[must_use]
    pub fn has_legal_step(&self, state: &GameState) -> bool {
        let last = self.path[self.path.len() - 1];
        last.neighbors()
            .any(|n| !self.path.contains(&n) && check_cell_enterable(state, n).is_ok())
    }

    /// Record one step to `target`.
    ///
    /// The target must be wraparound-adjacent to the path's last cell,
    /// unvisited, face-up, and free, the same checks a fully specified
    /// move's cells go through. A rejected step leaves the machine
    /// unchanged; the mover may try another cell.
    pub fn step(
        &mut self,
        state: &GameState,
        target: Position,
    ) -> Result<WildStepOutcome, MoveError> {
        if self.budget == 0 {
            return Err(RuleViolation::WildBudgetExhausted.into());
        }

        let last = self.path[self.path.len() - 1];
        if !last.is_adjacent(target) {
            return Err(RuleViolation::NonOrthogonalStep {
                step: self.path.len(),
            }
            .into());
        }
        if self.path.contains(&target) {
            return Err(RuleViolation::RevisitedPosition {
                step: self.path.len(),
                position: target,
            }
            .into());
        }
        check_cell_enterable(state, target)?;

        self.path.push(target);
        self.budget -= 1;

        if self.budget == 0 || !self.has_legal_step(state) {
            Ok(WildStepOutcome::MustComplete)
        } else {
            Ok(WildStepOutcome::Stepped {
                remaining_budget: self.budget,
            })
        }
    }

    /// Finish the wild move, yielding the move to execute.
    ///
    /// The remaining budget is discarded; it never carries over to a
    /// later turn.
    pub fn into_move(self) -> Result<Move, MoveError> {
        if !self.can_complete() {
            return Err(RuleViolation::WildMoveTooShort.into());
        }
        Ok(Move::from_path(self.player, self.card_type, self.path))
    }
}
