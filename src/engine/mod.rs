//! The mutation authority.
//!
//! `GameEngine` owns the single authoritative [`GameState`] plus the
//! transient wild-movement machine. Every mutation flows through one
//! of its methods; callers otherwise only see snapshots. This is the
//! boundary the rendering, persistence, and relay collaborators talk
//! to.

pub mod audit;
mod executor;
mod turn;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{GameState, GameStatus, Move, MoveRecord, PlayerId, Position};
use crate::error::{ConsistencyWarning, MoveError, RuleViolation, StateInconsistency};
use crate::rules::{enumerate_legal_moves, validate_move, LegalMove};
use crate::wild::{WildMovement, WildStepOutcome};

pub use audit::audit;

/// Everything a caller needs after a committed move: the record, the
/// turn/game-end decision, and a snapshot for rendering.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// The committed move with its history metadata.
    pub record: MoveRecord,
    /// Lifecycle status after the turn switch.
    pub status: GameStatus,
    /// The winner, if the opponent was left without a legal move.
    pub winner: Option<PlayerId>,
    /// Post-move state copy for the presentation layer.
    pub snapshot: GameState,
}

/// Progress of an interactive wild move after one accepted step.
#[derive(Clone, Debug)]
pub enum WildProgress {
    /// Step recorded; the mover may step again or stop.
    Continue { remaining_budget: u8 },
    /// Completion was forced (budget spent or dead end) and the move
    /// committed.
    Completed(MoveOutcome),
}

/// Owner of the authoritative game state.
pub struct GameEngine {
    state: GameState,
    wild: Option<WildMovement>,
}

impl GameEngine {
    /// Adopt a pre-built state after validating its invariants.
    pub fn new(state: GameState) -> Result<Self, StateInconsistency> {
        state.validate()?;
        Ok(Self { state, wild: None })
    }

    /// Read access to the authoritative state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The in-flight wild move, if one is active.
    #[must_use]
    pub fn wild_movement(&self) -> Option<&WildMovement> {
        self.wild.as_ref()
    }

    /// A full copy of the current state, for persistence or relays.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// Install a snapshot as authoritative after re-validating it.
    ///
    /// Any active wild move is discarded; it had no board effect.
    pub fn restore_snapshot(&mut self, snapshot: GameState) -> Result<(), StateInconsistency> {
        snapshot.validate()?;
        self.wild = None;
        self.state = snapshot;
        debug!("snapshot restored");
        Ok(())
    }

    /// Run the consistency auditor over the current state.
    #[must_use]
    pub fn audit(&self) -> Vec<ConsistencyWarning> {
        audit::audit(&self.state)
    }

    /// Enumerate a player's legal moves (the same search the turn
    /// manager uses for the game-end decision).
    #[must_use]
    pub fn legal_moves(&self, player: PlayerId) -> Vec<LegalMove> {
        if self.state.status() != GameStatus::Playing {
            return Vec::new();
        }
        enumerate_legal_moves(&self.state, player)
    }

    /// Propose a fully specified move.
    ///
    /// Validates end to end, applies atomically, switches the turn, and
    /// reports the game-end decision. A rejected move leaves board,
    /// pieces, and turn untouched.
    pub fn propose_move(&mut self, mv: Move) -> Result<MoveOutcome, MoveError> {
        self.ensure_actionable(mv.player)?;
        validate_move(&self.state, &mv)?;
        self.commit(mv)
    }

    /// Activate wild movement for the current player.
    pub fn start_wild_move(&mut self, player: PlayerId) -> Result<&WildMovement, MoveError> {
        self.ensure_actionable(player)?;
        let machine = WildMovement::begin(&self.state, player)?;
        Ok(self.wild.insert(machine))
    }

    /// Extend the active wild move by one cell.
    ///
    /// When the step exhausts the budget or leaves no legal
    /// continuation, completion is forced and the accumulated path is
    /// committed immediately.
    pub fn step_wild_move(&mut self, target: Position) -> Result<WildProgress, MoveError> {
        let wild = self
            .wild
            .as_mut()
            .ok_or(RuleViolation::NoWildMoveActive)?;

        match wild.step(&self.state, target)? {
            WildStepOutcome::Stepped { remaining_budget } => {
                Ok(WildProgress::Continue { remaining_budget })
            }
            WildStepOutcome::MustComplete => {
                let mv = match self.wild.take() {
                    Some(machine) => machine.into_move()?,
                    None => return Err(RuleViolation::NoWildMoveActive.into()),
                };
                Ok(WildProgress::Completed(self.commit(mv)?))
            }
        }
    }

    /// Stop the active wild move early and commit its path.
    ///
    /// Requires at least one accepted step; the unused budget is
    /// discarded.
    pub fn complete_wild_move(&mut self) -> Result<MoveOutcome, MoveError> {
        let Some(wild) = self.wild.take() else {
            return Err(RuleViolation::NoWildMoveActive.into());
        };
        if !wild.can_complete() {
            self.wild = Some(wild);
            return Err(RuleViolation::WildMoveTooShort.into());
        }
        let mv = wild.into_move()?;
        self.commit(mv)
    }

    /// Abandon the active wild move. No board effect to undo.
    pub fn cancel_wild_move(&mut self) -> Result<(), MoveError> {
        if self.wild.take().is_some() {
            debug!("wild move cancelled");
            Ok(())
        } else {
            Err(RuleViolation::NoWildMoveActive.into())
        }
    }

    /// Gate shared by every move-initiating call.
    fn ensure_actionable(&self, player: PlayerId) -> Result<(), MoveError> {
        if self.state.status() != GameStatus::Playing {
            return Err(RuleViolation::GameNotInProgress.into());
        }
        if self.state.current_player() != player {
            return Err(RuleViolation::NotYourTurn { player }.into());
        }
        if self.wild.is_some() {
            return Err(RuleViolation::WildMoveAlreadyActive.into());
        }
        Ok(())
    }

    /// Execute + turn switch, shared by the direct and wild paths.
    fn commit(&mut self, mv: Move) -> Result<MoveOutcome, MoveError> {
        let record = executor::apply_move(&mut self.state, &mv)?;
        self.wild = None;
        let outcome = turn::advance_turn(&mut self.state);
        Ok(MoveOutcome {
            record,
            status: outcome.status,
            winner: outcome.winner,
            snapshot: self.state.clone(),
        })
    }
}
