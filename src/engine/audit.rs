//! Non-authoritative consistency auditing.
//!
//! Scans board and player state for contradictions after mutations.
//! Findings are diagnostics, never a gate: gameplay proceeds, the
//! warnings are logged and returned for whoever wants to look.

use tracing::warn;

use crate::core::{GameState, GameStatus, PlayerId};
use crate::error::ConsistencyWarning;

/// Scan the state for internal contradictions.
///
/// Each finding is emitted through `tracing` and collected into the
/// returned list. An empty list means no contradiction was observed.
#[must_use]
pub fn audit(state: &GameState) -> Vec<ConsistencyWarning> {
    let mut warnings = Vec::new();

    for (position, card) in state.board().iter() {
        if card.collapsed && card.occupant.is_some() {
            warnings.push(ConsistencyWarning::CollapsedCellOccupied { position });
        }
        let authoritative = state.players().occupant_of(position);
        if card.occupant != authoritative {
            warnings.push(ConsistencyWarning::OccupancyFlagMismatch {
                position,
                flag: card.occupant,
                authoritative,
            });
        }
    }

    let positions = (
        state.player(PlayerId::new(0)).position,
        state.player(PlayerId::new(1)).position,
    );
    if let (Some(a), Some(b)) = positions {
        if a == b {
            warnings.push(ConsistencyWarning::PlayersOverlap { position: a });
        }
    }

    // Each committed move collapses exactly one cell.
    if state.status() != GameStatus::Setup {
        let collapsed = state.board().collapsed_count();
        let moves = state.history().len();
        if collapsed != moves {
            warnings.push(ConsistencyWarning::CollapseHistoryDrift { collapsed, moves });
        }
    }

    match (state.status(), state.winner()) {
        (GameStatus::Ended, None) => warnings.push(ConsistencyWarning::EndedWithoutWinner),
        (GameStatus::Setup | GameStatus::Playing, Some(_)) => {
            warnings.push(ConsistencyWarning::WinnerBeforeEnd)
        }
        _ => {}
    }

    for warning in &warnings {
        warn!(%warning, "consistency audit finding");
    }
    warnings
}
