//! Geometric path validation.
//!
//! Checks only the shape of a path: every consecutive pair must be one
//! orthogonal wraparound step apart, and no position may appear twice.
//! Board contents (collapse, occupancy) are deliberately out of scope
//! here; the orchestration layer walks the board separately.

use rustc_hash::FxHashSet;

use crate::core::Position;
use crate::error::RuleViolation;

/// Validate a path's geometry.
///
/// Returns the number of steps on success. Fails at the first offending
/// element: [`RuleViolation::NonOrthogonalStep`] when a consecutive pair
/// is not wraparound-adjacent, [`RuleViolation::RevisitedPosition`] when
/// a position repeats (by value, not index).
///
/// Empty and single-element paths are vacuously valid with zero steps;
/// rejecting zero-displacement moves is the ending validator's job.
pub fn validate_path(path: &[Position]) -> Result<usize, RuleViolation> {
    let mut visited = FxHashSet::default();

    for (index, &position) in path.iter().enumerate() {
        if index > 0 && !path[index - 1].is_adjacent(position) {
            return Err(RuleViolation::NonOrthogonalStep { step: index });
        }
        if !visited.insert(position) {
            return Err(RuleViolation::RevisitedPosition {
                step: index,
                position,
            });
        }
    }

    Ok(path.len().saturating_sub(1))
}
