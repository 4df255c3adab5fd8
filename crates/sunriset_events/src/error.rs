//! Error types for the event solver.

use thiserror::Error;

use crate::riseset::Branch;

/// Errors surfaced by the event solver.
///
/// The solver itself is total; these only arise from an explicit
/// [`crate::EventResult::ensure_converged`] check or a rejected config.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SolverError {
    /// Fixed-point iteration hit its cap before reaching tolerance.
    #[error("{branch} time did not converge after {iterations} iterations (last change {delta_hours:e} h)")]
    NoConvergence {
        branch: Branch,
        iterations: u32,
        delta_hours: f64,
    },
    /// Solver configuration out of range.
    #[error("invalid solver config: {0}")]
    InvalidConfig(&'static str),
}
