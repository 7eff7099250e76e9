//! Iteration stats for fixed-iteration solvers.

use crate::utils::residuals::ResidualTrace;

/// What a single-system solve reports back.
#[derive(Clone, Debug)]
pub struct SolveStats<T> {
    /// Iterations performed; always the configured count
    pub iterations: usize,
    /// ‖Ax − b‖² at the returned x
    pub final_residual: T,
    /// Per-iteration ‖Ax − b‖² when tracking was requested
    pub trace: Option<ResidualTrace>,
}
