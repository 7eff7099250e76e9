//! Randomized Kaczmarz solver interfaces.

use crate::utils::convergence::SolveStats;

/// Common interface for single-system iterative solvers.
pub trait LinearSolver<M, V> {
    type Error;
    /// Solve A·x ≈ b starting from `x`, writing the result into `x`.
    /// Returns iteration stats.
    fn solve(
        &mut self,
        a: &M,
        b: &V,
        x: &mut V
    ) -> Result<SolveStats<<Self as LinearSolver<M, V>>::Scalar>, Self::Error>;
    type Scalar: Copy + PartialOrd + From<f64>;
}

pub mod rk;
pub use rk::RkSolver;

pub mod rkrk;
pub use rkrk::{rkrk, RkRkResult, RkRkSolver};
