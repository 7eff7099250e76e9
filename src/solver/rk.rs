//! Randomized Kaczmarz for a single system (Strohmer & Vershynin, 2009).
//!
//! Each iteration samples row `i` with probability `‖aᵢ‖² / ‖A‖_F²` and
//! projects the iterate onto the hyperplane `aᵢ·x = bᵢ`:
//!
//! ```text
//! x ← x + (bᵢ − aᵢ·x) / ‖aᵢ‖² · aᵢ
//! ```
//!
//! The iteration count is fixed; there is no stopping test. For a consistent
//! system the expected error contracts by `1 − σ_min²(A)/‖A‖_F²` per step.
//!
//! # References
//! - Strohmer, T., Vershynin, R. (2009). A randomized Kaczmarz algorithm with exponential convergence.

use crate::config::RkOptions;
use crate::core::traits::RowAccess;
use crate::core::vector::{axpy, dot, squared_norm};
use crate::error::KError;
use crate::parallel::WorkerPool;
use crate::sampling::{frobenius_squared, ProbabilityVectorBuilder, RowSampler, SampleStream};
use crate::solver::LinearSolver;
use crate::utils::convergence::SolveStats;
use crate::utils::residuals::ResidualTrace;
use tracing::{debug, trace, warn};

/// Project `x` onto `row·x = target`; returns the step length.
///
/// A zero `row` gives a non-finite step, which is written into `x` as is.
pub(crate) fn project_onto_row(row: &[f64], target: f64, x: &mut [f64], workers: usize) -> f64 {
    let step = (target - dot(row, x)) / squared_norm(row, workers);
    axpy(step, row, x);
    step
}

/// ‖Ax − b‖²
pub(crate) fn residual_squared<M>(a: &M, x: &[f64], b: &[f64]) -> f64
where
    M: RowAccess<f64> + Sync,
{
    let res = |i: usize| {
        let r = dot(a.row(i), x) - b[i];
        r * r
    };
    #[cfg(feature = "rayon")]
    {
        use rayon::prelude::*;
        (0..a.nrows()).into_par_iter().map(res).sum()
    }
    #[cfg(not(feature = "rayon"))]
    {
        (0..a.nrows()).map(res).sum()
    }
}

pub struct RkSolver {
    pub opts: RkOptions,
}

impl RkSolver {
    pub fn new(opts: RkOptions) -> Self {
        Self { opts }
    }

    fn run<M>(&self, a: &M, b: &[f64], x: &mut [f64]) -> Result<SolveStats<f64>, KError>
    where
        M: RowAccess<f64> + Sync,
    {
        let workers = self.opts.workers;
        let fro = frobenius_squared(a, workers);
        if fro == 0.0 {
            return Err(KError::ZeroFrobenius("A"));
        }
        if !fro.is_finite() {
            return Err(KError::NonFiniteInput("A"));
        }
        let probs = ProbabilityVectorBuilder::new(workers).build(a, fro);
        debug!(rows = a.nrows(), cols = a.ncols(), frobenius_squared = fro, "rk setup complete");

        let sampler = self.opts.max_sampling_attempts.map_or_else(RowSampler::unbounded, RowSampler::bounded);
        let mut stream = SampleStream::from_seed(self.opts.seed);
        let mut trace = self.opts.track_errors.then(|| ResidualTrace::with_capacity(self.opts.iterations));
        let mut warned = false;

        for it in 0..self.opts.iterations {
            let row = stream.draw(&sampler, probs.as_slice(), a.nrows())?;
            let step = project_onto_row(a.row(row), b[row], x, workers);
            if !step.is_finite() {
                if self.opts.fail_on_non_finite {
                    return Err(KError::NonFinite { iteration: it });
                }
                if !warned {
                    warn!(iteration = it, row, "non-finite kaczmarz step");
                    warned = true;
                }
            }
            if let Some(t) = trace.as_mut() {
                t.push(residual_squared(a, x, b));
            }
            trace!(iteration = it, row, step, "rk step");
        }

        Ok(SolveStats {
            iterations: self.opts.iterations,
            final_residual: residual_squared(a, x, b),
            trace,
        })
    }
}

impl<M> LinearSolver<M, Vec<f64>> for RkSolver
where
    M: RowAccess<f64> + Sync,
{
    type Error = KError;
    type Scalar = f64;

    /// Run the configured number of sweeps from the initial guess in `x`.
    fn solve(&mut self, a: &M, b: &Vec<f64>, x: &mut Vec<f64>) -> Result<SolveStats<f64>, KError> {
        self.opts.validate()?;
        if b.len() != a.nrows() {
            return Err(KError::DimensionMismatch { what: "b", expected: a.nrows(), found: b.len() });
        }
        if x.len() != a.ncols() {
            return Err(KError::DimensionMismatch { what: "x", expected: a.ncols(), found: x.len() });
        }
        let pool = WorkerPool::new(self.opts.workers)?;
        let this = &*self;
        pool.install(|| this.run(a, b, x))
    }
}
