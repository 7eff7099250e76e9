//! Randomized double Kaczmarz (RK-RK) for the coupled systems `U·x ≈ y`, `V·b ≈ x`.
//!
//! Two randomized Kaczmarz sweeps run in lockstep. The first drives `x` towards
//! a solution of `U·x = y`; the second drives `b` towards a solution of
//! `V·b = x`, reading its target entry from the `x` the first sweep has just
//! produced.
//!
//! # Algorithm
//!
//! ```text
//! pU = ‖U_i‖² / ‖U‖_F²,  pV = ‖V_j‖² / ‖V‖_F²        (built in parallel)
//! x = 0, b = 0
//! for k in 0..iterations:
//!     i ~ pU, j ~ pV                                  (sampled in parallel)
//!     x ← x + (y_i − U_i·x) / ‖U_i‖² · U_iᵀ
//!     b ← b + (x_j − V_j·b) / ‖V_j‖² · V_jᵀ
//!     errors[k] = ‖b − B‖²                            (when tracking)
//! ```
//!
//! `x_j` indexes `x` with a row index of `V`. That cross-index is the coupling
//! of the method, so `V` may not have more rows than `x` has entries; this is
//! checked before any work starts.
//!
//! Iterations run strictly in order. Only the setup and the two draws inside an
//! iteration are parallel, and each parallel section joins before its results
//! are read.
//!
//! # Degenerate input
//!
//! Zero rows carry zero probability and are never accepted by the sampler. A
//! non-finite step (from non-finite `y`, or overflow) is written into `x`/`b`
//! and returned unless `RkOptions::fail_on_non_finite` is set.

use crate::config::RkOptions;
use crate::core::traits::RowAccess;
use crate::core::vector::squared_distance;
use crate::error::KError;
use crate::parallel::{join, WorkerPool};
use crate::sampling::{frobenius_squared, ProbabilityVectorBuilder, RowSampler, SampleStream};
use crate::solver::rk::project_onto_row;
use crate::utils::residuals::ResidualTrace;
use tracing::{debug, trace, warn};

/// Final iterates and, when tracked, ‖b − B‖² per iteration.
#[derive(Debug, Clone)]
pub struct RkRkResult {
    pub x: Vec<f64>,
    pub b: Vec<f64>,
    pub errors: Option<ResidualTrace>,
}

pub struct RkRkSolver {
    pub opts: RkOptions,
}

impl RkRkSolver {
    pub fn new(opts: RkOptions) -> Self {
        Self { opts }
    }

    /// Solve the coupled pair. `b_ref` is the reference `B` the tracked error is
    /// measured against.
    ///
    /// Dimension problems are reported before any sampling; on error nothing
    /// is returned.
    pub fn solve<MU, MV>(
        &self,
        u: &MU,
        v: &MV,
        y: &[f64],
        b_ref: &[f64],
    ) -> Result<RkRkResult, KError>
    where
        MU: RowAccess<f64> + Sync,
        MV: RowAccess<f64> + Sync,
    {
        self.opts.validate()?;
        if y.len() != u.nrows() {
            return Err(KError::DimensionMismatch { what: "y", expected: u.nrows(), found: y.len() });
        }
        if b_ref.len() != v.ncols() {
            return Err(KError::DimensionMismatch { what: "B", expected: v.ncols(), found: b_ref.len() });
        }
        if v.nrows() > u.ncols() {
            return Err(KError::DimensionMismatch {
                what: "rows of V (indexing x)",
                expected: u.ncols(),
                found: v.nrows(),
            });
        }
        let pool = WorkerPool::new(self.opts.workers)?;
        debug!(workers = pool.workers(), threads = pool.threads(), "rk-rk worker pool ready");
        pool.install(|| self.run(u, v, y, b_ref))
    }

    fn run<MU, MV>(&self, u: &MU, v: &MV, y: &[f64], b_ref: &[f64]) -> Result<RkRkResult, KError>
    where
        MU: RowAccess<f64> + Sync,
        MV: RowAccess<f64> + Sync,
    {
        let workers = self.opts.workers;
        let (u_fro, v_fro) = join(|| frobenius_squared(u, workers), || frobenius_squared(v, workers));
        for (name, fro) in [("U", u_fro), ("V", v_fro)] {
            if fro == 0.0 {
                return Err(KError::ZeroFrobenius(name));
            }
            if !fro.is_finite() {
                return Err(KError::NonFiniteInput(name));
            }
        }

        let builder = ProbabilityVectorBuilder::new(workers);
        let (u_probs, v_probs) = join(|| builder.build(u, u_fro), || builder.build(v, v_fro));
        debug!(
            urows = u.nrows(),
            ucols = u.ncols(),
            vrows = v.nrows(),
            vcols = v.ncols(),
            u_frobenius_squared = u_fro,
            v_frobenius_squared = v_fro,
            "rk-rk setup complete"
        );

        let sampler = self.opts.max_sampling_attempts.map_or_else(RowSampler::unbounded, RowSampler::bounded);
        // U and V draw from separate streams so the two samples stay independent
        let mut u_stream = SampleStream::from_seed(self.opts.seed);
        let mut v_stream = SampleStream::from_seed(self.opts.seed.map(|s| s.wrapping_add(1)));

        let mut x = vec![0.0; u.ncols()];
        let mut b = vec![0.0; v.ncols()];
        let mut errors = self.opts.track_errors.then(|| ResidualTrace::with_capacity(self.opts.iterations));
        let mut warned = false;

        for it in 0..self.opts.iterations {
            let (u_row, v_row) = join(
                || u_stream.draw(&sampler, u_probs.as_slice(), u.nrows()),
                || v_stream.draw(&sampler, v_probs.as_slice(), v.nrows()),
            );
            let (u_row, v_row) = (u_row?, v_row?);

            let t = project_onto_row(u.row(u_row), y[u_row], &mut x, workers);
            // reads the x just updated above
            let s = project_onto_row(v.row(v_row), x[v_row], &mut b, workers);

            if !(t.is_finite() && s.is_finite()) {
                if self.opts.fail_on_non_finite {
                    return Err(KError::NonFinite { iteration: it });
                }
                if !warned {
                    warn!(iteration = it, u_row, v_row, "non-finite kaczmarz step");
                    warned = true;
                }
            }
            if let Some(trace) = errors.as_mut() {
                trace.push(squared_distance(&b, b_ref, workers));
            }
            trace!(iteration = it, u_row, v_row, t, s, "rk-rk step");
        }

        Ok(RkRkResult { x, b, errors })
    }
}

/// One-call RK-RK with default pool and sampling settings.
pub fn rkrk<MU, MV>(
    u: &MU,
    v: &MV,
    y: &[f64],
    b_ref: &[f64],
    iterations: usize,
    track_errors: bool,
) -> Result<RkRkResult, KError>
where
    MU: RowAccess<f64> + Sync,
    MV: RowAccess<f64> + Sync,
{
    RkRkSolver::new(RkOptions::new(iterations, track_errors)).solve(u, v, y, b_ref)
}
