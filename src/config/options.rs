//! API options for the randomized Kaczmarz solvers.
//!
//! This module provides the `RkOptions` struct, which controls the number of
//! iterations, residual tracking, the size of the worker pool used for norm
//! computations, and how rows are sampled. Options are plain data with
//! builder-style setters so they can be filled from any outer configuration
//! layer.

use crate::error::KError;

/// Number of partial sums a squared norm is split into when nothing else is configured.
pub const DEFAULT_WORKERS: usize = 10;

/// Solver iteration & sampling parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct RkOptions {
    /// Fixed number of iterations; there is no early stopping
    pub iterations: usize,

    /// Record ‖b − B‖² (or ‖Ax − b‖² for the single-system solver) every iteration
    pub track_errors: bool,

    /// Chunks per squared norm, and upper bound on pool threads
    pub workers: usize,

    /// Rejected draws allowed per sample; `None` samples until a row is accepted
    pub max_sampling_attempts: Option<usize>,

    /// Seed for a reproducible sample stream; `None` seeds every draw from entropy
    pub seed: Option<u64>,

    /// Abort with `KError::NonFinite` instead of propagating NaN/Inf
    pub fail_on_non_finite: bool,
}

impl Default for RkOptions {
    fn default() -> Self {
        Self {
            iterations: 0,
            track_errors: false,
            workers: DEFAULT_WORKERS,
            max_sampling_attempts: None,
            seed: None,
            fail_on_non_finite: false,
        }
    }
}

impl RkOptions {
    pub fn new(iterations: usize, track_errors: bool) -> Self {
        Self { iterations, track_errors, ..Self::default() }
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_max_sampling_attempts(mut self, attempts: usize) -> Self {
        self.max_sampling_attempts = Some(attempts);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_fail_on_non_finite(mut self, fail: bool) -> Self {
        self.fail_on_non_finite = fail;
        self
    }

    /// Reject settings that can never produce a solve.
    pub fn validate(&self) -> Result<(), KError> {
        if self.workers == 0 {
            return Err(KError::InvalidOption("workers must be at least 1"));
        }
        if self.max_sampling_attempts == Some(0) {
            return Err(KError::InvalidOption("max_sampling_attempts must be at least 1"));
        }
        Ok(())
    }
}
