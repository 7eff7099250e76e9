//! Rejection sampling of row indices.
//!
//! A candidate row is drawn uniformly and accepted when its probability beats a
//! uniform draw from [0,1); otherwise a fresh candidate is drawn. Rows are thus
//! returned with probability proportional to their weight, without building a
//! cumulative table.
//!
//! The default sampler has no attempt limit. It terminates almost surely for a
//! vector with at least one positive weight and never returns for an all-zero
//! vector; nothing detects that case. `RowSampler::bounded` turns an exhausted
//! budget into `KError::SamplingExhausted` instead.

use crate::error::KError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Draws row indices proportionally to a probability vector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowSampler {
    max_attempts: Option<usize>,
}

impl RowSampler {
    /// Sample until a row is accepted.
    pub fn unbounded() -> Self {
        Self { max_attempts: None }
    }

    /// Give up after `max_attempts` rejected candidates.
    pub fn bounded(max_attempts: usize) -> Self {
        Self { max_attempts: Some(max_attempts) }
    }

    pub fn max_attempts(&self) -> Option<usize> {
        self.max_attempts
    }

    /// Draw one index in `0..row_count` using `rng`.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        probs: &[f64],
        row_count: usize,
    ) -> Result<usize, KError> {
        if row_count == 0 || probs.len() < row_count {
            return Err(KError::DimensionMismatch {
                what: "probability vector",
                expected: row_count.max(1),
                found: probs.len(),
            });
        }
        let mut rejected = 0usize;
        let mut candidate = rng.gen_range(0..row_count);
        loop {
            let r: f64 = rng.r#gen();
            if probs[candidate] > r {
                return Ok(candidate);
            }
            rejected += 1;
            if let Some(max) = self.max_attempts {
                if rejected >= max {
                    return Err(KError::SamplingExhausted { attempts: rejected });
                }
            }
            candidate = rng.gen_range(0..row_count);
        }
    }
}

/// Draw one row with a freshly entropy-seeded generator and no attempt limit.
pub fn sample_row(probs: &[f64], row_count: usize) -> Result<usize, KError> {
    RowSampler::unbounded().sample(&mut StdRng::from_entropy(), probs, row_count)
}

/// Where the random numbers for one sample stream come from.
///
/// Unseeded streams build a new entropy-seeded generator for every draw, so
/// streams sampled side by side never share state. Seeded streams keep one
/// generator and replay the same indices for the same seed.
#[derive(Debug, Clone)]
pub struct SampleStream {
    rng: Option<StdRng>,
}

impl SampleStream {
    pub fn entropy() -> Self {
        Self { rng: None }
    }

    pub fn seeded(seed: u64) -> Self {
        Self { rng: Some(StdRng::seed_from_u64(seed)) }
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::entropy, Self::seeded)
    }

    pub fn draw(
        &mut self,
        sampler: &RowSampler,
        probs: &[f64],
        row_count: usize,
    ) -> Result<usize, KError> {
        match self.rng.as_mut() {
            Some(rng) => sampler.sample(rng, probs, row_count),
            None => sampler.sample(&mut StdRng::from_entropy(), probs, row_count),
        }
    }
}
