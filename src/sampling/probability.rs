//! Row sampling probabilities.
//!
//! Row `i` of `A` is drawn with probability `‖aᵢ‖² / ‖A‖_F²`. Every row is
//! independent of the others, so all of them are computed as parallel tasks and
//! collected in row order once the last task finishes.

use crate::core::traits::RowAccess;
use crate::core::vector::squared_norm;

/// Per-row sampling weights of a matrix, in row order.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityVector(Vec<f64>);

impl ProbabilityVector {
    /// Wrap arbitrary weights; the rejection sampler only needs values in [0,1].
    pub fn from_weights(weights: Vec<f64>) -> Self {
        Self(weights)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl AsRef<[f64]> for ProbabilityVector {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

/// ‖A‖_F², the sum of all row squared norms.
pub fn frobenius_squared<M>(a: &M, workers: usize) -> f64
where
    M: RowAccess<f64> + Sync,
{
    #[cfg(feature = "rayon")]
    {
        use rayon::prelude::*;
        (0..a.nrows())
            .into_par_iter()
            .map(|i| squared_norm(a.row(i), workers))
            .sum()
    }
    #[cfg(not(feature = "rayon"))]
    {
        (0..a.nrows()).map(|i| squared_norm(a.row(i), workers)).sum()
    }
}

/// Builds the norm-proportional sampling weights of a matrix.
#[derive(Debug, Clone, Copy)]
pub struct ProbabilityVectorBuilder {
    workers: usize,
}

impl ProbabilityVectorBuilder {
    pub fn new(workers: usize) -> Self {
        Self { workers }
    }

    /// Entry `i` is `‖aᵢ‖² / frobenius_squared`.
    ///
    /// `frobenius_squared` must be the squared Frobenius norm of `a` and strictly
    /// positive; a zero matrix gives NaN weights.
    pub fn build<M>(&self, a: &M, frobenius_squared: f64) -> ProbabilityVector
    where
        M: RowAccess<f64> + Sync,
    {
        debug_assert!(frobenius_squared > 0.0, "frobenius norm must be positive");
        let workers = self.workers;
        #[cfg(feature = "rayon")]
        let probs: Vec<f64> = {
            use rayon::prelude::*;
            (0..a.nrows())
                .into_par_iter()
                .map(|i| squared_norm(a.row(i), workers) / frobenius_squared)
                .collect()
        };
        #[cfg(not(feature = "rayon"))]
        let probs: Vec<f64> = (0..a.nrows())
            .map(|i| squared_norm(a.row(i), workers) / frobenius_squared)
            .collect();
        ProbabilityVector(probs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::RowMajorMatrix;
    use approx::assert_relative_eq;

    #[test]
    fn weights_follow_row_norms() {
        let a = RowMajorMatrix::from_rows(&[vec![3.0, 4.0], vec![0.0, 0.0], vec![0.0, 5.0]]).unwrap();
        let fro = frobenius_squared(&a, 10);
        assert_relative_eq!(fro, 50.0);
        let p = ProbabilityVectorBuilder::new(10).build(&a, fro);
        assert_eq!(p.len(), 3);
        assert_relative_eq!(p.as_slice()[0], 0.5);
        assert_eq!(p.as_slice()[1], 0.0);
        assert_relative_eq!(p.as_slice()[2], 0.5);
    }

    #[test]
    fn weights_of_identity_are_uniform() {
        let n = 4;
        let a = RowMajorMatrix::from_fn(n, n, |i, j| if i == j { 1.0 } else { 0.0 });
        let p = ProbabilityVectorBuilder::new(2).build(&a, frobenius_squared(&a, 2));
        for &pi in p.as_slice() {
            assert_relative_eq!(pi, 0.25);
        }
    }
}
