//! Vector kernels used by the Kaczmarz sweeps.
//!
//! The squared norm is the hot path: it is evaluated for every row while the
//! sampling probabilities are built, for every sampled row in every iteration,
//! and for the residual trace. It splits its input into a fixed number of
//! contiguous chunks and reduces the per-chunk sums of squares on the current
//! rayon pool, so the chunk count (the configured worker count) rather than the
//! pool size decides how the work is partitioned.
//!
//! Floating-point addition is not associative, so parallel results can differ
//! from a serial sum in the last bits. Compare with a tolerance.

use num_traits::Float;

/// Squared Euclidean norm `Σ vᵢ²`, split into `workers` contiguous chunks.
///
/// Chunk `i` covers `i·n/workers .. (i+1)·n/workers`, so every element is
/// counted once and chunk sizes differ by at most one. When `n < workers` the
/// surplus chunks are empty and contribute zero. `workers == 0` acts as 1.
pub fn squared_norm<T>(v: &[T], workers: usize) -> T
where
    T: Float + Send + Sync,
{
    let workers = workers.max(1);
    let n = v.len();
    let partial = move |i: usize| -> T {
        let start = i * n / workers;
        let end = (i + 1) * n / workers;
        v[start..end].iter().fold(T::zero(), |acc, &vi| acc + vi * vi)
    };
    #[cfg(feature = "rayon")]
    {
        use rayon::prelude::*;
        (0..workers)
            .into_par_iter()
            .map(partial)
            .reduce(|| T::zero(), |acc, s| acc + s)
    }
    #[cfg(not(feature = "rayon"))]
    {
        (0..workers).map(partial).fold(T::zero(), |acc, s| acc + s)
    }
}

/// Squared distance `‖a − b‖²`.
pub fn squared_distance<T>(a: &[T], b: &[T], workers: usize) -> T
where
    T: Float + Send + Sync,
{
    assert_eq!(a.len(), b.len(), "Vectors must have the same length");
    let diff: Vec<T> = a.iter().zip(b).map(|(&ai, &bi)| ai - bi).collect();
    squared_norm(&diff, workers)
}

/// Dot product `aᵀb`, serial; rows are short compared to the task overhead.
pub fn dot<T: Float>(a: &[T], b: &[T]) -> T {
    assert_eq!(a.len(), b.len(), "Vectors must have the same length");
    a.iter()
        .zip(b)
        .fold(T::zero(), |acc, (&ai, &bi)| acc + ai * bi)
}

/// y ← y + alpha·x
pub fn axpy<T: Float>(alpha: T, x: &[T], y: &mut [T]) {
    assert_eq!(x.len(), y.len(), "Vectors must have the same length");
    for (yi, &xi) in y.iter_mut().zip(x) {
        *yi = *yi + alpha * xi;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn squared_norm_matches_serial_sum() {
        let v: Vec<f64> = (0..97).map(|i| (i as f64 * 0.37).sin()).collect();
        let expected: f64 = v.iter().map(|x| x * x).sum();
        for workers in [1, 3, 10, 97, 200] {
            assert_relative_eq!(squared_norm(&v, workers), expected, max_relative = 1e-9);
        }
    }

    #[test]
    fn squared_norm_covers_remainder() {
        // 23 elements over 10 chunks: floor-divided boundaries must not drop the tail
        let v = vec![1.0f64; 23];
        assert_eq!(squared_norm(&v, 10), 23.0);
    }

    #[test]
    fn squared_norm_of_empty_and_zero_vectors() {
        assert_eq!(squared_norm::<f64>(&[], 10), 0.0);
        assert_eq!(squared_norm(&[0.0f64; 8], 4), 0.0);
        assert_eq!(squared_norm(&[-3.0f64], 10), 9.0);
    }

    #[test]
    fn zero_workers_acts_as_one() {
        assert_eq!(squared_norm(&[1.0f64, 2.0, 2.0], 0), 9.0);
    }

    #[test]
    fn dot_axpy_and_distance() {
        let a = [1.0, 2.0, 3.0];
        let mut y = [1.0, 1.0, 1.0];
        assert_eq!(dot(&a, &y), 6.0);
        axpy(2.0, &a, &mut y);
        assert_eq!(y, [3.0, 5.0, 7.0]);
        assert_relative_eq!(squared_distance(&y, &a, 2), 4.0 + 9.0 + 16.0);
    }
}
