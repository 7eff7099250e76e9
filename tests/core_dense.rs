//! Tests for the vector kernels and sampling probabilities.
//!
//! These tests check the chunked parallel squared norm against a plain serial sum for
//! several pool sizes, and verify that norm-proportional probability vectors built
//! from random dense matrices are valid distributions.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use faer::Mat;
use kaczmarz::parallel::WorkerPool;
use kaczmarz::sampling::{frobenius_squared, ProbabilityVectorBuilder};
use kaczmarz::{squared_norm, RowMajorMatrix};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Squared norm on pools of one and many workers agrees with the serial sum.
#[test]
fn squared_norm_on_pools_of_one_and_many() {
    let mut rng = StdRng::seed_from_u64(11);
    let v: Vec<f64> = (0..1003).map(|_| rng.gen_range(-1.0..1.0)).collect();
    let expected: f64 = v.iter().map(|x| x * x).sum();
    for workers in [1, 4, 10, 64] {
        let pool = WorkerPool::new(workers).unwrap();
        let got = pool.install(|| squared_norm(&v, pool.workers()));
        assert_relative_eq!(got, expected, max_relative = 1e-9);
    }
}

/// Degenerate lengths: zero vector, a single element, fewer elements than workers.
#[test]
fn squared_norm_degenerate_lengths() {
    assert_eq!(squared_norm(&[0.0; 16], 10), 0.0);
    assert_eq!(squared_norm(&[2.5], 10), 6.25);
    assert_relative_eq!(squared_norm(&[1.0, -2.0, 3.0], 10), 14.0);
}

/// Probability vectors of random matrices lie in [0,1] and sum to one.
#[test]
fn probabilities_form_a_distribution() {
    let mut rng = StdRng::seed_from_u64(5);
    let (m, n) = (40, 7);
    let data: Vec<f64> = (0..m * n).map(|_| rng.gen_range(-3.0..3.0)).collect();
    let a = Mat::from_fn(m, n, |i, j| data[j * m + i]);
    let a = RowMajorMatrix::from(&a);
    let fro = frobenius_squared(&a, 10);
    let expected_fro: f64 = data.iter().map(|x| x * x).sum();
    assert_relative_eq!(fro, expected_fro, max_relative = 1e-9);

    let p = ProbabilityVectorBuilder::new(10).build(&a, fro);
    assert_eq!(p.len(), m);
    for &pi in p.as_slice() {
        assert!((0.0..=1.0).contains(&pi), "probability {pi} out of range");
    }
    assert_abs_diff_eq!(p.sum(), 1.0, epsilon = 1e-12);
}

/// A zero row keeps its place in the vector with weight zero.
#[test]
fn zero_rows_get_zero_weight() {
    let a = RowMajorMatrix::from_rows(&[vec![0.0, 0.0], vec![1.0, 1.0], vec![0.0, 0.0]]).unwrap();
    let p = ProbabilityVectorBuilder::new(3).build(&a, frobenius_squared(&a, 3));
    assert_eq!(p.as_slice(), &[0.0, 1.0, 0.0]);
}
