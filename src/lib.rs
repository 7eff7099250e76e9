//! kaczmarz: randomized Kaczmarz solvers over dense row-major matrices
//!
//! This crate provides the randomized double Kaczmarz (RK-RK) method for the coupled
//! least-squares systems `U·x ≈ y`, `V·b ≈ x`, and the single-system randomized Kaczmarz
//! method it is built from. Rows are sampled with probability proportional to their squared
//! norm; norms, sampling probabilities and per-iteration draws run on a shared-memory worker pool.
//!
//! # Example
//! ```rust
//! use kaczmarz::{rkrk, RowMajorMatrix};
//!
//! let eye = RowMajorMatrix::from_fn(3, 3, |i, j| if i == j { 1.0 } else { 0.0 });
//! let target = [1.0, 2.0, 3.0];
//! let res = rkrk(&eye, &eye, &target, &target, 2000, true).unwrap();
//! assert!((res.b[2] - 3.0).abs() < 1e-2);
//! for (iteration, residual) in res.errors.unwrap().points().take(3) {
//!     println!("{iteration}: {residual}");
//! }
//! ```

pub mod parallel;

pub mod config;
pub mod core;
pub mod error;
pub mod matrix;
pub mod sampling;
pub mod solver;
pub mod utils;

// Re-exports for convenience
pub use config::*;
pub use self::core::*;
pub use error::*;
pub use matrix::*;
pub use sampling::*;
pub use solver::*;
pub use utils::*;

// Re-export SolveStats at the crate root for convenience
pub use utils::convergence::SolveStats;
