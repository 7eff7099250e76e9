//! Core traits and vector kernels.

pub mod traits;
pub mod vector;

pub use traits::{MatShape, MatVec, RowAccess};
pub use vector::{axpy, dot, squared_distance, squared_norm};
