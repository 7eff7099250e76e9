//! Matrix module: row-major dense storage for row sampling.

pub mod dense;
pub use dense::RowMajorMatrix;
