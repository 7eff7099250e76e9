//! Norm-proportional row sampling.

pub mod probability;
pub mod rejection;

pub use probability::{frobenius_squared, ProbabilityVector, ProbabilityVectorBuilder};
pub use rejection::{sample_row, RowSampler, SampleStream};
