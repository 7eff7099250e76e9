use thiserror::Error;

// Unified error type for kaczmarz

#[derive(Error, Debug)]
pub enum KError {
    #[error("dimension mismatch: {what} has length {found}, expected {expected}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("matrix {0} has zero Frobenius norm")]
    ZeroFrobenius(&'static str),
    #[error("matrix {0} has a non-finite Frobenius norm")]
    NonFiniteInput(&'static str),
    #[error("invalid option: {0}")]
    InvalidOption(&'static str),
    #[error("row sampling gave up after {attempts} rejected draws")]
    SamplingExhausted { attempts: usize },
    #[error("non-finite update at iteration {iteration}")]
    NonFinite { iteration: usize },
    #[error("worker pool error: {0}")]
    WorkerPool(String),
    #[error("plotting collaborator failed: {0}")]
    Plot(String),
}
