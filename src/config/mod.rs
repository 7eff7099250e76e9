//! Solver configuration.

pub mod options;
pub use options::{RkOptions, DEFAULT_WORKERS};
