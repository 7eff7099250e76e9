//! Residual traces and solve statistics.

pub mod convergence;
pub mod residuals;

pub use residuals::{ResidualPlotter, ResidualTrace};
