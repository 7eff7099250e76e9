//! Residual traces and the plotting seam.
//!
//! A solve with error tracking records one squared residual per iteration.
//! The trace is handed to an external plotter as `(iteration, residual)` pairs;
//! nothing in this crate renders images.

use crate::error::KError;
use std::path::Path;

/// Squared residuals in iteration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResidualTrace {
    values: Vec<f64>,
}

impl ResidualTrace {
    pub fn with_capacity(iterations: usize) -> Self {
        Self { values: Vec::with_capacity(iterations) }
    }

    pub(crate) fn push(&mut self, residual: f64) {
        self.values.push(residual);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn first(&self) -> Option<f64> {
        self.values.first().copied()
    }

    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// `(iteration, residual)` pairs, starting at iteration 0.
    pub fn points(&self) -> impl ExactSizeIterator<Item = (usize, f64)> + '_ {
        self.values.iter().copied().enumerate()
    }

    /// Hand the trace to a plotter.
    pub fn render_with<P: ResidualPlotter + ?Sized>(
        &self,
        plotter: &mut P,
        path: &Path,
    ) -> Result<(), KError> {
        let points: Vec<(usize, f64)> = self.points().collect();
        plotter.render(&points, path)
    }
}

impl From<Vec<f64>> for ResidualTrace {
    fn from(values: Vec<f64>) -> Self {
        Self { values }
    }
}

/// Consumer of residual traces, e.g. a scatter-plot writer.
pub trait ResidualPlotter {
    /// Render `points` to the file at `path`.
    fn render(&mut self, points: &[(usize, f64)], path: &Path) -> Result<(), KError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[derive(Default)]
    struct Recorder {
        seen: Vec<(usize, f64)>,
        path: Option<PathBuf>,
    }

    impl ResidualPlotter for Recorder {
        fn render(&mut self, points: &[(usize, f64)], path: &Path) -> Result<(), KError> {
            self.seen = points.to_vec();
            self.path = Some(path.to_path_buf());
            Ok(())
        }
    }

    #[test]
    fn points_are_indexed_in_order() {
        let trace = ResidualTrace::from(vec![4.0, 2.0, 1.0]);
        let pts: Vec<_> = trace.points().collect();
        assert_eq!(pts, vec![(0, 4.0), (1, 2.0), (2, 1.0)]);
        assert_eq!(trace.first(), Some(4.0));
        assert_eq!(trace.last(), Some(1.0));
    }

    #[test]
    fn plotter_receives_whole_trace() {
        let trace = ResidualTrace::from(vec![1.0, 0.5]);
        let mut rec = Recorder::default();
        trace.render_with(&mut rec, Path::new("build/scatter.png")).unwrap();
        assert_eq!(rec.seen, vec![(0, 1.0), (1, 0.5)]);
        assert_eq!(rec.path.as_deref(), Some(Path::new("build/scatter.png")));
    }
}
