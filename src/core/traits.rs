//! Core linear-algebra traits for kaczmarz.

/// Matrix–vector product: y ← A x.
pub trait MatVec<V> {
    /// Compute y = A · x.
    fn matvec(&self, x: &V, y: &mut V);
}

/// Matrix dimensions.
pub trait MatShape {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
}

/// Contiguous access to a single row, the only access pattern Kaczmarz sweeps need.
pub trait RowAccess<T>: MatShape {
    /// Row `i` as a slice of length `ncols()`.
    fn row(&self, i: usize) -> &[T];
}
