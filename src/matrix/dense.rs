//! Row-major dense matrix on top of Faer.
//!
//! Kaczmarz sweeps read whole rows, while `faer::Mat` stores columns
//! contiguously. `RowMajorMatrix` copies a Faer matrix once into row-major
//! storage so every sampled row is a plain slice.

use crate::core::traits::{MatShape, MatVec, RowAccess};
use crate::error::KError;
use faer::{Mat, MatRef};

/// Immutable row-major dense matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct RowMajorMatrix<T> {
    nrows: usize,
    ncols: usize,
    data: Vec<T>,
}

impl<T: Copy> RowMajorMatrix<T> {
    /// Construct from raw row-major storage.
    pub fn from_row_major(nrows: usize, ncols: usize, data: Vec<T>) -> Result<Self, KError> {
        if data.len() != nrows * ncols {
            return Err(KError::DimensionMismatch {
                what: "row-major buffer",
                expected: nrows * ncols,
                found: data.len(),
            });
        }
        Ok(Self { nrows, ncols, data })
    }

    /// Construct from a list of equally long rows.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self, KError> {
        let ncols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows.len() * ncols);
        for row in rows {
            if row.len() != ncols {
                return Err(KError::DimensionMismatch {
                    what: "matrix row",
                    expected: ncols,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self { nrows: rows.len(), ncols, data })
    }

    /// Construct entry by entry.
    pub fn from_fn(nrows: usize, ncols: usize, f: impl Fn(usize, usize) -> T) -> Self {
        let data = (0..nrows)
            .flat_map(|i| (0..ncols).map(move |j| (i, j)))
            .map(|(i, j)| f(i, j))
            .collect();
        Self { nrows, ncols, data }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl RowMajorMatrix<f64> {
    /// Copy back into a column-major Faer matrix.
    pub fn to_faer(&self) -> Mat<f64> {
        Mat::from_fn(self.nrows, self.ncols, |i, j| self.data[i * self.ncols + j])
    }
}

impl From<MatRef<'_, f64>> for RowMajorMatrix<f64> {
    fn from(m: MatRef<'_, f64>) -> Self {
        Self::from_fn(m.nrows(), m.ncols(), |i, j| m[(i, j)])
    }
}

impl From<&Mat<f64>> for RowMajorMatrix<f64> {
    fn from(m: &Mat<f64>) -> Self {
        Self::from(m.as_ref())
    }
}

impl<T> MatShape for RowMajorMatrix<T> {
    fn nrows(&self) -> usize {
        self.nrows
    }
    fn ncols(&self) -> usize {
        self.ncols
    }
}

impl<T> RowAccess<T> for RowMajorMatrix<T> {
    fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.ncols..(i + 1) * self.ncols]
    }
}

/// y = A · x, one dot product per row.
impl<T: num_traits::Float> MatVec<Vec<T>> for RowMajorMatrix<T> {
    fn matvec(&self, x: &Vec<T>, y: &mut Vec<T>) {
        assert_eq!(self.nrows, y.len(), "Output vector y has incorrect length");
        assert_eq!(self.ncols, x.len(), "Input vector x has incorrect length");
        for (i, yi) in y.iter_mut().enumerate() {
            *yi = crate::core::vector::dot(self.row(i), x);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faer_round_trip_keeps_layout() {
        let m = Mat::from_fn(2, 3, |i, j| (10 * i + j) as f64);
        let r = RowMajorMatrix::from(&m);
        assert_eq!(r.row(0), &[0.0, 1.0, 2.0]);
        assert_eq!(r.row(1), &[10.0, 11.0, 12.0]);
        let back = r.to_faer();
        assert_eq!(back[(1, 2)], 12.0);
    }

    #[test]
    fn ragged_rows_rejected() {
        let err = RowMajorMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(matches!(err, KError::DimensionMismatch { expected: 2, found: 1, .. }));
    }

    #[test]
    fn buffer_length_checked() {
        assert!(RowMajorMatrix::from_row_major(2, 2, vec![1.0; 3]).is_err());
        assert!(RowMajorMatrix::from_row_major(2, 2, vec![1.0; 4]).is_ok());
    }

    #[test]
    fn matvec_row_major() {
        let a = RowMajorMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let mut y = vec![0.0; 2];
        a.matvec(&vec![1.0, 1.0], &mut y);
        assert_eq!(y, vec![3.0, 7.0]);
    }
}
