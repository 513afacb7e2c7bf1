use crate::error::{MatrixError, Result};
use crate::multiply;

/// A dense matrix of f64 values.
///
/// Holds contiguous, row-major data with a fixed `(rows, cols)` shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Create a new matrix from row-major f64 data and a shape.
    ///
    /// # Panics
    /// Panics if `data.len() != rows * cols`.
    pub fn new(data: Vec<f64>, rows: usize, cols: usize) -> Self {
        assert_eq!(
            data.len(),
            rows * cols,
            "data length {} does not match shape {}x{}",
            data.len(),
            rows,
            cols
        );
        Matrix { data, rows, cols }
    }

    /// Create a zero-filled matrix with the given shape.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Matrix {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the underlying row-major data as a slice.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Returns the entry at row `i`, column `j`.
    ///
    /// # Panics
    /// Panics if `i >= rows()` or `j >= cols()`.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.rows && j < self.cols);
        self.data[i * self.cols + j]
    }

    /// Matrix multiplication against another matrix.
    ///
    /// self is [n, m], other is [m, p], result is [n, p]. The inner
    /// dimensions must agree; a mismatch is an invariant violation in the
    /// caller's wiring, surfaced as `DimensionMismatch`.
    pub fn matmul(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols != other.rows {
            return Err(MatrixError::DimensionMismatch {
                n: self.rows,
                m: self.cols,
                m2: other.rows,
                p: other.cols,
            });
        }

        let data = multiply::matmul(&self.data, &other.data, self.rows, self.cols, other.cols)?;
        Ok(Matrix::new(data, self.rows, other.cols))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_matrix() {
        let m = Matrix::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3);
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert_eq!(m.data(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(m.get(1, 2), 6.0);
    }

    #[test]
    fn test_zeros() {
        let z = Matrix::zeros(2, 3);
        assert_eq!(z.data(), &[0.0; 6]);
    }

    #[test]
    #[should_panic]
    fn test_new_shape_mismatch_panics() {
        let _m = Matrix::new(vec![1.0, 2.0], 3, 1);
    }

    #[test]
    fn test_matmul() {
        let a = Matrix::new(vec![1.0, 2.0, 3.0, 4.0], 2, 2);
        let b = Matrix::new(vec![5.0, 6.0, 7.0, 8.0], 2, 2);
        let c = a.matmul(&b).unwrap();
        assert_eq!(c.rows(), 2);
        assert_eq!(c.cols(), 2);
        assert_eq!(c.data(), &[19.0, 22.0, 43.0, 50.0]);
    }

    #[test]
    fn test_matmul_result_shape() {
        let a = Matrix::zeros(4, 7);
        let b = Matrix::zeros(7, 3);
        let c = a.matmul(&b).unwrap();
        assert_eq!((c.rows(), c.cols()), (4, 3));
    }

    #[test]
    fn test_matmul_dimension_mismatch() {
        let a = Matrix::new(vec![1.0, 2.0, 3.0], 1, 3);
        let b = Matrix::new(vec![1.0, 2.0, 3.0, 4.0], 2, 2);
        let err = a.matmul(&b).unwrap_err();
        assert!(matches!(err, MatrixError::DimensionMismatch { .. }));
    }
}
