//! Gauss-Jordan inversion with partial pivoting.

use ndarray::Array2;

use crate::error::MatrixError;
use crate::matrix::Matrix;

/// Smallest pivot magnitude accepted during elimination.
///
/// A column whose best candidate pivot is at or below this value marks the
/// matrix as singular (or too close to singular to invert reliably).
pub const PIVOT_TOLERANCE: f64 = 1e-10;

impl Matrix {
    /// Returns the inverse of a square matrix.
    ///
    /// Runs Gauss-Jordan elimination on `[A | I]`. At each column the row
    /// with the largest absolute entry among the rows not yet used as pivots
    /// is swapped into place before normalising and eliminating.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`MatrixError::NotSquare`] | `rows != cols` |
    /// | [`MatrixError::SingularMatrix`] | best pivot in some column `<=` [`PIVOT_TOLERANCE`] |
    ///
    /// # Example
    ///
    /// ```
    /// use lagcast_matrix::Matrix;
    ///
    /// let a = Matrix::new(2, 2, vec![4.0, 7.0, 2.0, 6.0])?;
    /// let inv = a.inverse()?;
    /// assert!((inv.at(0, 0) - 0.6).abs() < 1e-12);
    /// # Ok::<(), lagcast_matrix::MatrixError>(())
    /// ```
    pub fn inverse(&self) -> Result<Matrix, MatrixError> {
        let (rows, cols) = self.shape();
        if rows != cols {
            return Err(MatrixError::NotSquare { rows, cols });
        }
        let n = rows;

        let mut a = self.as_array().clone();
        let mut inv: Array2<f64> = Array2::eye(n);

        for col in 0..n {
            let mut pivot_row = col;
            let mut pivot_abs = a[[col, col]].abs();
            for r in (col + 1)..n {
                let v = a[[r, col]].abs();
                if v > pivot_abs {
                    pivot_abs = v;
                    pivot_row = r;
                }
            }

            if !(pivot_abs > PIVOT_TOLERANCE) {
                return Err(MatrixError::SingularMatrix { column: col });
            }

            if pivot_row != col {
                for j in 0..n {
                    a.swap([col, j], [pivot_row, j]);
                    inv.swap([col, j], [pivot_row, j]);
                }
            }

            let pivot = a[[col, col]];
            for j in 0..n {
                a[[col, j]] /= pivot;
                inv[[col, j]] /= pivot;
            }

            for r in 0..n {
                if r == col {
                    continue;
                }
                let factor = a[[r, col]];
                if factor == 0.0 {
                    continue;
                }
                for j in 0..n {
                    a[[r, j]] -= factor * a[[col, j]];
                    inv[[r, j]] -= factor * inv[[col, j]];
                }
            }
        }

        Ok(Matrix::from_array(inv))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_identity(m: &Matrix) {
        for i in 0..m.rows() {
            for j in 0..m.cols() {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_abs_diff_eq!(m.at(i, j), expected, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn inverse_2x2_known() {
        let a = Matrix::new(2, 2, vec![4.0, 7.0, 2.0, 6.0]).unwrap();
        let inv = a.inverse().unwrap();
        assert_abs_diff_eq!(inv.at(0, 0), 0.6, epsilon = 1e-12);
        assert_abs_diff_eq!(inv.at(0, 1), -0.7, epsilon = 1e-12);
        assert_abs_diff_eq!(inv.at(1, 0), -0.2, epsilon = 1e-12);
        assert_abs_diff_eq!(inv.at(1, 1), 0.4, epsilon = 1e-12);
    }

    #[test]
    fn inverse_requires_pivoting() {
        // Zero on the leading diagonal entry: only solvable with a row swap.
        let a = Matrix::new(3, 3, vec![0.0, 1.0, 2.0, 1.0, 0.0, 3.0, 4.0, -3.0, 8.0]).unwrap();
        let inv = a.inverse().unwrap();
        assert_identity(&a.multiply(&inv).unwrap());
        assert_identity(&inv.multiply(&a).unwrap());
    }

    #[test]
    fn inverse_of_identity() {
        let i = Matrix::identity(4).unwrap();
        assert_eq!(i.inverse().unwrap(), i);
    }

    #[test]
    fn inverse_1x1() {
        let a = Matrix::new(1, 1, vec![-4.0]).unwrap();
        assert_abs_diff_eq!(a.inverse().unwrap().at(0, 0), -0.25);
    }

    #[test]
    fn inverse_zero_matrix() {
        let z = Matrix::zeros(3, 3).unwrap();
        assert_eq!(z.inverse(), Err(MatrixError::SingularMatrix { column: 0 }));
    }

    #[test]
    fn inverse_rank_deficient() {
        // Third row is the sum of the first two.
        let a = Matrix::new(3, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 5.0, 7.0, 9.0]).unwrap();
        assert!(matches!(
            a.inverse(),
            Err(MatrixError::SingularMatrix { .. })
        ));
    }

    #[test]
    fn inverse_below_tolerance() {
        let a = Matrix::new(2, 2, vec![1e-11, 0.0, 0.0, 1e-11]).unwrap();
        assert_eq!(a.inverse(), Err(MatrixError::SingularMatrix { column: 0 }));
    }

    #[test]
    fn inverse_non_finite_is_singular() {
        let a = Matrix::new(2, 2, vec![f64::NAN, 0.0, 0.0, f64::NAN]).unwrap();
        assert!(matches!(
            a.inverse(),
            Err(MatrixError::SingularMatrix { .. })
        ));
    }

    #[test]
    fn inverse_not_square() {
        let a = Matrix::zeros(2, 3).unwrap();
        assert_eq!(
            a.inverse(),
            Err(MatrixError::NotSquare { rows: 2, cols: 3 })
        );
    }

    #[test]
    fn inverse_leaves_input_untouched() {
        let a = Matrix::new(2, 2, vec![0.0, 2.0, 3.0, 1.0]).unwrap();
        let before = a.clone();
        let _ = a.inverse().unwrap();
        assert_eq!(a, before);
    }
}
