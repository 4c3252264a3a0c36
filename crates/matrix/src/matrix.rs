//! Dense row-major matrix and its shape-checked arithmetic.

use ndarray::{Array2, ArrayView1, s};

use crate::error::MatrixError;

/// A dense `rows x cols` matrix of `f64`.
///
/// Shape is fixed at construction and always non-empty. Every operation
/// returns a new matrix; operands are never modified.
///
/// # Example
///
/// ```
/// use lagcast_matrix::Matrix;
///
/// let a = Matrix::new(2, 2, vec![1.0, 2.0, 3.0, 4.0])?;
/// let b = a.transpose();
/// assert_eq!(b.at(0, 1), 3.0);
/// # Ok::<(), lagcast_matrix::MatrixError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    data: Array2<f64>,
}

impl Matrix {
    /// Creates a matrix from row-major `data`.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`MatrixError::EmptyShape`] | `rows == 0` or `cols == 0` |
    /// | [`MatrixError::DimensionMismatch`] | `data.len() != rows * cols` |
    pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self, MatrixError> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::EmptyShape);
        }
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(MatrixError::DimensionMismatch {
                op: "new",
                left: (rows, cols),
                right: (1, data.len()),
            });
        }
        let data = Array2::from_shape_vec((rows, cols), data).map_err(|_| {
            MatrixError::DimensionMismatch {
                op: "new",
                left: (rows, cols),
                right: (rows, cols),
            }
        })?;
        Ok(Self { data })
    }

    /// Creates a matrix from a slice of rows.
    ///
    /// The column count is taken from the first row; every other row must
    /// have the same length.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, MatrixError> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut flat = Vec::with_capacity(n_rows * n_cols);
        for row in rows {
            let row = row.as_ref();
            if row.len() != n_cols {
                return Err(MatrixError::DimensionMismatch {
                    op: "from_rows",
                    left: (n_rows, n_cols),
                    right: (1, row.len()),
                });
            }
            flat.extend_from_slice(row);
        }
        Self::new(n_rows, n_cols, flat)
    }

    /// Returns a `rows x cols` matrix of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::EmptyShape);
        }
        Ok(Self {
            data: Array2::zeros((rows, cols)),
        })
    }

    /// Returns the `n x n` identity matrix.
    pub fn identity(n: usize) -> Result<Self, MatrixError> {
        if n == 0 {
            return Err(MatrixError::EmptyShape);
        }
        Ok(Self {
            data: Array2::eye(n),
        })
    }

    pub(crate) fn from_array(data: Array2<f64>) -> Self {
        debug_assert!(data.nrows() > 0 && data.ncols() > 0);
        Self { data }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    /// Returns the element at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.rows()` or `col >= self.cols()`.
    pub fn at(&self, row: usize, col: usize) -> f64 {
        self.data[[row, col]]
    }

    /// Returns the element at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.data.get((row, col)).copied()
    }

    /// Returns a view of row `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.rows()`.
    pub fn row(&self, i: usize) -> ArrayView1<'_, f64> {
        self.data.row(i)
    }

    /// Borrows the underlying storage.
    pub fn as_array(&self) -> &Array2<f64> {
        &self.data
    }

    /// Consumes the matrix and returns the underlying storage.
    pub fn into_array(self) -> Array2<f64> {
        self.data
    }

    /// Matrix product `self * other`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::DimensionMismatch`] if `self.cols() != other.rows()`.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        if self.cols() != other.rows() {
            return Err(MatrixError::DimensionMismatch {
                op: "multiply",
                left: self.shape(),
                right: other.shape(),
            });
        }
        Ok(Self::from_array(self.data.dot(&other.data)))
    }

    /// Elementwise sum.
    ///
    /// # Errors
    ///
    /// [`MatrixError::DimensionMismatch`] if the shapes differ.
    pub fn add(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.check_same_shape("add", other)?;
        Ok(Self::from_array(&self.data + &other.data))
    }

    /// Elementwise difference `self - other`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::DimensionMismatch`] if the shapes differ.
    pub fn subtract(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.check_same_shape("subtract", other)?;
        Ok(Self::from_array(&self.data - &other.data))
    }

    /// Returns the `cols x rows` transpose.
    pub fn transpose(&self) -> Matrix {
        Self::from_array(self.data.t().to_owned())
    }

    /// Matrix-vector product `self * v`, treating `v` as a column vector.
    ///
    /// # Errors
    ///
    /// [`MatrixError::DimensionMismatch`] if `v.len() != self.cols()`.
    pub fn mul_vec(&self, v: &[f64]) -> Result<Vec<f64>, MatrixError> {
        if v.len() != self.cols() {
            return Err(MatrixError::DimensionMismatch {
                op: "mul_vec",
                left: self.shape(),
                right: (v.len(), 1),
            });
        }
        Ok(self
            .data
            .rows()
            .into_iter()
            .map(|row| row.iter().zip(v).map(|(a, b)| a * b).sum())
            .collect())
    }

    /// Copies `len` consecutive rows starting at `start` into a new matrix.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`MatrixError::EmptyShape`] | `len == 0` |
    /// | [`MatrixError::DimensionMismatch`] | `start + len > self.rows()` |
    pub fn row_block(&self, start: usize, len: usize) -> Result<Matrix, MatrixError> {
        if len == 0 {
            return Err(MatrixError::EmptyShape);
        }
        let end = start.checked_add(len).unwrap_or(usize::MAX);
        if end > self.rows() {
            return Err(MatrixError::DimensionMismatch {
                op: "row_block",
                left: self.shape(),
                right: (end, self.cols()),
            });
        }
        Ok(Self::from_array(self.data.slice(s![start..end, ..]).to_owned()))
    }

    fn check_same_shape(&self, op: &'static str, other: &Matrix) -> Result<(), MatrixError> {
        if self.shape() != other.shape() {
            return Err(MatrixError::DimensionMismatch {
                op,
                left: self.shape(),
                right: other.shape(),
            });
        }
        Ok(())
    }
}
