//! # lagcast-matrix
//!
//! Dense `f64` matrices with the algebra needed for ordinary least squares:
//! shape-checked products and sums, transpose, and Gauss-Jordan inversion
//! with partial pivoting.
//!
//! ```
//! use lagcast_matrix::Matrix;
//!
//! let x = Matrix::from_rows(&[[1.0, 2.0], [3.0, 5.0], [4.0, 1.0]])?;
//! let xtx = x.transpose().multiply(&x)?;
//! let product = xtx.multiply(&xtx.inverse()?)?;
//! assert!((product.at(0, 0) - 1.0).abs() < 1e-9);
//! # Ok::<(), lagcast_matrix::MatrixError>(())
//! ```
//!
//! All operations return new matrices. Failures are reported as
//! [`MatrixError`]; none of them leave a partially computed result behind.

mod error;
mod inverse;
mod matrix;

pub use error::MatrixError;
pub use inverse::PIVOT_TOLERANCE;
pub use matrix::Matrix;
