//! Error types for the lagcast-matrix crate.

/// Error type for all fallible operations in the lagcast-matrix crate.
///
/// A failed operation never yields a partially built matrix. Shape errors
/// are raised before any arithmetic is performed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MatrixError {
    /// Returned when operand shapes are incompatible for the requested
    /// operation, or when construction data does not fill the declared shape.
    #[error("dimension mismatch in {op}: left is {}x{}, right is {}x{}", .left.0, .left.1, .right.0, .right.1)]
    DimensionMismatch {
        /// Name of the operation that rejected its operands.
        op: &'static str,
        /// `(rows, cols)` of the left operand (or the declared shape).
        left: (usize, usize),
        /// `(rows, cols)` of the right operand (or the supplied data).
        right: (usize, usize),
    },

    /// Returned when Gauss-Jordan elimination finds no usable pivot.
    #[error("matrix is singular or near-singular (no pivot in column {column})")]
    SingularMatrix {
        /// Column in which elimination failed.
        column: usize,
    },

    /// Returned when a square-only operation receives a rectangular matrix.
    #[error("matrix is not square: {rows}x{cols}")]
    NotSquare {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// Returned when a matrix would have zero rows or zero columns.
    #[error("matrix must have at least one row and one column")]
    EmptyShape,
}
