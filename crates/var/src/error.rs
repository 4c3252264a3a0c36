//! Error types for the lagcast-var crate.

use lagcast_matrix::MatrixError;

/// Error type for all fallible operations in the lagcast-var crate.
///
/// Covers input validation, the fitted-state precondition, and linear
/// algebra failures raised while solving the normal equations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VarError {
    /// Returned when the lag order `p` is zero.
    #[error("invalid lag order: p must be at least 1")]
    InvalidOrder,

    /// Returned when the variable count `k` is zero.
    #[error("invalid dimension: k must be at least 1")]
    InvalidDimension,

    /// Returned when the series is too short for the lag order.
    #[error("series too short: got {n} observations, need at least {min}")]
    InsufficientData {
        /// Number of observations provided.
        n: usize,
        /// Minimum number of observations required.
        min: usize,
    },

    /// Returned when an observation does not have exactly `k` values.
    #[error("observation {index} has {len} values, expected {k}")]
    ObservationLength {
        /// Position of the offending observation.
        index: usize,
        /// Its length.
        len: usize,
        /// Expected number of variables.
        k: usize,
    },

    /// Returned when the series contains NaN or infinity.
    #[error("input data contains non-finite values")]
    NonFiniteData,

    /// Returned when a forecast window does not hold exactly `p` observations.
    #[error("forecast window has {len} observations, expected {p}")]
    WindowLength {
        /// Window length supplied.
        len: usize,
        /// Lag order of the model.
        p: usize,
    },

    /// Returned when the output for `steps` forecasts cannot be allocated.
    #[error("cannot allocate a forecast of {steps} steps")]
    ForecastTooLong {
        /// Requested number of steps.
        steps: usize,
    },

    /// Returned when prediction is requested before the model was fitted.
    #[error("model has not been fitted")]
    NotFitted,

    /// A matrix operation failed (shape mismatch or singular normal equations).
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}
