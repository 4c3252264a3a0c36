//! Error types for the lagcast-smoothing crate.

/// Error type for all fallible operations in the lagcast-smoothing crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SmoothingError {
    /// Returned when the input series is empty.
    #[error("input data is empty")]
    EmptyData,

    /// Returned when the series has fewer observations than required.
    #[error("insufficient data: got {n} observations, need at least {min}")]
    InsufficientData {
        /// Number of observations provided.
        n: usize,
        /// Minimum number of observations required.
        min: usize,
    },

    /// Returned when a smoothing factor lies outside its allowed range.
    #[error("invalid smoothing factor {name} = {value}")]
    InvalidSmoothingFactor {
        /// Parameter name (`alpha`, `beta` or `gamma`).
        name: &'static str,
        /// Rejected value.
        value: f64,
    },

    /// Returned when a multiplicative model receives a value `<= 0`.
    #[error("multiplicative smoothing requires strictly positive data")]
    NonPositiveData,

    /// Returned when the moving-average window is zero.
    #[error("invalid window: {window} (must be >= 1)")]
    InvalidWindow {
        /// Rejected window length.
        window: usize,
    },

    /// Returned when a seasonal model is given fewer than two observations
    /// per season.
    #[error("invalid season length: {season_length} (must be >= 2)")]
    InvalidSeasonLength {
        /// Rejected season length.
        season_length: usize,
    },

    /// Returned when a state-space variance is negative, zero where a
    /// positive value is required, or not finite.
    #[error("invalid variance {name} = {value}")]
    InvalidVariance {
        /// Parameter name.
        name: &'static str,
        /// Rejected value.
        value: f64,
    },

    /// Returned when the series contains NaN or infinity.
    #[error("input data contains non-finite values")]
    NonFiniteData,
}
