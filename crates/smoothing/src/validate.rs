//! Shared input checks.

use crate::error::SmoothingError;

pub(crate) fn check_finite(data: &[f64]) -> Result<(), SmoothingError> {
    if data.iter().any(|v| !v.is_finite()) {
        return Err(SmoothingError::NonFiniteData);
    }
    Ok(())
}

/// Accepts factors in `(0, 1]`.
pub(crate) fn check_factor(name: &'static str, value: f64) -> Result<(), SmoothingError> {
    if !(value > 0.0 && value <= 1.0) {
        return Err(SmoothingError::InvalidSmoothingFactor { name, value });
    }
    Ok(())
}
