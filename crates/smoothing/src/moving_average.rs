//! Trailing simple moving average.

use crate::error::SmoothingError;
use crate::validate::check_finite;

/// Trailing moving average over `window` observations.
///
/// Element `i` of the output is the mean of `data[i..i + window]`, so the
/// output has `data.len() - window + 1` values and its last element averages
/// the most recent `window` observations.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`SmoothingError::InvalidWindow`] | `window == 0` |
/// | [`SmoothingError::InsufficientData`] | `data.len() < window` |
/// | [`SmoothingError::NonFiniteData`] | any value is NaN or infinite |
pub fn moving_average(data: &[f64], window: usize) -> Result<Vec<f64>, SmoothingError> {
    if window == 0 {
        return Err(SmoothingError::InvalidWindow { window });
    }
    if data.len() < window {
        return Err(SmoothingError::InsufficientData {
            n: data.len(),
            min: window,
        });
    }
    check_finite(data)?;

    let w = window as f64;
    Ok(data
        .windows(window)
        .map(|chunk| chunk.iter().sum::<f64>() / w)
        .collect())
}
