//! Simple exponential smoothing with a flat forecast.

use crate::error::SmoothingError;
use crate::validate::check_finite;

/// Forecasts `horizon` steps with simple exponential smoothing.
///
/// The level starts at the first observation and is updated with
/// `l = alpha * y + (1 - alpha) * l` for every later observation. Simple
/// smoothing has no trend, so every forecast equals the final level.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`SmoothingError::InvalidSmoothingFactor`] | `alpha` not in `(0, 1)` |
/// | [`SmoothingError::EmptyData`] | `data` is empty |
/// | [`SmoothingError::NonFiniteData`] | any value is NaN or infinite |
///
/// # Example
///
/// ```
/// use lagcast_smoothing::exponential_smoothing_forecast;
///
/// let f = exponential_smoothing_forecast(&[10.0, 10.0, 10.0], 2, 0.5)?;
/// assert_eq!(f, vec![10.0, 10.0]);
/// # Ok::<(), lagcast_smoothing::SmoothingError>(())
/// ```
pub fn exponential_smoothing_forecast(
    data: &[f64],
    horizon: usize,
    alpha: f64,
) -> Result<Vec<f64>, SmoothingError> {
    if !(alpha > 0.0 && alpha < 1.0) {
        return Err(SmoothingError::InvalidSmoothingFactor {
            name: "alpha",
            value: alpha,
        });
    }
    let (&first, rest) = data.split_first().ok_or(SmoothingError::EmptyData)?;
    check_finite(data)?;

    let level = rest
        .iter()
        .fold(first, |level, &y| alpha * y + (1.0 - alpha) * level);
    Ok(vec![level; horizon])
}
