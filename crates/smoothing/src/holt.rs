//! Double exponential smoothing (Holt) with additive or multiplicative trend.

use crate::error::SmoothingError;
use crate::validate::{check_factor, check_finite};

/// How the trend component combines with the level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Trend {
    /// Trend is a per-step increment: forecast `l + h * b`.
    #[default]
    Additive,
    /// Trend is a per-step growth ratio: forecast `l * b^h`.
    /// Requires strictly positive data.
    Multiplicative,
}

/// Level, trend and in-sample smoothed values from
/// [`double_exponential_smoothing()`].
///
/// All three series have the same length as the input.
#[derive(Clone, Debug, PartialEq)]
pub struct DoubleSmoothing {
    trend_kind: Trend,
    level: Vec<f64>,
    trend: Vec<f64>,
    smoothed: Vec<f64>,
}

impl DoubleSmoothing {
    /// Trend form used for this fit.
    pub fn trend_kind(&self) -> Trend {
        self.trend_kind
    }

    /// Level component at each observation.
    pub fn level(&self) -> &[f64] {
        &self.level
    }

    /// Trend component at each observation.
    pub fn trend(&self) -> &[f64] {
        &self.trend
    }

    /// In-sample smoothed series. The first value is the first observation.
    pub fn smoothed(&self) -> &[f64] {
        &self.smoothed
    }

    /// Extrapolates `steps` values past the end of the series from the final
    /// level and trend.
    pub fn forecast(&self, steps: usize) -> Vec<f64> {
        (1..=steps).filter_map(|h| self.forecast_at(h)).collect()
    }

    /// Point forecast `h` steps past the last observation; `h == 0` is the
    /// final level.
    pub fn forecast_at(&self, h: usize) -> Option<f64> {
        let (&l, &b) = (self.level.last()?, self.trend.last()?);
        Some(match self.trend_kind {
            Trend::Additive => l + h as f64 * b,
            Trend::Multiplicative => match i32::try_from(h) {
                Ok(e) => l * b.powi(e),
                Err(_) => l * b.powf(h as f64),
            },
        })
    }
}

/// Runs Holt's double exponential smoothing over `data`.
///
/// Initialisation uses the first two observations: `l0 = y0` and
/// `b0 = y1 - y0` (additive) or `b0 = y1 / y0` (multiplicative).
///
/// | Trend | Level update | Trend update | Smoothed |
/// |-------|--------------|--------------|----------|
/// | Additive | `α·y + (1-α)(l + b)` | `β(l' - l) + (1-β)b` | `l' + b'` |
/// | Multiplicative | `α·y + (1-α)·l·b` | `β(l' / l) + (1-β)b` | `l' · b'` |
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`SmoothingError::InvalidSmoothingFactor`] | `alpha` or `beta` not in `(0, 1]` |
/// | [`SmoothingError::InsufficientData`] | fewer than 2 observations |
/// | [`SmoothingError::NonFiniteData`] | any value is NaN or infinite |
/// | [`SmoothingError::NonPositiveData`] | multiplicative trend with a value `<= 0` |
///
/// # Example
///
/// ```
/// use lagcast_smoothing::{Trend, double_exponential_smoothing};
///
/// let fit = double_exponential_smoothing(&[1.0, 2.0, 3.0, 4.0], 0.5, 0.5, Trend::Additive)?;
/// assert_eq!(fit.forecast(2), vec![5.0, 6.0]);
/// # Ok::<(), lagcast_smoothing::SmoothingError>(())
/// ```
pub fn double_exponential_smoothing(
    data: &[f64],
    alpha: f64,
    beta: f64,
    trend_kind: Trend,
) -> Result<DoubleSmoothing, SmoothingError> {
    check_factor("alpha", alpha)?;
    check_factor("beta", beta)?;
    if data.len() < 2 {
        return Err(SmoothingError::InsufficientData {
            n: data.len(),
            min: 2,
        });
    }
    check_finite(data)?;
    if trend_kind == Trend::Multiplicative && data.iter().any(|&y| y <= 0.0) {
        return Err(SmoothingError::NonPositiveData);
    }

    let n = data.len();
    let mut level = Vec::with_capacity(n);
    let mut trend = Vec::with_capacity(n);
    let mut smoothed = Vec::with_capacity(n);

    level.push(data[0]);
    trend.push(match trend_kind {
        Trend::Additive => data[1] - data[0],
        Trend::Multiplicative => data[1] / data[0],
    });
    smoothed.push(data[0]);

    for &y in &data[1..] {
        let (l, b) = (level[level.len() - 1], trend[trend.len() - 1]);
        let (l_new, b_new, s) = match trend_kind {
            Trend::Additive => {
                let l_new = alpha * y + (1.0 - alpha) * (l + b);
                let b_new = beta * (l_new - l) + (1.0 - beta) * b;
                (l_new, b_new, l_new + b_new)
            }
            Trend::Multiplicative => {
                let l_new = alpha * y + (1.0 - alpha) * l * b;
                let b_new = beta * (l_new / l) + (1.0 - beta) * b;
                (l_new, b_new, l_new * b_new)
            }
        };
        level.push(l_new);
        trend.push(b_new);
        smoothed.push(s);
    }

    Ok(DoubleSmoothing {
        trend_kind,
        level,
        trend,
        smoothed,
    })
}
