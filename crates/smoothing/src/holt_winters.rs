//! Holt-Winters triple exponential smoothing (level, trend and season).

use crate::error::SmoothingError;
use crate::validate::{check_factor, check_finite};

/// How the seasonal component combines with level and trend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Seasonality {
    /// Seasonal offsets are added: forecast `l + h * b + s`.
    #[default]
    Additive,
    /// Seasonal factors scale the trend line: forecast `(l + h * b) * s`.
    Multiplicative,
}

/// Result of [`triple_exponential_smoothing()`]: final components and the
/// in-sample one-step-ahead fit.
#[derive(Clone, Debug, PartialEq)]
pub struct TripleSmoothing {
    seasonality: Seasonality,
    level: f64,
    trend: f64,
    seasonal: Vec<f64>,
    fitted: Vec<f64>,
    n: usize,
}

impl TripleSmoothing {
    /// Seasonality the components were fitted with.
    pub fn seasonality(&self) -> Seasonality {
        self.seasonality
    }

    /// Number of observations per season.
    pub fn season_length(&self) -> usize {
        self.seasonal.len()
    }

    /// Final level.
    pub fn level(&self) -> f64 {
        self.level
    }

    /// Final per-step trend.
    pub fn trend(&self) -> f64 {
        self.trend
    }

    /// Seasonal components by position in the season; index `i` belongs to
    /// observations `t` with `t % season_length == i`.
    pub fn seasonal(&self) -> &[f64] {
        &self.seasonal
    }

    /// One-step-ahead fitted values for observations `season_length..n`.
    pub fn fitted(&self) -> &[f64] {
        &self.fitted
    }

    /// Extrapolates `steps` values past the end of the series.
    pub fn forecast(&self, steps: usize) -> Vec<f64> {
        (1..=steps).map(|h| self.forecast_at(h)).collect()
    }

    /// Point forecast `h >= 1` steps past the last observation.
    pub fn forecast_at(&self, h: usize) -> f64 {
        let m = self.seasonal.len();
        // Season position of observation n + h - 1.
        let idx = (self.n % m + (h.max(1) - 1) % m) % m;
        let base = self.level + h as f64 * self.trend;
        match self.seasonality {
            Seasonality::Additive => base + self.seasonal[idx],
            Seasonality::Multiplicative => base * self.seasonal[idx],
        }
    }
}

/// Runs Holt-Winters triple exponential smoothing over `data`.
///
/// Initialisation uses the first two seasons of length `m`: the level is
/// the first season's mean, the trend is the difference of the two season
/// means divided by `m`, and the seasonal components are the first season's
/// deviations from (additive) or ratios to (multiplicative) that mean.
/// Updates then run from observation `m` onward.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`SmoothingError::InvalidSmoothingFactor`] | `alpha`, `beta` or `gamma` not in `(0, 1]` |
/// | [`SmoothingError::InvalidSeasonLength`] | `season_length < 2` |
/// | [`SmoothingError::InsufficientData`] | fewer than `2 * season_length` observations |
/// | [`SmoothingError::NonFiniteData`] | any value is NaN or infinite |
/// | [`SmoothingError::NonPositiveData`] | multiplicative seasonality with a value `<= 0` |
///
/// # Example
///
/// ```
/// use lagcast_smoothing::{Seasonality, triple_exponential_smoothing};
///
/// let data = [12.0, 8.0, 11.0, 9.0, 12.0, 8.0, 11.0, 9.0];
/// let fit = triple_exponential_smoothing(&data, 0.5, 0.1, 0.3, 4, Seasonality::Additive)?;
/// assert_eq!(fit.forecast(4).len(), 4);
/// # Ok::<(), lagcast_smoothing::SmoothingError>(())
/// ```
pub fn triple_exponential_smoothing(
    data: &[f64],
    alpha: f64,
    beta: f64,
    gamma: f64,
    season_length: usize,
    seasonality: Seasonality,
) -> Result<TripleSmoothing, SmoothingError> {
    check_factor("alpha", alpha)?;
    check_factor("beta", beta)?;
    check_factor("gamma", gamma)?;
    let m = season_length;
    if m < 2 {
        return Err(SmoothingError::InvalidSeasonLength { season_length });
    }
    let min = m.saturating_mul(2);
    if data.len() < min {
        return Err(SmoothingError::InsufficientData {
            n: data.len(),
            min,
        });
    }
    check_finite(data)?;
    if seasonality == Seasonality::Multiplicative && data.iter().any(|&y| y <= 0.0) {
        return Err(SmoothingError::NonPositiveData);
    }

    let mean = |season: &[f64]| season.iter().sum::<f64>() / m as f64;
    let first = mean(&data[..m]);
    let second = mean(&data[m..2 * m]);

    let mut level = first;
    let mut trend = (second - first) / m as f64;
    let mut seasonal: Vec<f64> = data[..m]
        .iter()
        .map(|&y| match seasonality {
            Seasonality::Additive => y - first,
            Seasonality::Multiplicative => y / first,
        })
        .collect();

    let mut fitted = Vec::with_capacity(data.len() - m);
    for (t, &y) in data.iter().enumerate().skip(m) {
        let idx = t % m;
        let (l, b, s) = (level, trend, seasonal[idx]);
        match seasonality {
            Seasonality::Additive => {
                fitted.push(l + b + s);
                level = alpha * (y - s) + (1.0 - alpha) * (l + b);
                trend = beta * (level - l) + (1.0 - beta) * b;
                seasonal[idx] = gamma * (y - level) + (1.0 - gamma) * s;
            }
            Seasonality::Multiplicative => {
                fitted.push((l + b) * s);
                level = alpha * (y / s) + (1.0 - alpha) * (l + b);
                trend = beta * (level - l) + (1.0 - beta) * b;
                seasonal[idx] = gamma * (y / level) + (1.0 - gamma) * s;
            }
        }
    }

    Ok(TripleSmoothing {
        seasonality,
        level,
        trend,
        seasonal,
        fitted,
        n: data.len(),
    })
}
