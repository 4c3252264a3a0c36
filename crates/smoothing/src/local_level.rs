//! Local-level state-space model filtered with a scalar Kalman filter.
//!
//! ```text
//! y_t     = mu_t + eps_t      eps_t ~ N(0, observation_variance)
//! mu_t+1  = mu_t + eta_t      eta_t ~ N(0, level_variance)
//! ```

use crate::error::SmoothingError;
use crate::validate::check_finite;

/// Filtered output of [`local_level()`].
#[derive(Clone, Debug, PartialEq)]
pub struct LocalLevel {
    levels: Vec<f64>,
}

impl LocalLevel {
    /// Filtered level `E[mu_t | y_0..=y_t]` at each observation.
    pub fn levels(&self) -> &[f64] {
        &self.levels
    }

    /// Final filtered level.
    pub fn level(&self) -> f64 {
        self.levels.last().copied().unwrap_or(f64::NAN)
    }

    /// Flat forecast of `steps` values at the final filtered level.
    pub fn forecast(&self, steps: usize) -> Vec<f64> {
        vec![self.level(); steps]
    }
}

/// Filters `data` through a local-level model with known variances.
///
/// The level starts at the first observation with variance
/// `observation_variance`, which is the filtered state under a diffuse prior.
/// With `level_variance == 0` the filtered level is the running mean; as the
/// ratio `level_variance / observation_variance` grows it tracks the data
/// ever more closely.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`SmoothingError::InvalidVariance`] | `observation_variance <= 0` or `level_variance < 0` (or not finite) |
/// | [`SmoothingError::EmptyData`] | `data` is empty |
/// | [`SmoothingError::NonFiniteData`] | any value is NaN or infinite |
pub fn local_level(
    data: &[f64],
    observation_variance: f64,
    level_variance: f64,
) -> Result<LocalLevel, SmoothingError> {
    if !(observation_variance > 0.0 && observation_variance.is_finite()) {
        return Err(SmoothingError::InvalidVariance {
            name: "observation_variance",
            value: observation_variance,
        });
    }
    if !(level_variance >= 0.0 && level_variance.is_finite()) {
        return Err(SmoothingError::InvalidVariance {
            name: "level_variance",
            value: level_variance,
        });
    }
    let (&first, rest) = data.split_first().ok_or(SmoothingError::EmptyData)?;
    check_finite(data)?;

    let mut levels = Vec::with_capacity(data.len());
    let (mut a, mut p) = (first, observation_variance);
    levels.push(a);

    for &y in rest {
        p += level_variance;
        let gain = p / (p + observation_variance);
        a += gain * (y - a);
        p *= 1.0 - gain;
        levels.push(a);
    }

    Ok(LocalLevel { levels })
}
