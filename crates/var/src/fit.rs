//! Fitted VAR model and recursive forecasting.

use std::collections::VecDeque;

use lagcast_matrix::Matrix;
use tracing::trace;

use crate::design::validate_series;
use crate::error::VarError;
use crate::spec::VarSpec;

/// A fitted VAR(p) model produced by [`VarSpec::fit()`].
///
/// Holds one `k x k` coefficient matrix per lag. `coefficients()[i]` is the
/// effect of lag `i + 1`: multiplying it by the observation `i + 1` steps back
/// (as a column vector) gives that lag's contribution to the next value.
///
/// # Typestate Workflow
///
/// ```mermaid
/// graph LR
///     B["VarFit"] --> C[".coefficients(): per-lag k x k matrices"]
///     B --> D[".predict_next(&window)"]
///     B --> E[".predict(&data, steps)"]
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct VarFit {
    spec: VarSpec,
    coefficients: Vec<Matrix>,
}

impl VarFit {
    pub(crate) fn new(spec: VarSpec, coefficients: Vec<Matrix>) -> Self {
        debug_assert_eq!(coefficients.len(), spec.p());
        Self { spec, coefficients }
    }

    /// Returns the [`VarSpec`] that produced this fit.
    pub fn spec(&self) -> VarSpec {
        self.spec
    }

    /// Lag order `p`.
    pub fn p(&self) -> usize {
        self.spec.p()
    }

    /// Number of variables `k`.
    pub fn k(&self) -> usize {
        self.spec.k()
    }

    /// Per-lag coefficient matrices, lag 1 first.
    pub fn coefficients(&self) -> &[Matrix] {
        &self.coefficients
    }

    /// Coefficient matrix for a 1-based `lag`, or `None` if `lag` is 0 or
    /// greater than `p`.
    pub fn coefficient(&self, lag: usize) -> Option<&Matrix> {
        lag.checked_sub(1).and_then(|i| self.coefficients.get(i))
    }

    /// One-step-ahead forecast from the `p` most recent observations.
    ///
    /// `window` is ordered oldest to newest, so its last element is lag 1.
    /// Returns `Σ coefficients[i] · window[p - 1 - i]`.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`VarError::WindowLength`] | `window.len() != p` |
    /// | [`VarError::ObservationLength`] | a window entry does not have `k` values |
    /// | [`VarError::NonFiniteData`] | a window entry holds NaN or infinity |
    pub fn predict_next<R: AsRef<[f64]>>(&self, window: &[R]) -> Result<Vec<f64>, VarError> {
        let p = self.p();
        if window.len() != p {
            return Err(VarError::WindowLength {
                len: window.len(),
                p,
            });
        }
        validate_series(p, self.k(), window)?;
        self.combine(window.iter().rev().map(|o| o.as_ref()))
    }

    /// Forecasts `steps` future observations by recursive plug-in.
    ///
    /// Starts from the last `p` observations of `data`; each forecast is fed
    /// back into the window in place of the oldest observation, so later
    /// steps are conditioned on earlier forecasts.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`VarError::InsufficientData`] | `data.len() < p` |
    /// | [`VarError::ObservationLength`] | an observation does not have `k` values |
    /// | [`VarError::NonFiniteData`] | any value is NaN or infinite |
    /// | [`VarError::ForecastTooLong`] | room for `steps` forecasts cannot be reserved |
    pub fn predict<R: AsRef<[f64]>>(
        &self,
        data: &[R],
        steps: usize,
    ) -> Result<Vec<Vec<f64>>, VarError> {
        let p = self.p();
        if data.len() < p {
            return Err(VarError::InsufficientData {
                n: data.len(),
                min: p,
            });
        }
        let seed = &data[data.len() - p..];
        validate_series(p, self.k(), seed)?;

        let mut window: VecDeque<Vec<f64>> = seed.iter().map(|o| o.as_ref().to_vec()).collect();
        let mut forecasts: Vec<Vec<f64>> = Vec::new();
        forecasts
            .try_reserve(steps)
            .map_err(|_| VarError::ForecastTooLong { steps })?;
        for step in 0..steps {
            let next = self.combine(window.iter().rev().map(Vec::as_slice))?;
            trace!(step, ?next, "VAR forecast step");
            window.pop_front();
            window.push_back(next.clone());
            forecasts.push(next);
        }
        Ok(forecasts)
    }

    /// Sums each lag's coefficient matrix applied to its observation.
    /// `lagged` yields observations newest first (lag 1, lag 2, ...).
    fn combine<'a, I>(&self, lagged: I) -> Result<Vec<f64>, VarError>
    where
        I: Iterator<Item = &'a [f64]>,
    {
        let mut out = vec![0.0; self.k()];
        for (coef, obs) in self.coefficients.iter().zip(lagged) {
            let term = coef.mul_vec(obs)?;
            for (acc, v) in out.iter_mut().zip(term) {
                *acc += v;
            }
        }
        Ok(out)
    }
}
