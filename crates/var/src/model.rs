//! Stateful VAR model: `unfitted -> fitted`, re-fittable in place.

use lagcast_matrix::Matrix;

use crate::design::Design;
use crate::error::VarError;
use crate::fit::VarFit;
use crate::spec::VarSpec;

/// A VAR(p) model over `k` variables that is fitted in place.
///
/// Wraps the [`VarSpec`] / [`VarFit`] pair for callers that keep one model
/// value around and re-fit it as new data arrives. Prediction before the
/// first [`fit`](Self::fit) returns [`VarError::NotFitted`].
///
/// ```
/// use lagcast_var::{VarError, VectorAutoregression};
///
/// let mut model = VectorAutoregression::new(1, 1);
/// assert_eq!(model.predict(&[[1.0]], 1), Err(VarError::NotFitted));
///
/// model.fit(&[[1.0], [0.5], [0.25], [0.125]])?;
/// let forecast = model.predict(&[[0.125]], 1)?;
/// assert!((forecast[0][0] - 0.0625).abs() < 1e-9);
/// # Ok::<(), VarError>(())
/// ```
#[derive(Clone, Debug)]
pub struct VectorAutoregression {
    spec: VarSpec,
    fitted: Option<VarFit>,
}

impl VectorAutoregression {
    /// Creates an unfitted model with lag order `p` and `k` variables.
    pub fn new(p: usize, k: usize) -> Self {
        Self {
            spec: VarSpec::new(p, k),
            fitted: None,
        }
    }

    /// Lag order `p`.
    pub fn p(&self) -> usize {
        self.spec.p()
    }

    /// Number of variables `k`.
    pub fn k(&self) -> usize {
        self.spec.k()
    }

    /// Whether [`fit`](Self::fit) has succeeded at least once.
    pub fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }

    /// The current fit, if any.
    pub fn fitted(&self) -> Option<&VarFit> {
        self.fitted.as_ref()
    }

    /// Per-lag coefficient matrices; empty while unfitted.
    pub fn coefficients(&self) -> &[Matrix] {
        match &self.fitted {
            Some(fit) => fit.coefficients(),
            None => &[],
        }
    }

    /// See [`VarSpec::prepare_data()`].
    pub fn prepare_data<R: AsRef<[f64]>>(&self, data: &[R]) -> Result<Design, VarError> {
        self.spec.prepare_data(data)
    }

    /// Fits (or re-fits) the model, replacing any previous coefficients.
    ///
    /// On error the previous fit, if any, is kept.
    pub fn fit<R: AsRef<[f64]>>(&mut self, data: &[R]) -> Result<(), VarError> {
        self.fitted = Some(self.spec.fit(data)?);
        Ok(())
    }

    /// See [`VarFit::predict_next()`].
    pub fn predict_next<R: AsRef<[f64]>>(&self, window: &[R]) -> Result<Vec<f64>, VarError> {
        self.require_fit()?.predict_next(window)
    }

    /// See [`VarFit::predict()`].
    pub fn predict<R: AsRef<[f64]>>(
        &self,
        data: &[R],
        steps: usize,
    ) -> Result<Vec<Vec<f64>>, VarError> {
        self.require_fit()?.predict(data, steps)
    }

    fn require_fit(&self) -> Result<&VarFit, VarError> {
        self.fitted.as_ref().ok_or(VarError::NotFitted)
    }
}

impl From<VarFit> for VectorAutoregression {
    fn from(fit: VarFit) -> Self {
        Self {
            spec: fit.spec(),
            fitted: Some(fit),
        }
    }
}
