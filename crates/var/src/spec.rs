//! VAR model specification (unfitted).

use tracing::debug;

use crate::design::{Design, build_design};
use crate::error::VarError;
use crate::fit::VarFit;

/// An unfitted VAR(p) specification over `k` variables.
///
/// Entry point of the typestate workflow: build a spec with
/// [`VarSpec::new()`], then call [`VarSpec::fit()`] to obtain a [`VarFit`].
///
/// # Typestate Workflow
///
/// ```mermaid
/// graph LR
///     A["VarSpec::new(p, k)"] -->|".fit(&data)?"| B["VarFit"]
///     A -->|".prepare_data(&data)?"| C["Design { Y, X }"]
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VarSpec {
    p: usize,
    k: usize,
}

impl VarSpec {
    /// Creates a specification with lag order `p` and `k` variables.
    ///
    /// Orders are checked when the spec is used, so `p == 0` or `k == 0`
    /// surface as errors from [`VarSpec::prepare_data()`] / [`VarSpec::fit()`].
    ///
    /// # Example
    ///
    /// ```
    /// use lagcast_var::VarSpec;
    ///
    /// let spec = VarSpec::new(2, 3);
    /// assert_eq!(spec.p(), 2);
    /// assert_eq!(spec.k(), 3);
    /// ```
    pub fn new(p: usize, k: usize) -> Self {
        Self { p, k }
    }

    /// Returns the lag order (`p`).
    pub fn p(&self) -> usize {
        self.p
    }

    /// Returns the number of variables (`k`).
    pub fn k(&self) -> usize {
        self.k
    }

    /// Builds the response matrix `Y` and lagged design matrix `X`.
    ///
    /// See [`Design`] for the exact layout. Has no side effects.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`VarError::InvalidOrder`] | `p == 0` |
    /// | [`VarError::InvalidDimension`] | `k == 0` |
    /// | [`VarError::ObservationLength`] | an observation does not have `k` values |
    /// | [`VarError::NonFiniteData`] | any value is NaN or infinite |
    /// | [`VarError::InsufficientData`] | `data.len() <= p` |
    pub fn prepare_data<R: AsRef<[f64]>>(&self, data: &[R]) -> Result<Design, VarError> {
        build_design(self.p, self.k, data)
    }

    /// Fits the model by ordinary least squares.
    ///
    /// Solves the normal equations `B = (XᵀX)⁻¹ XᵀY` for the stacked
    /// `(p·k) x k` coefficient matrix and splits it into one `k x k` matrix
    /// per lag.
    ///
    /// # Errors
    ///
    /// Everything [`VarSpec::prepare_data()`] returns, plus
    /// [`VarError::Matrix`] wrapping
    /// [`MatrixError::SingularMatrix`](lagcast_matrix::MatrixError::SingularMatrix)
    /// when `XᵀX` cannot be inverted (collinear lags, or fewer than `p·k`
    /// regression rows).
    pub fn fit<R: AsRef<[f64]>>(&self, data: &[R]) -> Result<VarFit, VarError> {
        let (y, x) = self.prepare_data(data)?.into_parts();
        debug!(
            p = self.p,
            k = self.k,
            rows = x.rows(),
            regressors = x.cols(),
            "solving VAR normal equations"
        );

        let xt = x.transpose();
        let xtx_inv = xt.multiply(&x)?.inverse()?;
        let stacked = xtx_inv.multiply(&xt)?.multiply(&y)?;

        // Row block `lag` of B maps lag-(lag+1) values onto the targets
        // (B[r][c]: regressor r -> target c), so it is stored transposed.
        let coefficients = (0..self.p)
            .map(|lag| Ok(stacked.row_block(lag * self.k, self.k)?.transpose()))
            .collect::<Result<Vec<_>, VarError>>()?;

        Ok(VarFit::new(*self, coefficients))
    }
}
