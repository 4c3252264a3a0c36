//! Lagged regression design: turns a multivariate series into `(Y, X)`.

use lagcast_matrix::Matrix;

use crate::error::VarError;

/// Response and design matrices built from a series by
/// [`VarSpec::prepare_data()`](crate::VarSpec::prepare_data).
///
/// For a series of length `T`, lag order `p` and `k` variables:
///
/// | Matrix | Shape | Row `i` |
/// |--------|-------|---------|
/// | `y` | `(T - p) x k` | `data[i + p]` |
/// | `x` | `(T - p) x (p * k)` | `data[i + p - 1] ‖ data[i + p - 2] ‖ … ‖ data[i]` |
///
/// Lag 1 (the most recent predictor) occupies the first `k` columns of `x`.
#[derive(Clone, Debug, PartialEq)]
pub struct Design {
    y: Matrix,
    x: Matrix,
}

impl Design {
    /// Response matrix `Y`.
    pub fn y(&self) -> &Matrix {
        &self.y
    }

    /// Design matrix `X` of lagged predictors.
    pub fn x(&self) -> &Matrix {
        &self.x
    }

    /// Splits into `(Y, X)`.
    pub fn into_parts(self) -> (Matrix, Matrix) {
        (self.y, self.x)
    }
}

/// Checks the order parameters and that every observation has `k` finite values.
pub(crate) fn validate_series<R: AsRef<[f64]>>(
    p: usize,
    k: usize,
    data: &[R],
) -> Result<(), VarError> {
    if p == 0 {
        return Err(VarError::InvalidOrder);
    }
    if k == 0 {
        return Err(VarError::InvalidDimension);
    }
    for (index, obs) in data.iter().enumerate() {
        let obs = obs.as_ref();
        if obs.len() != k {
            return Err(VarError::ObservationLength {
                index,
                len: obs.len(),
                k,
            });
        }
        if obs.iter().any(|v| !v.is_finite()) {
            return Err(VarError::NonFiniteData);
        }
    }
    Ok(())
}

pub(crate) fn build_design<R: AsRef<[f64]>>(
    p: usize,
    k: usize,
    data: &[R],
) -> Result<Design, VarError> {
    validate_series(p, k, data)?;
    let n = data.len();
    if n <= p {
        return Err(VarError::InsufficientData { n, min: p + 1 });
    }

    let n_rows = n - p;
    let mut y = Vec::with_capacity(n_rows * k);
    let mut x = Vec::with_capacity(n_rows * p * k);
    for t in p..n {
        y.extend_from_slice(data[t].as_ref());
        for lag in 1..=p {
            x.extend_from_slice(data[t - lag].as_ref());
        }
    }

    Ok(Design {
        y: Matrix::new(n_rows, k, y)?,
        x: Matrix::new(n_rows, p * k, x)?,
    })
}
