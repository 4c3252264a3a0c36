//! Forecast command: fit a VAR(p) model to a JSON series and forecast ahead.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use lagcast_var::{Matrix, VarSpec};

use crate::cli::ForecastArgs;
use crate::config::LagcastConfig;
use crate::convert;
use crate::series;

/// JSON report written by `lagcast forecast`.
#[derive(Debug, Serialize)]
pub struct ForecastReport {
    pub lag: usize,
    pub variables: usize,
    pub observations: usize,
    /// One `k x k` matrix per lag, lag 1 first, as rows.
    pub coefficients: Vec<Vec<Vec<f64>>>,
    pub forecast: Vec<Vec<f64>>,
}

fn matrix_rows(m: &Matrix) -> Vec<Vec<f64>> {
    (0..m.rows()).map(|i| m.row(i).to_vec()).collect()
}

/// Run the forecast pipeline.
pub fn run(args: ForecastArgs) -> Result<()> {
    let _cmd = info_span!("forecast").entered();
    let config = LagcastConfig::load_or_default(args.config.as_deref())?;
    let settings = convert::forecast_settings(config, args)?;

    let data = series::read_multivariate(&settings.input)?;
    let k = data[0].len();

    info!(lag = settings.lag, variables = k, "fitting VAR model");
    let fit = VarSpec::new(settings.lag, k)
        .fit(&data)
        .context("VAR fit failed")?;
    let forecast = fit
        .predict(&data, settings.steps)
        .context("VAR forecast failed")?;
    info!(steps = forecast.len(), "forecast complete");

    let report = ForecastReport {
        lag: fit.p(),
        variables: fit.k(),
        observations: data.len(),
        coefficients: fit.coefficients().iter().map(matrix_rows).collect(),
        forecast,
    };
    series::write_report(&report, settings.output.as_deref())
}
