//! Smooth command: run a univariate smoothing routine and forecast ahead.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use lagcast_smoothing::{
    double_exponential_smoothing, exponential_smoothing_forecast, local_level, moving_average,
    triple_exponential_smoothing,
};

use crate::cli::SmoothArgs;
use crate::config::LagcastConfig;
use crate::convert::{self, Method, SmoothSettings};
use crate::series;

/// JSON report written by `lagcast smooth`.
#[derive(Debug, Serialize)]
pub struct SmoothReport {
    pub method: &'static str,
    pub observations: usize,
    /// In-sample smoothed values; absent for simple smoothing. Holt-Winters
    /// reports one-step-ahead fits from the second season on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smoothed: Option<Vec<f64>>,
    pub forecast: Vec<f64>,
}

fn smooth(data: &[f64], s: &SmoothSettings) -> Result<SmoothReport> {
    let (smoothed, forecast) = match s.method {
        Method::Simple => (None, exponential_smoothing_forecast(data, s.steps, s.alpha)?),
        Method::Holt(trend) => {
            let fit = double_exponential_smoothing(data, s.alpha, s.beta, trend)?;
            let forecast = fit.forecast(s.steps);
            (Some(fit.smoothed().to_vec()), forecast)
        }
        Method::HoltWinters(seasonality) => {
            let fit = triple_exponential_smoothing(
                data,
                s.alpha,
                s.beta,
                s.gamma,
                s.season_length,
                seasonality,
            )?;
            let forecast = fit.forecast(s.steps);
            (Some(fit.fitted().to_vec()), forecast)
        }
        Method::LocalLevel => {
            let fit = local_level(data, s.observation_variance, s.level_variance)?;
            (Some(fit.levels().to_vec()), fit.forecast(s.steps))
        }
        Method::MovingAverage => {
            let averages = moving_average(data, s.window)?;
            // Carry the last trailing mean forward.
            let last = averages.last().copied().unwrap_or(f64::NAN);
            (Some(averages), vec![last; s.steps])
        }
    };
    Ok(SmoothReport {
        method: s.method.name(),
        observations: data.len(),
        smoothed,
        forecast,
    })
}

/// Run the smoothing pipeline.
pub fn run(args: SmoothArgs) -> Result<()> {
    let _cmd = info_span!("smooth").entered();
    let config = LagcastConfig::load_or_default(args.config.as_deref())?;
    let settings = convert::smooth_settings(config, args)?;

    let data = series::read_univariate(&settings.input)?;
    info!(method = settings.method.name(), steps = settings.steps, "smoothing series");
    let report = smooth(&data, &settings)
        .with_context(|| format!("{} smoothing failed", settings.method.name()))?;

    series::write_report(&report, settings.output.as_deref())
}
