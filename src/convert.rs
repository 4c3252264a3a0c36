//! Pure conversion functions: TOML config structs and CLI overrides -> run settings.

use std::path::PathBuf;

use anyhow::{Result, bail};

use lagcast_smoothing::{Seasonality, Trend};

use crate::cli::{ForecastArgs, SmoothArgs};
use crate::config::LagcastConfig;

/// Smoothing routine selected by name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Method {
    Simple,
    Holt(Trend),
    HoltWinters(Seasonality),
    LocalLevel,
    MovingAverage,
}

impl Method {
    /// Canonical name, as written in reports.
    pub fn name(self) -> &'static str {
        match self {
            Method::Simple => "simple",
            Method::Holt(Trend::Additive) => "holt",
            Method::Holt(Trend::Multiplicative) => "holt-multiplicative",
            Method::HoltWinters(Seasonality::Additive) => "holt-winters",
            Method::HoltWinters(Seasonality::Multiplicative) => "holt-winters-multiplicative",
            Method::LocalLevel => "local-level",
            Method::MovingAverage => "moving-average",
        }
    }
}

/// Parses a smoothing method name string into the corresponding enum variant.
pub fn parse_method(s: &str) -> Result<Method> {
    match s.to_lowercase().as_str() {
        "simple" | "ses" => Ok(Method::Simple),
        "holt" | "holt-additive" => Ok(Method::Holt(Trend::Additive)),
        "holt-multiplicative" => Ok(Method::Holt(Trend::Multiplicative)),
        "holt-winters" | "triple" => Ok(Method::HoltWinters(Seasonality::Additive)),
        "holt-winters-multiplicative" => Ok(Method::HoltWinters(Seasonality::Multiplicative)),
        "local-level" => Ok(Method::LocalLevel),
        "moving-average" | "ma" => Ok(Method::MovingAverage),
        other => bail!("unknown smoothing method: {other:?}"),
    }
}

/// Settings for one `forecast` run after CLI overrides are applied.
#[derive(Debug)]
pub struct ForecastSettings {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub lag: usize,
    pub steps: usize,
}

/// Merges `forecast` CLI arguments over the loaded config.
pub fn forecast_settings(config: LagcastConfig, args: ForecastArgs) -> Result<ForecastSettings> {
    let Some(input) = args.input.or(config.io.input) else {
        bail!("no input path: set [io].input in config or use --input");
    };
    Ok(ForecastSettings {
        input,
        output: args.output.or(config.io.output),
        lag: args.lag.unwrap_or(config.var.lag),
        steps: args.steps.unwrap_or(config.var.steps),
    })
}

/// Settings for one `smooth` run after CLI overrides are applied.
#[derive(Debug)]
pub struct SmoothSettings {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub method: Method,
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
    pub season_length: usize,
    pub observation_variance: f64,
    pub level_variance: f64,
    pub window: usize,
    pub steps: usize,
}

/// Merges `smooth` CLI arguments over the loaded config.
pub fn smooth_settings(config: LagcastConfig, args: SmoothArgs) -> Result<SmoothSettings> {
    let Some(input) = args.input.or(config.io.input) else {
        bail!("no input path: set [io].input in config or use --input");
    };
    let smoothing = config.smoothing;
    let method = parse_method(args.method.as_deref().unwrap_or(&smoothing.method))?;
    Ok(SmoothSettings {
        input,
        output: args.output.or(config.io.output),
        method,
        alpha: args.alpha.unwrap_or(smoothing.alpha),
        beta: args.beta.unwrap_or(smoothing.beta),
        gamma: args.gamma.unwrap_or(smoothing.gamma),
        season_length: args.season_length.unwrap_or(smoothing.season_length),
        observation_variance: args
            .observation_variance
            .unwrap_or(smoothing.observation_variance),
        level_variance: args.level_variance.unwrap_or(smoothing.level_variance),
        window: args.window.unwrap_or(smoothing.window),
        steps: args.steps.unwrap_or(smoothing.steps),
    })
}
