use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// lagcast time-series forecaster.
#[derive(Parser)]
#[command(
    name = "lagcast",
    version,
    about = "Vector autoregression and smoothing forecasts"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Fit a VAR(p) model to a multivariate series and forecast ahead.
    Forecast(ForecastArgs),
    /// Smooth a univariate series and forecast ahead.
    Smooth(SmoothArgs),
}

/// Arguments for the `forecast` subcommand.
#[derive(clap::Args)]
pub struct ForecastArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// JSON series: an array of equal-length number arrays. Overrides [io].input.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Path for the JSON report. Overrides [io].output; stdout if unset.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Lag order p. Overrides [var].lag.
    #[arg(short = 'p', long)]
    pub lag: Option<usize>,

    /// Number of steps to forecast. Overrides [var].steps.
    #[arg(short = 'n', long)]
    pub steps: Option<usize>,
}

/// Arguments for the `smooth` subcommand.
#[derive(clap::Args)]
pub struct SmoothArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// JSON series: an array of numbers. Overrides [io].input.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Path for the JSON report. Overrides [io].output; stdout if unset.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// simple, holt, holt-multiplicative, holt-winters, holt-winters-multiplicative,
    /// local-level or moving-average. Overrides [smoothing].method.
    #[arg(short, long)]
    pub method: Option<String>,

    /// Level smoothing factor.
    #[arg(long)]
    pub alpha: Option<f64>,

    /// Trend smoothing factor (holt methods).
    #[arg(long)]
    pub beta: Option<f64>,

    /// Seasonal smoothing factor (holt-winters methods).
    #[arg(long)]
    pub gamma: Option<f64>,

    /// Observations per season (holt-winters methods).
    #[arg(long)]
    pub season_length: Option<usize>,

    /// Observation noise variance (local-level).
    #[arg(long)]
    pub observation_variance: Option<f64>,

    /// Level disturbance variance (local-level).
    #[arg(long)]
    pub level_variance: Option<f64>,

    /// Window length (moving-average).
    #[arg(long)]
    pub window: Option<usize>,

    /// Number of steps to forecast.
    #[arg(short = 'n', long)]
    pub steps: Option<usize>,
}
