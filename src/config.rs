use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level lagcast configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LagcastConfig {
    /// I/O settings.
    #[serde(default)]
    pub io: IoConfig,

    /// Vector autoregression settings.
    #[serde(default)]
    pub var: VarToml,

    /// Smoothing settings.
    #[serde(default)]
    pub smoothing: SmoothingToml,
}

impl LagcastConfig {
    /// Reads and parses a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }

    /// Loads `path` if given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct IoConfig {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VarToml {
    #[serde(default = "default_lag")]
    pub lag: usize,
    #[serde(default = "default_steps")]
    pub steps: usize,
}

impl Default for VarToml {
    fn default() -> Self {
        Self {
            lag: default_lag(),
            steps: default_steps(),
        }
    }
}

fn default_lag() -> usize {
    1
}
fn default_steps() -> usize {
    1
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SmoothingToml {
    #[serde(default = "default_method")]
    pub method: String,
    #[serde(default = "default_alpha")]
    pub alpha: f64,
    #[serde(default = "default_beta")]
    pub beta: f64,
    #[serde(default = "default_gamma")]
    pub gamma: f64,
    #[serde(default = "default_season_length")]
    pub season_length: usize,
    #[serde(default = "default_variance")]
    pub observation_variance: f64,
    #[serde(default = "default_variance")]
    pub level_variance: f64,
    #[serde(default = "default_window")]
    pub window: usize,
    #[serde(default = "default_steps")]
    pub steps: usize,
}

impl Default for SmoothingToml {
    fn default() -> Self {
        Self {
            method: default_method(),
            alpha: default_alpha(),
            beta: default_beta(),
            gamma: default_gamma(),
            season_length: default_season_length(),
            observation_variance: default_variance(),
            level_variance: default_variance(),
            window: default_window(),
            steps: default_steps(),
        }
    }
}

fn default_method() -> String {
    "simple".to_string()
}
fn default_alpha() -> f64 {
    0.2
}
fn default_beta() -> f64 {
    0.1
}
fn default_gamma() -> f64 {
    0.1
}
fn default_season_length() -> usize {
    12
}
fn default_variance() -> f64 {
    1.0
}
fn default_window() -> usize {
    3
}
