//! JSON series input and report output.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::info;

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read series file: {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("failed to parse JSON series: {}", path.display()))
}

/// Reads a multivariate series: an array of observations, each an array of numbers.
pub fn read_multivariate(path: &Path) -> Result<Vec<Vec<f64>>> {
    let data: Vec<Vec<f64>> = read_json(path)?;
    if data.is_empty() {
        bail!("series is empty: {}", path.display());
    }
    info!(path = %path.display(), observations = data.len(), "series loaded");
    Ok(data)
}

/// Reads a univariate series: a flat array of numbers.
pub fn read_univariate(path: &Path) -> Result<Vec<f64>> {
    let data: Vec<f64> = read_json(path)?;
    info!(path = %path.display(), observations = data.len(), "series loaded");
    Ok(data)
}

/// Writes `report` as pretty JSON to `path`, or to stdout when `path` is `None`.
pub fn write_report<T: Serialize>(report: &T, path: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("failed to serialize report")?;
    match path {
        Some(path) => {
            std::fs::write(path, json + "\n")
                .with_context(|| format!("failed to write report: {}", path.display()))?;
            info!(path = %path.display(), "report written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}").context("failed to write report to stdout")?;
        }
    }
    Ok(())
}
