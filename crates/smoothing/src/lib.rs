//! # lagcast-smoothing
//!
//! Univariate smoothing forecasts that sit next to the VAR model:
//!
//! | Function | Model | Forecast |
//! |----------|-------|----------|
//! | [`exponential_smoothing_forecast()`] | level only | flat |
//! | [`double_exponential_smoothing()`] | level + [`Trend`] | linear or geometric |
//! | [`triple_exponential_smoothing()`] | level + trend + [`Seasonality`] | trend line with repeating season |
//! | [`local_level()`] | random-walk level, Kalman filtered | flat |
//! | [`moving_average()`] | trailing mean | n/a |
//!
//! Each routine validates its parameters before touching
//! the data and reports failures as [`SmoothingError`].

mod error;
mod holt;
mod holt_winters;
mod local_level;
mod moving_average;
mod simple;
mod validate;

pub use error::SmoothingError;
pub use holt::{DoubleSmoothing, Trend, double_exponential_smoothing};
pub use holt_winters::{Seasonality, TripleSmoothing, triple_exponential_smoothing};
pub use local_level::{LocalLevel, local_level};
pub use moving_average::moving_average;
pub use simple::exponential_smoothing_forecast;
