//! Integration tests for lagcast-smoothing forecasts.

use approx::assert_relative_eq;
use lagcast_smoothing::{
    Seasonality, SmoothingError, Trend, double_exponential_smoothing,
    exponential_smoothing_forecast, local_level, moving_average, triple_exponential_smoothing,
};

const GROWING: [f64; 6] = [10.0, 12.0, 14.0, 18.0, 24.0, 30.0];

#[test]
fn multiplicative_forecast_keeps_growing() {
    let fit = double_exponential_smoothing(&GROWING, 0.5, 0.3, Trend::Multiplicative).unwrap();
    assert_eq!(fit.smoothed().len(), GROWING.len());
    assert!(fit.trend().last().unwrap() > &1.0);

    let f = fit.forecast(3);
    assert_eq!(f.len(), 3);
    assert!(f[0] > 0.0);
    assert!(f.windows(2).all(|w| w[1] > w[0]));
    // Geometric: consecutive ratios equal the final trend.
    let b = *fit.trend().last().unwrap();
    assert_relative_eq!(f[1] / f[0], b, epsilon = 1e-12);
    assert_relative_eq!(f[2] / f[1], b, epsilon = 1e-12);
}

#[test]
fn additive_forecast_is_linear() {
    let fit = double_exponential_smoothing(&GROWING, 0.6, 0.4, Trend::Additive).unwrap();
    let f = fit.forecast(4);
    let b = *fit.trend().last().unwrap();
    for w in f.windows(2) {
        assert_relative_eq!(w[1] - w[0], b, epsilon = 1e-9);
    }
}

#[test]
fn simple_forecast_is_flat_and_bounded() {
    let f = exponential_smoothing_forecast(&GROWING, 5, 0.2).unwrap();
    assert_eq!(f.len(), 5);
    assert!(f.iter().all(|&v| v == f[0]));
    assert!(f[0] >= 10.0 && f[0] <= 30.0);
}

#[test]
fn moving_average_tracks_series() {
    let out = moving_average(&GROWING, 2).unwrap();
    assert_eq!(out, vec![11.0, 13.0, 16.0, 21.0, 27.0]);
}

#[test]
fn range_checks() {
    assert!(matches!(
        exponential_smoothing_forecast(&GROWING, 1, 1.0),
        Err(SmoothingError::InvalidSmoothingFactor { .. })
    ));
    assert!(matches!(
        double_exponential_smoothing(&GROWING, 0.5, 0.0, Trend::Additive),
        Err(SmoothingError::InvalidSmoothingFactor { name: "beta", .. })
    ));
    assert!(matches!(
        moving_average(&GROWING, 0),
        Err(SmoothingError::InvalidWindow { .. })
    ));
}

/// Monthly-style series: linear growth with a four-step seasonal swing.
fn seasonal_series(seasons: usize) -> Vec<f64> {
    let swing = [1.15, 0.9, 1.05, 0.9];
    (0..seasons * 4)
        .map(|t| (100.0 + 2.0 * t as f64) * swing[t % 4])
        .collect()
}

#[test]
fn holt_winters_keeps_peak_position() {
    let data = seasonal_series(5);
    for seasonality in [Seasonality::Additive, Seasonality::Multiplicative] {
        let fit = triple_exponential_smoothing(&data, 0.4, 0.2, 0.3, 4, seasonality).unwrap();
        assert_eq!(fit.seasonality(), seasonality);
        assert_eq!(fit.fitted().len(), data.len() - 4);
        let f = fit.forecast(8);
        assert_eq!(f.len(), 8);
        // The series ends on a full season, so step 1 lands on the peak.
        let peak = f[..4]
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| i);
        assert_eq!(peak, Some(0));
        // Next season is higher than this one.
        assert!(f[4] > f[0]);
    }
}

#[test]
fn holt_winters_range_checks() {
    let data = seasonal_series(2);
    assert!(matches!(
        triple_exponential_smoothing(&data, 0.4, 0.2, 1.5, 4, Seasonality::Additive),
        Err(SmoothingError::InvalidSmoothingFactor { name: "gamma", .. })
    ));
    assert_eq!(
        triple_exponential_smoothing(&data, 0.4, 0.2, 0.3, 0, Seasonality::Additive),
        Err(SmoothingError::InvalidSeasonLength { season_length: 0 })
    );
    assert_eq!(
        triple_exponential_smoothing(&data[..7], 0.4, 0.2, 0.3, 4, Seasonality::Additive),
        Err(SmoothingError::InsufficientData { n: 7, min: 8 })
    );
}

#[test]
fn local_level_filter_smooths_noise() {
    let data = [10.0, 12.0, 9.0, 11.0, 10.5, 9.5, 10.0];
    let fit = local_level(&data, 4.0, 0.01).unwrap();
    assert_eq!(fit.levels().len(), data.len());
    let last = *fit.levels().last().unwrap();
    assert!((9.5..=11.0).contains(&last));
    // Filtered levels move less than the data.
    let spread = |xs: &[f64]| {
        xs.iter().cloned().fold(f64::MIN, f64::max) - xs.iter().cloned().fold(f64::MAX, f64::min)
    };
    assert!(spread(fit.levels()) < spread(&data));
    assert_eq!(fit.forecast(2), vec![last; 2]);
}
