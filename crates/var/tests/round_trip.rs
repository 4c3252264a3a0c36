//! Round-trip integration tests for lagcast-var: simulate, fit, compare.

use approx::assert_abs_diff_eq;
use lagcast_var::{VarSpec, VectorAutoregression};
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

/// Simulates `x_t = Σ_i A_i x_{t-i} + e_t` with `A_i` given row-major as
/// `k x k` blocks, starting from zeros. The first `burn_in` values are dropped.
fn simulate_var(lags: &[[f64; 4]], sigma: f64, n: usize, seed: u64) -> Vec<[f64; 2]> {
    let burn_in = 100;
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let normal = Normal::new(0.0, sigma).unwrap();
    let mut xs: Vec<[f64; 2]> = Vec::with_capacity(n + burn_in);
    for t in 0..(n + burn_in) {
        let mut next = [normal.sample(&mut rng), normal.sample(&mut rng)];
        for (i, a) in lags.iter().enumerate() {
            if t > i {
                let prev = xs[t - 1 - i];
                next[0] += a[0] * prev[0] + a[1] * prev[1];
                next[1] += a[2] * prev[0] + a[3] * prev[1];
            }
        }
        xs.push(next);
    }
    xs.split_off(burn_in)
}

fn assert_coefficients(fit: &lagcast_var::VarFit, expected: &[[f64; 4]], tol: f64) {
    assert_eq!(fit.coefficients().len(), expected.len());
    for (lag, (coef, exp)) in fit.coefficients().iter().zip(expected).enumerate() {
        for r in 0..2 {
            for c in 0..2 {
                let got = coef.at(r, c);
                let want = exp[r * 2 + c];
                assert!(
                    (got - want).abs() < tol,
                    "lag {} entry ({}, {}): expected ~{}, got {}",
                    lag + 1,
                    r,
                    c,
                    want,
                    got
                );
            }
        }
    }
}

#[test]
fn noise_free_var1_recovered_exactly() {
    let a = [0.9, -0.2, 0.1, 0.8];
    let mut data = vec![[1.0, 0.0]];
    for t in 1..12 {
        let prev: [f64; 2] = data[t - 1];
        data.push([
            a[0] * prev[0] + a[1] * prev[1],
            a[2] * prev[0] + a[3] * prev[1],
        ]);
    }

    let fit = VarSpec::new(1, 2).fit(&data).unwrap();
    assert_coefficients(&fit, &[a], 1e-8);

    // Forecasts continue the deterministic recursion.
    let forecast = fit.predict(&data, 3).unwrap();
    let mut expected = *data.last().unwrap();
    for step in &forecast {
        expected = [
            a[0] * expected[0] + a[1] * expected[1],
            a[2] * expected[0] + a[3] * expected[1],
        ];
        assert_abs_diff_eq!(step[0], expected[0], epsilon = 1e-8);
        assert_abs_diff_eq!(step[1], expected[1], epsilon = 1e-8);
    }
}

#[test]
fn var1_recovery() {
    let a = [0.5, 0.1, 0.2, 0.3];
    let data = simulate_var(&[a], 1.0, 2000, 42);
    let fit = VarSpec::new(1, 2).fit(&data).unwrap();
    assert_coefficients(&fit, &[a], 0.1);
}

#[test]
fn var2_recovery() {
    let a1 = [0.4, 0.0, 0.1, 0.3];
    let a2 = [0.2, 0.0, 0.0, 0.1];
    let data = simulate_var(&[a1, a2], 1.0, 3000, 7);
    let fit = VarSpec::new(2, 2).fit(&data).unwrap();
    assert_coefficients(&fit, &[a1, a2], 0.1);
}

#[test]
fn stable_process_forecast_decays() {
    let a = [0.5, 0.1, 0.2, 0.3];
    let data = simulate_var(&[a], 1.0, 1000, 99);
    let fit = VarSpec::new(1, 2).fit(&data).unwrap();
    let forecast = fit.predict(&data, 50).unwrap();
    let last = forecast.last().unwrap();
    assert!(last[0].abs() < 0.1 && last[1].abs() < 0.1, "{last:?}");
}

#[test]
fn model_and_typestate_agree() {
    let a = [0.5, 0.1, 0.2, 0.3];
    let data = simulate_var(&[a], 1.0, 300, 5);

    let fit = VarSpec::new(1, 2).fit(&data).unwrap();
    let mut model = VectorAutoregression::new(1, 2);
    model.fit(&data).unwrap();

    assert_eq!(model.coefficients(), fit.coefficients());
    assert_eq!(
        model.predict(&data, 4).unwrap(),
        fit.predict(&data, 4).unwrap()
    );
}
