//! Forecast scenarios on small hand-written series.

use lagcast_var::{MatrixError, VarError, VectorAutoregression};

fn bivariate() -> Vec<Vec<f64>> {
    vec![
        vec![1.0, 2.0],
        vec![1.5, 2.5],
        vec![1.3, 2.7],
        vec![1.8, 3.1],
        vec![2.0, 3.0],
        vec![2.2, 3.4],
        vec![2.5, 3.7],
        vec![2.3, 3.5],
        vec![2.8, 4.0],
        vec![3.0, 4.2],
    ]
}

#[test]
fn prepare_data_four_rows() {
    let model = VectorAutoregression::new(2, 2);
    let data = vec![
        vec![1.0, 2.0],
        vec![3.0, 4.0],
        vec![5.0, 6.0],
        vec![7.0, 8.0],
    ];
    let design = model.prepare_data(&data).unwrap();
    assert_eq!(design.y().rows(), 2);
    assert_eq!(design.y().cols(), 2);
    assert_eq!(design.x().rows(), 2);
    assert_eq!(design.x().cols(), 4);
}

#[test]
fn prepare_data_shapes_follow_length() {
    let data = bivariate();
    for p in 1..data.len() {
        let design = VectorAutoregression::new(p, 2).prepare_data(&data).unwrap();
        assert_eq!(design.y().shape(), (data.len() - p, 2));
        assert_eq!(design.x().shape(), (data.len() - p, p * 2));
    }
}

#[test]
fn too_short_for_lag() {
    let model = VectorAutoregression::new(2, 2);
    let data = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
    assert!(matches!(
        model.prepare_data(&data),
        Err(VarError::InsufficientData { n: 2, min: 3 })
    ));

    let mut model = model;
    assert!(matches!(
        model.fit(&data),
        Err(VarError::InsufficientData { .. })
    ));
    assert!(!model.is_fitted());
}

#[test]
fn fit_and_predict_three_steps() {
    let data = bivariate();
    let mut model = VectorAutoregression::new(2, 2);
    model.fit(&data).unwrap();

    assert_eq!(model.coefficients().len(), 2);
    assert!(model.coefficients().iter().all(|c| c.shape() == (2, 2)));

    let forecast = model.predict(&data, 3).unwrap();
    assert_eq!(forecast.len(), 3);
    for step in &forecast {
        assert_eq!(step.len(), 2);
        assert!(step.iter().all(|v| v.is_finite()));
    }
}

#[test]
fn predict_next_from_tail() {
    let data = bivariate();
    let mut model = VectorAutoregression::new(2, 2);
    model.fit(&data).unwrap();
    let next = model.predict_next(&data[data.len() - 2..]).unwrap();
    assert_eq!(next.len(), 2);
    assert!(next.iter().all(|v| v.is_finite()));
}

#[test]
fn linear_trend_is_collinear() {
    // Every lag column is an affine function of t, so XᵀX has rank 2.
    let data: Vec<Vec<f64>> = (0..10)
        .map(|t| vec![2.0 * t as f64 + 1.0, 2.0 * t as f64 + 2.0])
        .collect();
    let mut model = VectorAutoregression::new(2, 2);
    let err = model.fit(&data).unwrap_err();
    assert!(matches!(
        err,
        VarError::Matrix(MatrixError::SingularMatrix { .. })
    ));
}

#[test]
fn ragged_series_rejected() {
    let mut data = bivariate();
    data[4].push(9.0);
    let mut model = VectorAutoregression::new(1, 2);
    assert_eq!(
        model.fit(&data),
        Err(VarError::ObservationLength {
            index: 4,
            len: 3,
            k: 2
        })
    );
}
