//! Parameter recovery integration tests for sirocco-arima.

use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use sirocco_arima::{ArimaError, ArimaSpec, MAX_STATE_DIM};

fn innovations(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let normal = Normal::new(0.0, 1.0).unwrap();
    (0..n).map(|_| normal.sample(&mut rng)).collect()
}

fn generate_arma11(phi: f64, theta: f64, n: usize, seed: u64) -> Vec<f64> {
    let eps = innovations(n, seed);
    let mut data = vec![0.0; n];
    for t in 0..n {
        let ar_part = if t > 0 { phi * data[t - 1] } else { 0.0 };
        let ma_part = if t > 0 { theta * eps[t - 1] } else { 0.0 };
        data[t] = ar_part + eps[t] + ma_part;
    }
    data
}

fn cumulate(diffs: &[f64], start: f64) -> Vec<f64> {
    let mut level = start;
    diffs
        .iter()
        .map(|d| {
            level += d;
            level
        })
        .collect()
}

#[test]
fn white_noise_round_trip() {
    let data = innovations(500, 42);
    let fit = ArimaSpec::new(0, 0, 0).fit(&data).unwrap();
    assert_eq!(fit.order(), (0, 0, 0));
    assert!(fit.sigma2() > 0.8 && fit.sigma2() < 1.2);
    assert!(fit.log_likelihood().is_finite());
}

#[test]
fn ma1_recovery() {
    let theta = 0.5;
    let data = generate_arma11(0.0, theta, 2000, 200);
    let fit = ArimaSpec::new(0, 0, 1).fit(&data).unwrap();
    assert!(
        (fit.ma()[0] - theta).abs() < 0.1,
        "MA(1) theta: expected ~{}, got {}",
        theta,
        fit.ma()[0]
    );
}

#[test]
fn arma11_recovery() {
    let (phi, theta) = (0.5, 0.3);
    let data = generate_arma11(phi, theta, 2000, 300);
    let fit = ArimaSpec::new(1, 0, 1).fit(&data).unwrap();
    assert!(
        (fit.ar()[0] - phi).abs() < 0.15,
        "ARMA(1,1) phi: expected ~{}, got {}",
        phi,
        fit.ar()[0]
    );
    assert!(
        (fit.ma()[0] - theta).abs() < 0.15,
        "ARMA(1,1) theta: expected ~{}, got {}",
        theta,
        fit.ma()[0]
    );
}

#[test]
fn arima110_recovers_ar_on_differences() {
    let phi = 0.6;
    let diffs = generate_arma11(phi, 0.0, 1500, 500);
    let levels = cumulate(&diffs, 50.0);
    let fit = ArimaSpec::new(1, 1, 0).fit(&levels).unwrap();
    assert!(
        (fit.ar()[0] - phi).abs() < 0.1,
        "ARIMA(1,1,0) phi: expected ~{}, got {}",
        phi,
        fit.ar()[0]
    );
    assert!(fit.mean().is_none());
}

#[test]
fn aic_prefers_true_order_over_white_noise() {
    let data = generate_arma11(0.7, 0.0, 1000, 400);
    let ar1 = ArimaSpec::new(1, 0, 0).fit(&data).unwrap();
    let wn = ArimaSpec::new(0, 0, 0).fit(&data).unwrap();
    assert!(ar1.aic() < wn.aic());
    assert!(ar1.bic() < wn.bic());
}

#[test]
fn state_dimension_cap_is_public() {
    let data = generate_arma11(0.5, 0.0, 200, 600);
    let err = ArimaSpec::new(0, 0, MAX_STATE_DIM).fit(&data).unwrap_err();
    assert_eq!(
        err,
        ArimaError::StateTooLarge {
            r: MAX_STATE_DIM + 1,
            max: MAX_STATE_DIM,
        }
    );
    assert_eq!(ArimaSpec::new(MAX_STATE_DIM, 0, 0).state_dim(), MAX_STATE_DIM);
}
