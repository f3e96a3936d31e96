//! Choosing the differencing order from a unit-root test.

use sirocco_stats::{AdfConfig, AdfResult, adf_test};
use tracing::{info, warn};

/// Differencing decision for one series.
#[derive(Debug, Clone, Copy)]
pub struct StationarityDiagnosis {
    d: usize,
    adf: Option<AdfResult>,
}

impl StationarityDiagnosis {
    /// Differencing order to use for every candidate: 0 or 1.
    pub fn d(&self) -> usize {
        self.d
    }

    /// The ADF test outcome, if the test could be computed.
    pub fn adf(&self) -> Option<&AdfResult> {
        self.adf.as_ref()
    }
}

/// Runs an augmented Dickey-Fuller test (constant, AIC lag selection) on
/// the raw series and picks `d`.
///
/// `d = 1` when the p-value exceeds `significance_threshold`, otherwise
/// `d = 0`. A series the test cannot handle (constant, too short,
/// degenerate regression) shows no evidence of stationarity and gets
/// `d = 1`.
pub fn diagnose_differencing(values: &[f64], significance_threshold: f64) -> StationarityDiagnosis {
    match adf_test(values, &AdfConfig::default()) {
        Ok(adf) => {
            let d = if adf.is_stationary_at(significance_threshold) {
                0
            } else {
                1
            };
            info!(
                statistic = adf.statistic(),
                p_value = adf.p_value(),
                used_lag = adf.used_lag(),
                d,
                "stationarity diagnosed"
            );
            StationarityDiagnosis { d, adf: Some(adf) }
        }
        Err(e) => {
            warn!(error = %e, "ADF test failed, assuming a unit root");
            StationarityDiagnosis { d: 1, adf: None }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_distr::{Distribution, Normal};

    fn normal_draws(n: usize, seed: u64) -> Vec<f64> {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let normal = Normal::new(0.0, 1.0).unwrap();
        (0..n).map(|_| normal.sample(&mut rng)).collect()
    }

    #[test]
    fn white_noise_needs_no_differencing() {
        let diag = diagnose_differencing(&normal_draws(500, 1), 0.05);
        assert_eq!(diag.d(), 0);
        assert!(diag.adf().unwrap().p_value() < 0.05);
    }

    #[test]
    fn drifting_random_walk_is_differenced() {
        let mut level = 0.0;
        let walk: Vec<f64> = normal_draws(500, 2)
            .into_iter()
            .map(|e| {
                level += 0.5 + e;
                level
            })
            .collect();
        assert_eq!(diagnose_differencing(&walk, 0.05).d(), 1);
    }

    #[test]
    fn untestable_series_defaults_to_one() {
        let diag = diagnose_differencing(&[3.0; 50], 0.05);
        assert_eq!(diag.d(), 1);
        assert!(diag.adf().is_none());

        assert_eq!(diagnose_differencing(&[1.0, 2.0], 0.05).d(), 1);
    }
}
