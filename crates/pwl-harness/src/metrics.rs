use pwl_core::Energy;
use pwl_core::Real;
use serde::Deserialize;
use serde::Serialize;
use std::fmt::Display;
use std::fmt::Formatter;

/// Approximation error of a tree against its true function.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Root-mean-square error of the tree.
    pub rmse: Real,
    /// Root-mean-square error of always predicting the sample mean.
    pub baseline: Real,
    /// `rmse / baseline`. Near 0 the tree tracks the function; near or
    /// above 1 it does no better than the mean.
    pub normalized: Real,
    pub trials: usize,
    /// Trials where either side was undefined.
    pub excluded: usize,
}

impl Display for Metrics {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<20}{:<20}{:<20}{:<20}",
            format!("RMSE {:.3}", self.rmse),
            format!("RMSE_MAX {:.3}", self.baseline),
            format!("RMSE_NORM {:.3}", self.normalized),
            format!("excluded {}/{}", self.excluded, self.trials),
        )
    }
}

/// Running sums of squared error over trials.
///
/// Trials where the true or approximated value is undefined add nothing to
/// either sum but still count towards the trial total.
#[derive(Debug, Clone, Copy, Default)]
pub struct Errors {
    squared: Energy,
    baseline: Energy,
    trials: usize,
    excluded: usize,
}

impl Errors {
    pub fn witness(&mut self, real: Real, approx: Real, mean: Real) {
        self.trials += 1;
        if pwl_core::defined(real) && pwl_core::defined(approx) {
            self.squared += (real - approx).powi(2);
            self.baseline += (real - mean).powi(2);
        } else {
            self.excluded += 1;
        }
    }

    pub fn metrics(&self) -> Metrics {
        let n = self.trials.max(1) as Real;
        let rmse = (self.squared / n).sqrt();
        let baseline = (self.baseline / n).sqrt();
        let normalized = match (rmse, baseline) {
            (r, _) if r == 0.0 => 0.0,
            (_, b) if b == 0.0 => Real::INFINITY,
            (r, b) => r / b,
        };
        Metrics {
            rmse,
            baseline,
            normalized,
            trials: self.trials,
            excluded: self.excluded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divides_by_all_trials() {
        let mut errors = Errors::default();
        errors.witness(3.0, 1.0, 0.0);
        errors.witness(Real::NAN, 1.0, 0.0);
        errors.witness(1.0, Real::NAN, 0.0);
        errors.witness(4.0, 4.0, 0.0);
        let metrics = errors.metrics();
        assert_eq!(metrics.trials, 4);
        assert_eq!(metrics.excluded, 2);
        assert_eq!(metrics.rmse, (4.0 / 4.0 as Real).sqrt());
        assert_eq!(metrics.baseline, (25.0 / 4.0 as Real).sqrt());
        assert_eq!(metrics.normalized, 1.0 / 2.5);
    }

    #[test]
    fn infinities_are_excluded() {
        let mut errors = Errors::default();
        errors.witness(Real::NEG_INFINITY, -5.0, 1.0);
        errors.witness(2.0, 2.0, 1.0);
        let metrics = errors.metrics();
        assert_eq!(metrics.excluded, 1);
        assert_eq!(metrics.rmse, 0.0);
        assert!(metrics.baseline.is_finite());
    }

    #[test]
    fn serializes() {
        let mut errors = Errors::default();
        errors.witness(3.0, 1.0, 0.0);
        errors.witness(Real::NAN, 1.0, 0.0);
        errors.witness(1.0, Real::NAN, 0.0);
        errors.witness(4.0, 4.0, 0.0);
        let metrics = errors.metrics();
        let json = serde_json::to_string(&metrics).unwrap();
        assert_eq!(serde_json::from_str::<Metrics>(&json).unwrap(), metrics);
    }

    #[test]
    fn degenerate_baseline() {
        let mut errors = Errors::default();
        errors.witness(1.0, 1.0, 1.0);
        assert_eq!(errors.metrics().normalized, 0.0);
        errors.witness(1.0, 2.0, 1.0);
        assert_eq!(errors.metrics().normalized, Real::INFINITY);
        assert_eq!(Errors::default().metrics().normalized, 0.0);
    }
}
