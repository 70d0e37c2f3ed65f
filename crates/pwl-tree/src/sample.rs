use crate::*;
use pwl_core::Real;
use serde::Deserialize;
use serde::Serialize;

/// One observation `(x, f(x))`. `y` is NaN where `f` is undefined at `x`.
///
/// JSON has no NaN: `serde_json` writes an undefined `y` as `null` and
/// refuses to read it back, so only fully defined samples round-trip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub x: Real,
    pub y: Real,
}

impl From<(Real, Real)> for Sample {
    fn from((x, y): (Real, Real)) -> Self {
        Self { x, y }
    }
}

/// At least two samples with strictly increasing `x`.
///
/// Undefined `y` values are kept as they are; only the `x` ordering
/// is validated.
#[derive(Debug, Clone, PartialEq)]
pub struct Samples(Vec<Sample>);

impl Samples {
    /// Samples `f` at `n` evenly spaced points spanning `[lo, hi]`.
    pub fn univariate<F>(f: F, lo: Real, hi: Real, n: usize) -> Result<Self>
    where
        F: Fn(Real) -> Real,
    {
        let steps = n.saturating_sub(1).max(1) as Real;
        (0..n)
            .map(|i| lo + (hi - lo) * i as Real / steps)
            .map(|x| Sample { x, y: f(x) })
            .collect::<Vec<Sample>>()
            .try_into()
    }

    /// Mean of the defined `y` values, NaN if there are none.
    pub fn mean(&self) -> Real {
        let (sum, n) = self
            .0
            .iter()
            .map(|s| s.y)
            .filter(|y| pwl_core::defined(*y))
            .fold((0.0, 0usize), |(sum, n), y| (sum + y, n + 1));
        if n == 0 { Real::NAN } else { sum / n as Real }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn first(&self) -> &Sample {
        &self.0[0]
    }
    pub fn last(&self) -> &Sample {
        &self.0[self.0.len() - 1]
    }
    pub fn as_slice(&self) -> &[Sample] {
        &self.0
    }
    pub fn iter(&self) -> impl Iterator<Item = &Sample> {
        self.0.iter()
    }
}

impl TryFrom<Vec<Sample>> for Samples {
    type Error = TreeError;
    fn try_from(samples: Vec<Sample>) -> Result<Self> {
        if samples.len() < 2 {
            return Err(TreeError::InvalidSampleSet(format!(
                "need at least 2 samples, got {}",
                samples.len()
            )));
        }
        // negated so that NaN x values are rejected too
        if let Some(i) = samples.windows(2).position(|w| !(w[0].x < w[1].x)) {
            return Err(TreeError::InvalidSampleSet(format!(
                "x values must strictly increase, but x[{}] = {} and x[{}] = {}",
                i,
                samples[i].x,
                i + 1,
                samples[i + 1].x
            )));
        }
        Ok(Self(samples))
    }
}

impl TryFrom<Vec<(Real, Real)>> for Samples {
    type Error = TreeError;
    fn try_from(pairs: Vec<(Real, Real)>) -> Result<Self> {
        Self::try_from(pairs.into_iter().map(Sample::from).collect::<Vec<Sample>>())
    }
}
