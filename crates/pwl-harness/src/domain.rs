use pwl_core::Real;
use rand::Rng;
use serde::Deserialize;
use serde::Serialize;

/// Interval `[lo, hi]` of the independent variable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub lo: Real,
    pub hi: Real,
}

impl Domain {
    pub fn new(lo: Real, hi: Real) -> Self {
        Self { lo, hi }
    }
    pub fn width(&self) -> Real {
        self.hi - self.lo
    }
    /// Uniform draw from `[lo, hi)`.
    pub fn draw<R: Rng>(&self, rng: &mut R) -> Real {
        self.lo + rng.random::<Real>() * self.width()
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self::new(pwl_core::MIN_X, pwl_core::MAX_X)
    }
}
