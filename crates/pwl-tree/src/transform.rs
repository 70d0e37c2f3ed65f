use crate::*;
use pwl_core::Real;
use serde::Deserialize;
use serde::Serialize;
use std::fmt::Display;
use std::fmt::Formatter;

/// Leaf payload computing a new feature value from a [`Snapshot`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Transform {
    /// Always yields the value.
    ConstantAssign(Value),
    /// Yields the current value of another feature.
    CopyAssign(FeatureKey),
    /// Reads `source` and interpolates between the two samples bracketing it.
    Interpolate {
        source: FeatureKey,
        lower: Sample,
        upper: Sample,
    },
}

impl Transform {
    pub fn apply(&self, snapshot: &Snapshot) -> Result<Value> {
        match self {
            Self::ConstantAssign(value) => Ok(value.clone()),
            Self::CopyAssign(key) => snapshot.get(key).cloned(),
            Self::Interpolate {
                source,
                lower,
                upper,
            } => Ok(Value::Number(interpolate(
                snapshot.number(source)?,
                lower,
                upper,
            ))),
        }
    }
}

/// Linear interpolation between two bracketing samples.
///
/// Queries at or beyond either sample clamp to that sample's `y`, so anchor
/// points are reproduced exactly and nothing is extrapolated. An undefined
/// `y` on either side makes the result undefined.
pub fn interpolate(x: Real, lower: &Sample, upper: &Sample) -> Real {
    if lower.y.is_nan() || upper.y.is_nan() {
        Real::NAN
    } else if x <= lower.x {
        lower.y
    } else if x >= upper.x {
        upper.y
    } else {
        lower.y + (upper.y - lower.y) * (x - lower.x) / (upper.x - lower.x)
    }
}

impl Display for Transform {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ConstantAssign(value) => write!(f, "{}", value),
            Self::CopyAssign(key) => write!(f, "{}", key),
            Self::Interpolate {
                source,
                lower,
                upper,
            } => write!(
                f,
                "lerp {} over ({}, {}) .. ({}, {})",
                source, lower.x, lower.y, upper.x, upper.y
            ),
        }
    }
}
