use crate::*;
use pwl_core::Real;
use serde::Deserialize;
use serde::Serialize;
use std::fmt::Display;
use std::fmt::Formatter;

/// Boolean test over one or two features of a [`Snapshot`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Predicate {
    /// True iff the feature's value is one of the literals.
    ValueEquals(FeatureKey, Vec<Value>),
    /// True iff both features hold equal values.
    FeatureEquals(FeatureKey, FeatureKey),
    /// True iff the numeric feature lies strictly below the breakpoint.
    Threshold(FeatureKey, Real),
}

impl Predicate {
    pub fn equals<V>(key: FeatureKey, literals: impl IntoIterator<Item = V>) -> Self
    where
        V: Into<Value>,
    {
        Self::ValueEquals(key, literals.into_iter().map(V::into).collect())
    }
    pub fn same(a: FeatureKey, b: FeatureKey) -> Self {
        Self::FeatureEquals(a, b)
    }
    pub fn below(key: FeatureKey, breakpoint: Real) -> Self {
        Self::Threshold(key, breakpoint)
    }

    /// Fails when a referenced feature is missing, or when a
    /// threshold reads a label.
    pub fn test(&self, snapshot: &Snapshot) -> Result<bool> {
        match self {
            Self::ValueEquals(key, literals) => {
                let value = snapshot.get(key)?;
                Ok(literals.iter().any(|literal| literal == value))
            }
            Self::FeatureEquals(a, b) => Ok(snapshot.get(a)? == snapshot.get(b)?),
            Self::Threshold(key, breakpoint) => Ok(snapshot.number(key)? < *breakpoint),
        }
    }
}

impl Display for Predicate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ValueEquals(key, literals) if literals.len() == 1 => {
                write!(f, "{} = {}", key, literals[0])
            }
            Self::ValueEquals(key, literals) => write!(
                f,
                "{} ∈ {{{}}}",
                key,
                literals
                    .iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
            Self::FeatureEquals(a, b) => write!(f, "{} = {}", a, b),
            Self::Threshold(key, breakpoint) => write!(f, "{} < {}", key, breakpoint),
        }
    }
}
