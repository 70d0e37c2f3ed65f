use pwl_core::Arbitrary;
use pwl_core::Real;
use serde::Deserialize;
use serde::Serialize;
use std::fmt::Display;
use std::fmt::Formatter;

/// A feature value: a real number, or a label drawn from the
/// feature's finite domain.
///
/// Integer-valued features (room numbers, counts) are carried as numbers.
/// A NaN number is an undefined result and compares unequal to everything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Number(Real),
    Label(String),
}

impl Value {
    pub fn number(&self) -> Option<Real> {
        match self {
            Self::Number(x) => Some(*x),
            Self::Label(_) => None,
        }
    }
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Label(s) => Some(s),
        }
    }
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Number(x) if x.is_nan())
    }
}

impl From<Real> for Value {
    fn from(x: Real) -> Self {
        Self::Number(x)
    }
}
impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Number(n as Real)
    }
}
impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Label(s.to_string())
    }
}
impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Label(s)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(x) => write!(f, "{}", x),
            Self::Label(s) => write!(f, "{}", s),
        }
    }
}

/// Uniform numbers over the default sampled domain.
impl Arbitrary for Value {
    fn random() -> Self {
        use rand::Rng;
        Self::Number(rand::rng().random_range(pwl_core::MIN_X..pwl_core::MAX_X))
    }
}
