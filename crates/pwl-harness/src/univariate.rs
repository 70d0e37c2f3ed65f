use pwl_core::Real;
use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

/// Non-linear functions used to exercise the approximation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Univariate {
    /// Undefined for negative inputs.
    Root,
    /// Undefined for negative inputs, infinite at zero.
    Log,
    Cube,
}

impl Univariate {
    pub const fn all() -> [Self; 3] {
        [Self::Root, Self::Log, Self::Cube]
    }
    pub fn call(&self, x: Real) -> Real {
        match self {
            Self::Root => x.sqrt(),
            Self::Log => x.ln(),
            Self::Cube => x.powi(3),
        }
    }
    /// How the function reads when applied to `x`.
    pub fn symbol(&self, x: Real) -> String {
        match self {
            Self::Root => format!("√({:.3})", x),
            Self::Log => format!("log({:.3})", x),
            Self::Cube => format!("{:.3}^3", x),
        }
    }
}

impl Display for Univariate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Root => write!(f, "root"),
            Self::Log => write!(f, "log"),
            Self::Cube => write!(f, "cube"),
        }
    }
}

impl FromStr for Univariate {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "root" | "sqrt" => Ok(Self::Root),
            "log" | "ln" => Ok(Self::Log),
            "cube" => Ok(Self::Cube),
            _ => Err(anyhow::anyhow!("unknown function: {}", s)),
        }
    }
}
