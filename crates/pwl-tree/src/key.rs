use serde::Deserialize;
use serde::Serialize;
use std::fmt::Display;
use std::fmt::Formatter;

/// Opaque name of one scalar state feature.
///
/// Keys owned by an entity follow the `"<entity>'s <feature>"` convention,
/// so the same feature name on two entities never collides.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FeatureKey(String);

impl FeatureKey {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
    /// Key of `feature` owned by `entity`.
    pub fn state(entity: &str, feature: &str) -> Self {
        Self(format!("{}'s {}", entity, feature))
    }
    /// Key holding the reward accumulated by `entity`.
    pub fn reward(entity: &str) -> Self {
        Self::state(entity, "__REWARD__")
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FeatureKey {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl Display for FeatureKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}
