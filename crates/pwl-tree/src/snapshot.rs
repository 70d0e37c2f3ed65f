use crate::*;
use pwl_core::Real;
use std::collections::BTreeMap;

/// Read-only view of every feature value at one instant.
///
/// Owned by the caller; evaluation borrows it for a single call and
/// never keeps a reference past that.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot(BTreeMap<FeatureKey, Value>);

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }
    /// Builder-style insertion, for assembling a snapshot before handing it off.
    pub fn with(mut self, key: FeatureKey, value: impl Into<Value>) -> Self {
        self.0.insert(key, value.into());
        self
    }
    pub fn get(&self, key: &FeatureKey) -> Result<&Value> {
        self.0
            .get(key)
            .ok_or_else(|| TreeError::MissingFeature(key.clone()))
    }
    pub fn number(&self, key: &FeatureKey) -> Result<Real> {
        self.get(key)?
            .number()
            .ok_or_else(|| TreeError::NotNumeric(key.clone()))
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(FeatureKey, Value)> for Snapshot {
    fn from_iter<I: IntoIterator<Item = (FeatureKey, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
