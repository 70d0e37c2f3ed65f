use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// A value-producing tree bound to the feature it updates.
///
/// Applying an effect never writes anything: the caller receives the new
/// value and commits it to its own state store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Effect {
    target: FeatureKey,
    tree: Tree,
}

impl Effect {
    pub fn new(target: FeatureKey, tree: Tree) -> Self {
        Self { target, tree }
    }
    pub fn target(&self) -> &FeatureKey {
        &self.target
    }
    pub fn tree(&self) -> &Tree {
        &self.tree
    }
    pub fn apply(&self, snapshot: &Snapshot) -> Result<Value> {
        self.tree.evaluate(snapshot)?.value()
    }
}
