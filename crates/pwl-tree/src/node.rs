use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Position of a node inside a [`Tree`] arena.
pub type NodeIndex = usize;

/// Payload at the bottom of a tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Leaf {
    /// Fixed answer, used by legality guards.
    Result(bool),
    /// New feature value, used by dynamics and reward rules.
    Assign(Transform),
}

/// Arena node. Children are referenced by index into the owning tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    Branch {
        predicate: Predicate,
        yes: NodeIndex,
        no: NodeIndex,
    },
    Leaf(Leaf),
}

impl Node {
    /// Relocates child indices when this node is moved `offset`
    /// slots further into a larger arena.
    pub(crate) fn shift(self, offset: NodeIndex) -> Self {
        match self {
            Self::Branch { predicate, yes, no } => Self::Branch {
                predicate,
                yes: yes + offset,
                no: no + offset,
            },
            leaf => leaf,
        }
    }
}

/// What a tree evaluates to.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Bool(bool),
    Value(Value),
}

impl Outcome {
    pub fn truth(self) -> Result<bool> {
        match self {
            Self::Bool(b) => Ok(b),
            Self::Value(_) => Err(TreeError::UnexpectedOutcome("boolean")),
        }
    }
    pub fn value(self) -> Result<Value> {
        match self {
            Self::Value(v) => Ok(v),
            Self::Bool(_) => Err(TreeError::UnexpectedOutcome("value")),
        }
    }
}
