//! Branching decision trees over named state features.
//!
//! Internal nodes test a [`Predicate`] against a read-only [`Snapshot`];
//! leaves either answer a boolean (legality, guards) or apply a
//! [`Transform`] that produces a new feature value (dynamics, reward).
//!
//! # Module Structure
//!
//! - `key` — Feature naming ([`FeatureKey`])
//! - `value` — Numeric and label feature values ([`Value`])
//! - `snapshot` — Immutable state view handed to evaluation
//! - `predicate` — Boolean tests over one or two features
//! - `transform` — Leaf payloads and the interpolation rule
//! - `node` — Arena nodes, leaves, and evaluation outcomes
//! - `tree` — Arena tree construction, routing, and evaluation
//! - `effect` — A tree bound to the feature it updates
//! - `sample` — Validated, strictly increasing sample sets
//! - `builder` — Median-split search trees over sampled functions
//! - `error` — Structural failures

mod builder;
mod effect;
mod error;
mod key;
mod node;
mod predicate;
mod sample;
mod snapshot;
mod transform;
mod tree;
mod value;

pub use builder::*;
pub use effect::*;
pub use error::*;
pub use key::*;
pub use node::*;
pub use predicate::*;
pub use sample::*;
pub use snapshot::*;
pub use transform::*;
pub use tree::*;
pub use value::*;
