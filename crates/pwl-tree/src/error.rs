use crate::FeatureKey;
use thiserror::Error;

/// Structural failures raised while building or evaluating trees.
///
/// Every variant signals a defect in how a model was declared rather than
/// bad runtime data, so callers are not expected to recover from them.
/// Undefined numeric results are not errors; they flow through as NaN.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TreeError {
    #[error("feature {0} is absent from the snapshot")]
    MissingFeature(FeatureKey),

    #[error("invalid sample set: {0}")]
    InvalidSampleSet(String),

    #[error("feature {0} holds a label where a number is required")]
    NotNumeric(FeatureKey),

    #[error("expected a {0} outcome")]
    UnexpectedOutcome(&'static str),

    #[error("malformed tree: {0}")]
    MalformedTree(String),
}

/// Result type for tree operations.
pub type Result<T> = std::result::Result<T, TreeError>;
