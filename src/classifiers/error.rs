use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("feature index {index} is out of range for dimension {dimension}")]
    FeatureOutOfRange { index: usize, dimension: usize },

    #[error("feature {index} has a missing (NaN) value")]
    MissingValue { index: usize },

    #[error("instance has no label")]
    MissingLabel,

    #[error("label {0} is outside [0, 1]")]
    InvalidLabel(f64),

    #[error("model has not been trained")]
    NotTrained,

    #[error("node {node} does not route the instance to exactly one edge")]
    UnroutableInstance { node: usize },

    #[error("malformed tree: {0}")]
    MalformedTree(String),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
