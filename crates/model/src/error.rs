use thiserror::Error;

/// Errors raised while loading or evaluating a classifier.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The artifact file could not be read.
    #[error("Failed to read model artifact {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The artifact is not valid JSON or does not match the schema.
    #[error("Invalid model artifact: {0}")]
    Parse(#[from] serde_json::Error),

    /// The artifact declares features in a different order than expected.
    #[error("Feature order mismatch: expected {expected:?}, found {found:?}")]
    FeatureOrder {
        expected: Vec<String>,
        found: Vec<String>,
    },

    /// A parameter array has the wrong length.
    #[error("Shape mismatch for {field}: expected {expected} values, found {found}")]
    Shape {
        field: &'static str,
        expected: usize,
        found: usize,
    },

    /// A parameter is NaN, infinite or otherwise unusable.
    #[error("Invalid parameter {field}: {reason}")]
    InvalidParameter { field: String, reason: String },

    /// A decision tree is structurally broken.
    #[error("Invalid tree {tree}: {reason}")]
    InvalidTree { tree: usize, reason: String },

    /// The input vector contains NaN or infinity.
    #[error("Input contains NaN or infinity in feature '{feature}'")]
    NonFiniteInput { feature: &'static str },
}

/// Result type for classifier operations.
pub type Result<T> = std::result::Result<T, ModelError>;
