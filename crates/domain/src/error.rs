//! Prediction error types.

use model::ModelError;
use thiserror::Error;

/// Errors that can occur while turning a request into a prediction.
///
/// Variants split into two categories: client faults the caller can fix by
/// changing the request, and everything else. See [`PredictionError::is_client_error`].
#[derive(Debug, Error)]
pub enum PredictionError {
    /// A required key is missing, a category is not recognised, an unknown
    /// key was sent, or a body measurement is out of range. Holds the
    /// offending key or value as shown to the caller.
    #[error("Invalid input value: {0}")]
    InvalidInput(String),

    /// A category field holds an array or object, which cannot be looked up.
    #[error("unhashable type: '{kind}' in {field}")]
    Unhashable {
        field: &'static str,
        kind: &'static str,
    },

    /// A numeric field could not be read as a float.
    #[error("could not convert {field} to float: {value}")]
    Conversion { field: &'static str, value: String },

    /// The request body was empty.
    #[error("request body is empty, expected a JSON object")]
    EmptyBody,

    /// The request body is not valid JSON.
    #[error("malformed JSON body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    /// The request body is valid JSON but not an object.
    #[error("request body must be a JSON object, found {0}")]
    NotAnObject(&'static str),

    /// The classifier failed.
    #[error("model error: {0}")]
    Model(#[from] ModelError),

    /// The classifier returned a label outside {0, 1}.
    #[error("model returned unexpected label {0}")]
    UnexpectedLabel(u8),

    /// The classifier returned a probability outside [0, 1].
    #[error("model returned invalid probability {0}")]
    UnexpectedProbability(f64),
}

impl PredictionError {
    /// Invalid input naming a key, rendered quoted: `'age'`.
    pub fn invalid_key(key: &str) -> Self {
        PredictionError::InvalidInput(format!("'{key}'"))
    }

    /// Returns true if the caller can correct the request.
    pub fn is_client_error(&self) -> bool {
        matches!(self, PredictionError::InvalidInput(_))
    }

    /// Short label used for metrics and logs.
    pub fn outcome(&self) -> &'static str {
        if self.is_client_error() {
            "invalid_input"
        } else {
            "internal_error"
        }
    }
}
