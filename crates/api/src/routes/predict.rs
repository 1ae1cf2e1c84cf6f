//! Prediction endpoint.

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use domain::{PredictionResult, RiskPredictor};
use model::Classifier;

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<M: Classifier> {
    pub predictor: RiskPredictor<M>,
}

impl<M: Classifier> AppState<M> {
    /// Wraps a loaded classifier.
    pub fn new(model: M) -> Self {
        Self {
            predictor: RiskPredictor::new(model),
        }
    }
}

/// POST /predict — score a patient described in a JSON body.
///
/// The body is taken as raw bytes so that malformed JSON is reported through
/// the same error mapping as every other failure.
#[tracing::instrument(skip(state, body))]
pub async fn predict<M: Classifier + 'static>(
    State(state): State<Arc<AppState<M>>>,
    body: Bytes,
) -> Result<Json<PredictionResult>, ApiError> {
    let result = state.predictor.predict_json(&body)?;
    Ok(Json(result))
}
