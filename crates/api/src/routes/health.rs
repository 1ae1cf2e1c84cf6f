//! Liveness and health endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use model::Classifier;
use serde::Serialize;

use super::predict::AppState;

/// Plain-text liveness message served at `/`.
pub const LIVENESS_MESSAGE: &str = "Heart Risk Prediction API is running ❤️";

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub model: &'static str,
}

/// GET / — plain-text liveness string.
pub async fn liveness() -> &'static str {
    LIVENESS_MESSAGE
}

/// GET /health — returns service health and the loaded model family.
pub async fn check<M: Classifier + 'static>(
    State(state): State<Arc<AppState<M>>>,
) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        model: state.predictor.model().kind(),
    })
}
