//! HTTP API server for heart risk prediction.
//!
//! Provides the prediction endpoint plus liveness, health and Prometheus
//! metrics routes, with structured logging (tracing) and permissive CORS.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use metrics_exporter_prometheus::PrometheusHandle;
use model::Classifier;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use routes::predict::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<M: Classifier + 'static>(
    state: Arc<AppState<M>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/", get(routes::health::liveness))
        .route("/health", get(routes::health::check::<M>))
        .route("/predict", post(routes::predict::predict::<M>))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates application state around a loaded classifier.
pub fn create_state<M: Classifier>(model: M) -> Arc<AppState<M>> {
    Arc::new(AppState::new(model))
}
