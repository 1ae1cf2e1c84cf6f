//! Risk prediction service.

use std::time::Instant;

use model::{Classifier, POSITIVE_CLASS};

use crate::error::PredictionError;
use crate::patient::PredictionRequest;
use crate::prediction::PredictionResult;

/// Service turning validated requests into predictions.
///
/// Owns the classifier, which is loaded once and never mutated; the service
/// can be shared across threads behind an `Arc`.
pub struct RiskPredictor<M: Classifier> {
    model: M,
}

impl<M: Classifier> RiskPredictor<M> {
    /// Creates a predictor around a loaded classifier.
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// Returns a reference to the underlying classifier.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Scores a validated request.
    #[tracing::instrument(skip(self, request), fields(model = self.model.kind()))]
    pub fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult, PredictionError> {
        let features = request.features();
        tracing::debug!(?features, "feature vector assembled");

        let label = self.model.predict(&features)?;
        if label > 1 {
            return Err(PredictionError::UnexpectedLabel(label));
        }

        let probability = self.model.predict_proba(&features)?[POSITIVE_CLASS];
        if !(0.0..=1.0).contains(&probability) {
            return Err(PredictionError::UnexpectedProbability(probability));
        }

        Ok(PredictionResult::new(label, probability, request.bmi()))
    }

    /// Validates a raw JSON body and scores it, recording metrics for the outcome.
    #[tracing::instrument(skip_all, fields(body_len = body.len()))]
    pub fn predict_json(&self, body: &[u8]) -> Result<PredictionResult, PredictionError> {
        let start = Instant::now();
        let result = PredictionRequest::from_slice(body).and_then(|req| self.predict(&req));

        let outcome = match &result {
            Ok(prediction) => {
                if prediction.is_at_risk() {
                    metrics::counter!("heart_risk_positive_total").increment(1);
                }
                tracing::info!(
                    heart_risk = prediction.heart_risk,
                    risk_probability = prediction.risk_probability,
                    bmi = prediction.bmi,
                    "prediction completed"
                );
                "success"
            }
            Err(err) => err.outcome(),
        };

        metrics::counter!("predictions_total", "outcome" => outcome).increment(1);
        metrics::histogram!("prediction_duration_seconds").record(start.elapsed().as_secs_f64());

        result
    }
}
