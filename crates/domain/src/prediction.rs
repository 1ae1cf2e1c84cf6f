//! Prediction response.

use serde::{Deserialize, Serialize};

use crate::patient::round_to;

/// Outcome of a single prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Predicted class: 1 for elevated risk, 0 otherwise.
    pub heart_risk: u8,
    /// Probability of class 1, rounded to 3 places.
    pub risk_probability: f64,
    /// Body mass index, rounded to 2 places.
    pub bmi: f64,
}

impl PredictionResult {
    /// Builds a result, rounding the probability to 3 places.
    pub fn new(heart_risk: u8, positive_probability: f64, bmi: f64) -> Self {
        Self {
            heart_risk,
            risk_probability: round_to(positive_probability, 3),
            bmi,
        }
    }

    /// Returns true if the model predicted elevated risk.
    pub fn is_at_risk(&self) -> bool {
        self.heart_risk == 1
    }
}
