use std::sync::Mutex;

use crate::{Classifier, FeatureVector, Result};

/// Classifier that always returns the same label and probability.
///
/// Records every vector it is asked to score, so callers can check the
/// exact features a request produced.
#[derive(Debug, Default)]
pub struct FixedClassifier {
    label: u8,
    positive_probability: f64,
    seen: Mutex<Vec<FeatureVector>>,
}

impl FixedClassifier {
    /// Creates a classifier answering `label` with `P(class 1) = positive_probability`.
    pub fn new(label: u8, positive_probability: f64) -> Self {
        Self {
            label,
            positive_probability,
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Returns the vectors passed to `predict`, oldest first.
    pub fn seen(&self) -> Vec<FeatureVector> {
        self.seen
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Returns the most recent vector passed to `predict`.
    pub fn last_seen(&self) -> Option<FeatureVector> {
        self.seen().last().copied()
    }
}

impl Classifier for FixedClassifier {
    fn kind(&self) -> &'static str {
        "fixed"
    }

    fn predict(&self, features: &FeatureVector) -> Result<u8> {
        self.seen
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(*features);
        Ok(self.label)
    }

    fn predict_proba(&self, _features: &FeatureVector) -> Result<[f64; 2]> {
        Ok([1.0 - self.positive_probability, self.positive_probability])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_fixed_values_and_records_input() {
        let model = FixedClassifier::new(1, 0.8234);
        let x = FeatureVector::new([1.0; crate::FEATURE_COUNT]);

        assert_eq!(model.predict(&x).unwrap(), 1);
        let [p0, p1] = model.predict_proba(&x).unwrap();
        assert_eq!(p1, 0.8234);
        assert!((p0 - 0.1766).abs() < 1e-12);
        assert_eq!(model.last_seen(), Some(x));
        assert_eq!(model.seen().len(), 1);
    }
}
