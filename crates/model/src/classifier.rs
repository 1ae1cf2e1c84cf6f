use crate::{FeatureVector, Result};

/// Index of the "elevated risk" class in `predict_proba` output.
pub const POSITIVE_CLASS: usize = 1;

/// Binary classifier over a [`FeatureVector`].
///
/// Implementations are loaded once and shared read-only across requests,
/// so every method takes `&self` and the trait requires `Send + Sync`.
pub trait Classifier: Send + Sync {
    /// Short identifier of the model family, used in health output and logs.
    fn kind(&self) -> &'static str;

    /// Returns the predicted class label (0 or 1).
    fn predict(&self, features: &FeatureVector) -> Result<u8>;

    /// Returns `[p_class0, p_class1]`.
    fn predict_proba(&self, features: &FeatureVector) -> Result<[f64; 2]>;
}

/// Rejects vectors a trained estimator cannot score.
pub(crate) fn ensure_finite(features: &FeatureVector) -> Result<()> {
    match features.first_non_finite() {
        Some((feature, _)) => Err(crate::ModelError::NonFiniteInput { feature }),
        None => Ok(()),
    }
}
