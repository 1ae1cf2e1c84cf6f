use serde::{Deserialize, Serialize};

/// Number of features the classifier consumes.
pub const FEATURE_COUNT: usize = 10;

/// Column order the classifier was trained with.
///
/// The domain layer assembles vectors in this order and the model loader
/// refuses artifacts that declare a different one.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "age",
    "gender",
    "ap_hi",
    "ap_lo",
    "cholesterol",
    "gluc",
    "smoke",
    "alco",
    "active",
    "bmi",
];

/// Fixed-order numeric input for a single prediction.
///
/// Wraps a fixed-size array so a vector of the wrong length cannot be
/// handed to a classifier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    /// Creates a feature vector from values already in [`FEATURE_NAMES`] order.
    pub fn new(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    /// Returns the values as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Returns the value at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    /// Iterates over `(name, value)` pairs in model order.
    pub fn named(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        FEATURE_NAMES.iter().copied().zip(self.0.iter().copied())
    }

    /// Returns the first feature that is NaN or infinite.
    pub fn first_non_finite(&self) -> Option<(&'static str, f64)> {
        self.named().find(|(_, v)| !v.is_finite())
    }
}

impl From<[f64; FEATURE_COUNT]> for FeatureVector {
    fn from(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }
}

impl From<FeatureVector> for [f64; FEATURE_COUNT] {
    fn from(vector: FeatureVector) -> Self {
        vector.0
    }
}

impl std::ops::Index<usize> for FeatureVector {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FeatureVector {
        FeatureVector::new([50.0, 1.0, 120.0, 80.0, 1.0, 1.0, 0.0, 0.0, 1.0, 24.22])
    }

    #[test]
    fn named_pairs_follow_feature_order() {
        let names: Vec<&str> = sample().named().map(|(n, _)| n).collect();
        assert_eq!(names, FEATURE_NAMES);
        assert_eq!(sample().named().last(), Some(("bmi", 24.22)));
    }

    #[test]
    fn index_and_get_agree() {
        let v = sample();
        assert_eq!(v[2], 120.0);
        assert_eq!(v.get(2), Some(120.0));
        assert_eq!(v.get(FEATURE_COUNT), None);
    }

    #[test]
    fn first_non_finite_reports_name() {
        assert_eq!(sample().first_non_finite(), None);

        let mut values: [f64; FEATURE_COUNT] = sample().into();
        values[3] = f64::INFINITY;
        let v = FeatureVector::from(values);
        assert_eq!(v.first_non_finite(), Some(("ap_lo", f64::INFINITY)));
    }

    #[test]
    fn serializes_as_plain_array() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(json, "[50.0,1.0,120.0,80.0,1.0,1.0,0.0,0.0,1.0,24.22]");
    }
}
