//! Logistic regression evaluator.

use serde::{Deserialize, Serialize};

use crate::classifier::ensure_finite;
use crate::{Classifier, FEATURE_COUNT, FeatureVector, ModelError, Result};

fn default_threshold() -> f64 {
    0.5
}

#[derive(Deserialize)]
struct ScalerParams {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

/// Per-feature standardisation applied before the linear term.
///
/// Only constructed through [`StandardScaler::new`] or validated
/// deserialization, so both arrays always hold one finite entry per feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ScalerParams")]
pub struct StandardScaler {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl StandardScaler {
    /// Creates a scaler; every scale must be finite and non-zero.
    pub fn new(mean: [f64; FEATURE_COUNT], scale: [f64; FEATURE_COUNT]) -> Result<Self> {
        Self::try_from(ScalerParams {
            mean: mean.to_vec(),
            scale: scale.to_vec(),
        })
    }

    pub fn mean(&self) -> &[f64] {
        &self.mean
    }

    pub fn scale(&self) -> &[f64] {
        &self.scale
    }

    fn transform(&self, index: usize, value: f64) -> f64 {
        (value - self.mean[index]) / self.scale[index]
    }
}

impl TryFrom<ScalerParams> for StandardScaler {
    type Error = ModelError;

    fn try_from(params: ScalerParams) -> Result<Self> {
        check_len("scaler.mean", &params.mean)?;
        check_len("scaler.scale", &params.scale)?;
        check_finite("scaler.mean", &params.mean)?;
        check_finite("scaler.scale", &params.scale)?;

        if let Some(i) = params.scale.iter().position(|s| *s == 0.0) {
            return Err(ModelError::InvalidParameter {
                field: format!("scaler.scale[{i}]"),
                reason: "scale must be non-zero".to_string(),
            });
        }

        Ok(Self {
            mean: params.mean,
            scale: params.scale,
        })
    }
}

#[derive(Deserialize)]
struct LogisticParams {
    coefficients: Vec<f64>,
    intercept: f64,
    #[serde(default)]
    scaler: Option<StandardScaler>,
    #[serde(default = "default_threshold")]
    threshold: f64,
}

/// Binary logistic regression: `p1 = sigmoid(intercept + w · x)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LogisticParams")]
pub struct LogisticRegression {
    coefficients: Vec<f64>,
    intercept: f64,
    scaler: Option<StandardScaler>,
    /// Label is 1 when `p1` is strictly above this value.
    threshold: f64,
}

impl LogisticRegression {
    /// Creates an unscaled model with the default 0.5 threshold.
    pub fn new(coefficients: [f64; FEATURE_COUNT], intercept: f64) -> Result<Self> {
        Self::try_from(LogisticParams {
            coefficients: coefficients.to_vec(),
            intercept,
            scaler: None,
            threshold: default_threshold(),
        })
    }

    /// Attaches a standard scaler.
    pub fn with_scaler(mut self, scaler: StandardScaler) -> Self {
        self.scaler = Some(scaler);
        self
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn scaler(&self) -> Option<&StandardScaler> {
        self.scaler.as_ref()
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Raw linear score before the sigmoid.
    pub fn decision_function(&self, features: &FeatureVector) -> Result<f64> {
        ensure_finite(features)?;

        let score = features
            .as_slice()
            .iter()
            .enumerate()
            .map(|(i, x)| {
                let x = match &self.scaler {
                    Some(scaler) => scaler.transform(i, *x),
                    None => *x,
                };
                self.coefficients[i] * x
            })
            .sum::<f64>();

        Ok(self.intercept + score)
    }
}

impl TryFrom<LogisticParams> for LogisticRegression {
    type Error = ModelError;

    fn try_from(params: LogisticParams) -> Result<Self> {
        check_len("coefficients", &params.coefficients)?;
        check_finite("coefficients", &params.coefficients)?;

        if !params.intercept.is_finite() {
            return Err(ModelError::InvalidParameter {
                field: "intercept".to_string(),
                reason: "must be finite".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&params.threshold) {
            return Err(ModelError::InvalidParameter {
                field: "threshold".to_string(),
                reason: format!("{} is outside [0, 1]", params.threshold),
            });
        }

        Ok(Self {
            coefficients: params.coefficients,
            intercept: params.intercept,
            scaler: params.scaler,
            threshold: params.threshold,
        })
    }
}

impl Classifier for LogisticRegression {
    fn kind(&self) -> &'static str {
        "logistic_regression"
    }

    fn predict(&self, features: &FeatureVector) -> Result<u8> {
        let [_, p1] = self.predict_proba(features)?;
        Ok(u8::from(p1 > self.threshold))
    }

    fn predict_proba(&self, features: &FeatureVector) -> Result<[f64; 2]> {
        let p1 = sigmoid(self.decision_function(features)?);
        Ok([1.0 - p1, p1])
    }
}

/// Numerically stable logistic function.
pub fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

fn check_len(field: &'static str, values: &[f64]) -> Result<()> {
    if values.len() != FEATURE_COUNT {
        return Err(ModelError::Shape {
            field,
            expected: FEATURE_COUNT,
            found: values.len(),
        });
    }
    Ok(())
}

fn check_finite(field: &str, values: &[f64]) -> Result<()> {
    if let Some(i) = values.iter().position(|v| !v.is_finite()) {
        return Err(ModelError::InvalidParameter {
            field: format!("{field}[{i}]"),
            reason: "must be finite".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features(values: [f64; FEATURE_COUNT]) -> FeatureVector {
        FeatureVector::new(values)
    }

    #[test]
    fn sigmoid_known_values() {
        assert_eq!(sigmoid(0.0), 0.5);
        assert!((sigmoid(2.0) - 0.880_797_077_977_882_3).abs() < 1e-12);
        assert!((sigmoid(-2.0) - 0.119_202_922_022_117_6).abs() < 1e-12);
        assert!(sigmoid(-800.0) >= 0.0);
        assert!(sigmoid(800.0) <= 1.0);
    }

    #[test]
    fn zero_weights_give_even_odds() {
        let model = LogisticRegression::new([0.0; FEATURE_COUNT], 0.0).unwrap();
        let proba = model.predict_proba(&features([1.0; FEATURE_COUNT])).unwrap();
        assert_eq!(proba, [0.5, 0.5]);
        // Ties at the threshold fall to class 0.
        assert_eq!(model.predict(&features([1.0; FEATURE_COUNT])).unwrap(), 0);
    }

    #[test]
    fn single_weight_drives_label() {
        let mut coefficients = [0.0; FEATURE_COUNT];
        coefficients[2] = 0.1; // ap_hi
        let model = LogisticRegression::new(coefficients, -12.0).unwrap();

        let mut x = [0.0; FEATURE_COUNT];
        x[2] = 140.0;
        let high = features(x);
        assert!((model.decision_function(&high).unwrap() - 2.0).abs() < 1e-9);
        assert_eq!(model.predict(&high).unwrap(), 1);

        x[2] = 100.0;
        let low = features(x);
        assert_eq!(model.predict(&low).unwrap(), 0);
        let [p0, p1] = model.predict_proba(&low).unwrap();
        assert!((p0 + p1 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn scaler_is_applied_per_feature() {
        let mut coefficients = [0.0; FEATURE_COUNT];
        coefficients[0] = 1.0;
        let mut mean = [0.0; FEATURE_COUNT];
        mean[0] = 50.0;
        let mut scale = [1.0; FEATURE_COUNT];
        scale[0] = 10.0;
        let model = LogisticRegression::new(coefficients, 0.0)
            .unwrap()
            .with_scaler(StandardScaler::new(mean, scale).unwrap());

        let mut x = [0.0; FEATURE_COUNT];
        x[0] = 70.0;
        assert!((model.decision_function(&features(x)).unwrap() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn non_finite_input_is_rejected() {
        let model = LogisticRegression::new([0.1; FEATURE_COUNT], 0.0).unwrap();
        let mut x = [1.0; FEATURE_COUNT];
        x[0] = f64::NAN;
        let err = model.predict(&features(x)).unwrap_err();
        assert!(matches!(err, ModelError::NonFiniteInput { feature: "age" }));
    }

    #[test]
    fn constructors_reject_bad_parameters() {
        assert!(matches!(
            LogisticRegression::new([0.0; FEATURE_COUNT], f64::NAN),
            Err(ModelError::InvalidParameter { .. })
        ));

        let err = StandardScaler::new([0.0; FEATURE_COUNT], [0.0; FEATURE_COUNT]).unwrap_err();
        assert!(err.to_string().contains("scaler.scale[0]"));
    }

    #[test]
    fn deserialization_rejects_short_coefficients() {
        let err = serde_json::from_str::<LogisticRegression>(
            r#"{"coefficients":[1.0,2.0],"intercept":0.0}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("coefficients"));
    }

    #[test]
    fn deserialization_rejects_short_scaler() {
        let json = r#"{"coefficients":[0,0,0,0,0,0,0,0,0,0],"intercept":0.0,
            "scaler":{"mean":[0.0],"scale":[1.0]}}"#;
        assert!(serde_json::from_str::<LogisticRegression>(json).is_err());
    }

    #[test]
    fn deserialization_applies_defaults() {
        let model: LogisticRegression =
            serde_json::from_str(r#"{"coefficients":[0,0,0,0,0,0,0,0,0,0],"intercept":0.5}"#)
                .unwrap();
        assert_eq!(model.threshold(), 0.5);
        assert!(model.scaler().is_none());
        assert_eq!(model.coefficients().len(), FEATURE_COUNT);
    }
}
