//! Model artifact loading.
//!
//! Artifacts are JSON documents tagged by `kind`:
//!
//! ```text
//! { "kind": "logistic_regression", "feature_names": [...],
//!   "coefficients": [...], "intercept": 0.0, "scaler": {...}, "threshold": 0.5 }
//! { "kind": "random_forest", "feature_names": [...], "trees": [{ "nodes": [...] }] }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    Classifier, FEATURE_NAMES, FeatureVector, LogisticRegression, ModelError, RandomForest, Result,
};

/// A validated, ready-to-evaluate classifier.
///
/// Each variant validates its parameters while deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    LogisticRegression(LogisticRegression),
    RandomForest(RandomForest),
}

#[derive(Deserialize)]
struct ArtifactFile {
    feature_names: Vec<String>,
    #[serde(flatten)]
    model: ModelArtifact,
}

impl ModelArtifact {
    /// Parses and validates an artifact from its JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: ArtifactFile = serde_json::from_str(json)?;

        if file.feature_names != FEATURE_NAMES {
            return Err(ModelError::FeatureOrder {
                expected: FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
                found: file.feature_names,
            });
        }

        Ok(file.model)
    }

    fn inner(&self) -> &dyn Classifier {
        match self {
            ModelArtifact::LogisticRegression(m) => m,
            ModelArtifact::RandomForest(m) => m,
        }
    }
}

/// Reads and validates the artifact at `path`.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load(path: impl AsRef<Path>) -> Result<ModelArtifact> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let artifact = ModelArtifact::from_json(&json)?;
    tracing::info!(kind = artifact.kind(), "model artifact loaded");
    Ok(artifact)
}

impl Classifier for ModelArtifact {
    fn kind(&self) -> &'static str {
        self.inner().kind()
    }

    fn predict(&self, features: &FeatureVector) -> Result<u8> {
        self.inner().predict(features)
    }

    fn predict_proba(&self, features: &FeatureVector) -> Result<[f64; 2]> {
        self.inner().predict_proba(features)
    }
}
