//! Classifier layer for the heart risk service.
//!
//! This crate provides:
//! - the `Classifier` trait consumed by the domain layer
//! - a JSON model artifact format with logistic regression and random
//!   forest evaluators
//! - a fixed-output classifier for tests and local runs

pub mod artifact;
pub mod classifier;
pub mod error;
pub mod fixed;
pub mod forest;
pub mod logistic;

pub use artifact::{ModelArtifact, load};
pub use classifier::{Classifier, POSITIVE_CLASS};
pub use common::{FEATURE_COUNT, FEATURE_NAMES, FeatureVector};
pub use error::{ModelError, Result};
pub use fixed::FixedClassifier;
pub use forest::{DecisionTree, RandomForest, TreeNode};
pub use logistic::{LogisticRegression, StandardScaler};
