//! Types shared between the classifier and the domain layer.

pub mod types;

pub use types::{FEATURE_COUNT, FEATURE_NAMES, FeatureVector};
