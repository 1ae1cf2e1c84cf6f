//! Domain layer for the heart risk service.
//!
//! This crate provides:
//! - category tables mapping client labels to model codes
//! - request validation with client/server error categories
//! - BMI derivation and feature vector assembly
//! - the `RiskPredictor` service wrapping a loaded classifier

pub mod error;
pub mod patient;
pub mod prediction;
pub mod service;

pub use error::PredictionError;
pub use patient::{
    Category, Gender, Level, PredictionRequest, REQUIRED_FIELDS, YesNo, bmi, round_to,
};
pub use prediction::PredictionResult;
pub use service::RiskPredictor;
