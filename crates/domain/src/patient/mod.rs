//! Patient input: categories, validation and feature encoding.

mod categories;
mod features;
mod request;

pub use categories::{Category, Gender, Level, YesNo};
pub use features::{bmi, round_to};
pub use request::{PredictionRequest, REQUIRED_FIELDS};
