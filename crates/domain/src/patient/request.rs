//! Request validation.
//!
//! The body is validated by hand rather than through a derived
//! `Deserialize` so that each failure lands in the right category: a missing
//! key or unknown category is the caller's fault, a value that cannot be
//! read as a number is not. Keys are checked in a fixed order and the first
//! failure wins.

use serde::Serialize;
use serde_json::{Map, Value};

use super::categories::{Category, Gender, Level, YesNo};
use crate::error::PredictionError;

/// Every key a request must carry, in validation order.
pub const REQUIRED_FIELDS: [&str; 11] = [
    "age",
    "gender",
    "height",
    "weight",
    "ap_hi",
    "ap_lo",
    "cholesterol",
    "gluc",
    "smoke",
    "alco",
    "active",
];

/// A validated prediction request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PredictionRequest {
    /// Age in years.
    pub age: f64,
    pub gender: Gender,
    /// Height in centimeters.
    pub height: f64,
    /// Weight in kilograms.
    pub weight: f64,
    /// Systolic blood pressure.
    pub ap_hi: f64,
    /// Diastolic blood pressure.
    pub ap_lo: f64,
    pub cholesterol: Level,
    pub gluc: Level,
    pub smoke: YesNo,
    pub alco: YesNo,
    pub active: YesNo,
}

impl PredictionRequest {
    /// Validates a raw request body.
    pub fn from_slice(body: &[u8]) -> Result<Self, PredictionError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(PredictionError::EmptyBody);
        }
        let value: Value = serde_json::from_slice(body)?;
        Self::from_value(&value)
    }

    /// Validates an already-parsed JSON value.
    pub fn from_value(value: &Value) -> Result<Self, PredictionError> {
        match value {
            Value::Object(map) => Self::from_map(map),
            other => Err(PredictionError::NotAnObject(json_type(other))),
        }
    }

    /// Validates a JSON object.
    pub fn from_map(map: &Map<String, Value>) -> Result<Self, PredictionError> {
        let request = Self {
            age: number(map, "age")?,
            gender: category(map, "gender")?,
            height: number(map, "height")?,
            weight: number(map, "weight")?,
            ap_hi: number(map, "ap_hi")?,
            ap_lo: number(map, "ap_lo")?,
            cholesterol: category(map, "cholesterol")?,
            gluc: category(map, "gluc")?,
            smoke: category(map, "smoke")?,
            alco: category(map, "alco")?,
            active: category(map, "active")?,
        };

        if let Some(unknown) = map.keys().find(|k| !REQUIRED_FIELDS.contains(&k.as_str())) {
            return Err(PredictionError::invalid_key(unknown));
        }

        // BMI divides by height; both measurements must be usable.
        for (key, value) in [("height", request.height), ("weight", request.weight)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(PredictionError::invalid_key(key));
            }
        }

        Ok(request)
    }
}

fn field<'a>(map: &'a Map<String, Value>, key: &str) -> Result<&'a Value, PredictionError> {
    map.get(key)
        .ok_or_else(|| PredictionError::invalid_key(key))
}

/// Reads a JSON number, a string holding one, or a boolean as 0/1.
fn number(map: &Map<String, Value>, key: &'static str) -> Result<f64, PredictionError> {
    let value = field(map, key)?;
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(f64::from(u8::from(*b))),
        _ => None,
    };

    parsed.ok_or_else(|| PredictionError::Conversion {
        field: key,
        value: value.to_string(),
    })
}

/// Looks a label up in the category table.
///
/// Unknown scalars are reported by value (`'Other'`, `2`, `None`); arrays and
/// objects cannot be table keys at all and are a server fault.
fn category<C: Category>(
    map: &Map<String, Value>,
    key: &'static str,
) -> Result<C, PredictionError> {
    let unknown = PredictionError::InvalidInput;

    match field(map, key)? {
        Value::String(label) => C::from_label(label).ok_or_else(|| unknown(format!("'{label}'"))),
        Value::Number(n) => Err(unknown(n.to_string())),
        Value::Bool(true) => Err(unknown("True".to_string())),
        Value::Bool(false) => Err(unknown("False".to_string())),
        Value::Null => Err(unknown("None".to_string())),
        Value::Array(_) => Err(PredictionError::Unhashable { field: key, kind: "list" }),
        Value::Object(_) => Err(PredictionError::Unhashable { field: key, kind: "dict" }),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
