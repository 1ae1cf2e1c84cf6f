//! BMI derivation and feature vector assembly.

use common::FeatureVector;

use super::categories::Category;
use super::request::PredictionRequest;

/// Rounds to `decimals` places.
///
/// Goes through exact decimal formatting so the stored binary value is
/// rounded once, with exact ties going to the even digit.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{value:.decimals$}").parse().unwrap_or(value)
}

/// Body mass index from centimeters and kilograms, rounded to 2 places.
pub fn bmi(height_cm: f64, weight_kg: f64) -> f64 {
    let height_m = height_cm / 100.0;
    round_to(weight_kg / (height_m * height_m), 2)
}

impl PredictionRequest {
    /// Rounded BMI for this patient.
    pub fn bmi(&self) -> f64 {
        bmi(self.height, self.weight)
    }

    /// Assembles the model input; the rounded BMI is the last feature.
    pub fn features(&self) -> FeatureVector {
        FeatureVector::new([
            self.age,
            f64::from(self.gender.code()),
            self.ap_hi,
            self.ap_lo,
            f64::from(self.cholesterol.code()),
            f64::from(self.gluc.code()),
            f64::from(self.smoke.code()),
            f64::from(self.alco.code()),
            f64::from(self.active.code()),
            self.bmi(),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patient::{Gender, Level, YesNo};

    fn patient() -> PredictionRequest {
        PredictionRequest {
            age: 50.0,
            gender: Gender::Male,
            height: 170.0,
            weight: 70.0,
            ap_hi: 120.0,
            ap_lo: 80.0,
            cholesterol: Level::Normal,
            gluc: Level::Normal,
            smoke: YesNo::No,
            alco: YesNo::No,
            active: YesNo::Yes,
        }
    }

    #[test]
    fn bmi_is_rounded_to_two_places() {
        assert_eq!(bmi(170.0, 70.0), 24.22);
        assert_eq!(bmi(180.0, 81.0), 25.0);
        assert_eq!(bmi(160.0, 95.5), 37.3);
    }

    #[test]
    fn bmi_ties_round_to_even() {
        // 48.4 / 1.76^2 is exactly 15.625 in binary.
        assert_eq!(bmi(176.0, 48.4), 15.62);
        assert_eq!(bmi(192.0, 57.6), 15.62);
        assert_eq!(bmi(120.0, 33.3), 23.12);
    }

    #[test]
    fn round_to_uses_stored_binary_value() {
        // 0.0045 is stored as 0.004499..., 7.675 as 7.67499...
        assert_eq!(round_to(0.0045, 3), 0.004);
        assert_eq!(round_to(7.675, 2), 7.67);
        assert_eq!(round_to(0.125, 2), 0.12);
        assert_eq!(round_to(0.375, 2), 0.38);
    }

    #[test]
    fn round_to_handles_places() {
        assert_eq!(round_to(0.82349, 3), 0.823);
        assert_eq!(round_to(0.8235, 2), 0.82);
        assert_eq!(round_to(0.9996, 3), 1.0);
        assert_eq!(round_to(0.0004, 3), 0.0);
    }

    #[test]
    fn features_follow_model_order() {
        let v = patient().features();
        assert_eq!(
            v,
            FeatureVector::new([50.0, 1.0, 120.0, 80.0, 1.0, 1.0, 0.0, 0.0, 1.0, 24.22])
        );
    }

    #[test]
    fn categorical_codes_land_in_their_slots() {
        let req = PredictionRequest {
            gender: Gender::Female,
            cholesterol: Level::High,
            gluc: Level::BorderLine,
            smoke: YesNo::Yes,
            alco: YesNo::Yes,
            active: YesNo::No,
            ..patient()
        };
        let v = req.features();
        assert_eq!(v[1], 0.0);
        assert_eq!(v[4], 3.0);
        assert_eq!(v[5], 2.0);
        assert_eq!(v[6], 1.0);
        assert_eq!(v[7], 1.0);
        assert_eq!(v[8], 0.0);
    }
}
