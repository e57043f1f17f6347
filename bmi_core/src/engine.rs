//! BMI engine: validation, computation and classification.
//!
//! Everything here is a pure function of its inputs. Values are rounded to
//! two decimals with round-half-away-from-zero (`f64::round`) before they
//! are classified, so the category always agrees with the displayed value.
//!
//! Category buckets are half-open, lower bound inclusive:
//!
//! | value            | category    |
//! |------------------|-------------|
//! | `< 18.5`         | Underweight |
//! | `18.5 ..< 25`    | Normal      |
//! | `25 ..< 30`      | Overweight  |
//! | `>= 30`          | Obese       |

use crate::{BmiCategory, BmiResult, Error, Measurement, Result};

/// Exclusive upper bound for height in centimetres
pub const MAX_HEIGHT_CM: f64 = 250.0;

/// Exclusive upper bound for weight in kilograms
pub const MAX_WEIGHT_KG: f64 = 300.0;

/// Whether the pair lies inside the accepted domain.
///
/// Both values must be finite, `0 < height_cm < 250` and `0 < weight_kg < 300`.
pub fn validate(height_cm: f64, weight_kg: f64) -> bool {
    height_cm.is_finite()
        && weight_kg.is_finite()
        && height_cm > 0.0
        && height_cm < MAX_HEIGHT_CM
        && weight_kg > 0.0
        && weight_kg < MAX_WEIGHT_KG
}

/// Unrounded BMI: weight over height in metres squared
pub fn raw_bmi(height_cm: f64, weight_kg: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Round to two decimals, halves away from zero
pub fn round_bmi(raw: f64) -> f64 {
    (raw * 100.0).round() / 100.0
}

/// Map a BMI value to its category.
///
/// Total over `f64`: NaN fails every comparison and lands in `Obese`.
pub fn classify(value: f64) -> BmiCategory {
    if value < 18.5 {
        BmiCategory::Underweight
    } else if value < 25.0 {
        BmiCategory::Normal
    } else if value < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Compute and classify BMI.
///
/// Returns [`Error::InvalidInput`] when [`validate`] rejects the pair.
pub fn compute(height_cm: f64, weight_kg: f64) -> Result<BmiResult> {
    if !validate(height_cm, weight_kg) {
        return Err(Error::InvalidInput(format!(
            "Invalid height/weight: {} cm, {} kg",
            height_cm, weight_kg
        )));
    }

    let value = round_bmi(raw_bmi(height_cm, weight_kg));
    let category = classify(value);

    tracing::debug!(height_cm, weight_kg, value, %category, "Computed BMI");

    Ok(BmiResult { value, category })
}

/// [`compute`] for an already constructed [`Measurement`]
pub fn compute_measurement(measurement: &Measurement) -> Result<BmiResult> {
    compute(measurement.height_cm, measurement.weight_kg)
}
