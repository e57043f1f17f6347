//! Core domain types for the BMI calculator.
//!
//! This module defines:
//! - The measurement supplied for one calculation
//! - The health categories a BMI value falls into
//! - The computed result handed back to the presentation layer

use crate::engine::{MAX_HEIGHT_CM, MAX_WEIGHT_KG};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Measurement
// ============================================================================

/// Height and weight supplied for a single calculation
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub height_cm: f64,
    pub weight_kg: f64,
}

impl Measurement {
    /// Build a measurement, rejecting values outside the accepted domain
    pub fn new(height_cm: f64, weight_kg: f64) -> Result<Self> {
        check_range("Height", height_cm, MAX_HEIGHT_CM, "cm")?;
        check_range("Weight", weight_kg, MAX_WEIGHT_KG, "kg")?;
        Ok(Self {
            height_cm,
            weight_kg,
        })
    }

    /// Build a measurement from raw text fields as typed by the user
    pub fn parse(height: &str, weight: &str) -> Result<Self> {
        let height_cm = parse_field("height", height)?;
        let weight_kg = parse_field("weight", weight)?;
        Self::new(height_cm, weight_kg)
    }
}

fn parse_field(name: &str, raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidInput(format!("Please enter your {}.", name)));
    }
    trimmed.parse::<f64>().map_err(|_| {
        Error::InvalidInput(format!("{} must be a number (got {:?}).", capitalize(name), trimmed))
    })
}

fn check_range(name: &str, value: f64, max: f64, unit: &str) -> Result<()> {
    if value.is_finite() && value > 0.0 && value < max {
        Ok(())
    } else {
        Err(Error::InvalidInput(format!(
            "{} must be greater than 0 and less than {} {}.",
            name, max, unit
        )))
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ============================================================================
// Category
// ============================================================================

/// Health classification of a BMI value
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// All categories in ascending BMI order
    pub const ALL: [BmiCategory; 4] = [
        BmiCategory::Underweight,
        BmiCategory::Normal,
        BmiCategory::Overweight,
        BmiCategory::Obese,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    /// Bounds of the bucket: lower inclusive, upper exclusive.
    /// `None` means unbounded on that side.
    pub fn range(&self) -> (Option<f64>, Option<f64>) {
        match self {
            BmiCategory::Underweight => (None, Some(18.5)),
            BmiCategory::Normal => (Some(18.5), Some(25.0)),
            BmiCategory::Overweight => (Some(25.0), Some(30.0)),
            BmiCategory::Obese => (Some(30.0), None),
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Result
// ============================================================================

/// A computed BMI value and its category
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    /// BMI rounded to two decimal places
    pub value: f64,
    pub category: BmiCategory,
}

impl fmt::Display for BmiResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} ({})", self.value, self.category)
    }
}
