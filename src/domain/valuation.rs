// src/domain/valuation.rs

use std::fmt;
use std::str::FromStr;

use crate::errors::CrmError;

/// Wholesale band located at 85% to 92% of the reference value.
pub const ACQUISITION_LOW_PCT: f64 = 0.85;
pub const ACQUISITION_HIGH_PCT: f64 = 0.92;

/// No car estimate ever drops below this floor.
pub const VALUE_FLOOR: f64 = 2000.0;

const MILEAGE_STEP: u32 = 10_000;
const STEP_DEDUCTION: f64 = 500.0;

/// Reported condition of a vehicle, scaling its estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl Condition {
    pub const ALL: [Condition; 4] = [
        Condition::Excellent,
        Condition::Good,
        Condition::Fair,
        Condition::Poor,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Condition::Excellent => "Excellent",
            Condition::Good => "Good",
            Condition::Fair => "Fair",
            Condition::Poor => "Poor",
        }
    }

    pub fn factor(self) -> f64 {
        match self {
            Condition::Excellent => 1.05,
            Condition::Good => 1.00,
            Condition::Fair => 0.90,
            Condition::Poor => 0.80,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Condition {
    type Err = CrmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "excellent" => Ok(Condition::Excellent),
            "good" => Ok(Condition::Good),
            "fair" => Ok(Condition::Fair),
            "poor" => Ok(Condition::Poor),
            _ => Err(CrmError::Validation(format!("unknown condition '{s}'"))),
        }
    }
}

/// The price band a buyer should target when acquiring at wholesale,
/// as (low, high) around the given reference value.
pub fn acquisition_band(reference_value: f64) -> Result<(f64, f64), CrmError> {
    if reference_value < 0.0 {
        return Err(CrmError::Validation(format!(
            "reference value must be non-negative, got {reference_value}"
        )));
    }
    Ok((
        reference_value * ACQUISITION_LOW_PCT,
        reference_value * ACQUISITION_HIGH_PCT,
    ))
}

/// Mileage-and-condition adjusted estimate: $500 off the base value per
/// full 10,000 miles, floored at $2,000, then scaled by condition.
pub fn estimate_value(base_value: f64, mileage: u32, condition: Condition) -> f64 {
    let deduction = f64::from(mileage / MILEAGE_STEP) * STEP_DEDUCTION;
    let floored = (base_value - deduction).max(VALUE_FLOOR);
    floored * condition.factor()
}
