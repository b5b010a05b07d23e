// src/domain/vehicle.rs

use chrono::NaiveDate;
use std::fmt;

use crate::errors::CrmError;

pub const MIN_YEAR: i32 = 1980;
pub const MAX_YEAR: i32 = 2030;

/// Lifecycle stage of a vehicle on the flip pipeline.
///
/// Never stored: always derived from which transaction fields are present
/// on the record, so the two can not drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleStatus {
    Watch,
    Purchased,
    Sold,
}

impl VehicleStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            VehicleStatus::Watch => "Watch",
            VehicleStatus::Purchased => "Purchased",
            VehicleStatus::Sold => "Sold",
        }
    }
}

impl fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A vehicle being watched, flipped, or already sold.
///
/// The VIN is the business key and is immutable after creation. Purchase
/// and sale fields start empty and are filled in by lifecycle transitions;
/// `profit` is written once at sale time.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub vin: String,
    pub make: String,
    pub model: String,
    pub year: i32,

    pub purchase_date: Option<NaiveDate>,
    pub purchase_price: Option<f64>,

    pub sold_date: Option<NaiveDate>,
    pub sold_price: Option<f64>,
    pub profit: Option<f64>,
}

impl Vehicle {
    /// Validates the identity fields and builds a fresh watchlist entry.
    pub fn new(vin: &str, make: &str, model: &str, year: i32) -> Result<Self, CrmError> {
        let vin = vin.trim();
        let make = make.trim();
        let model = model.trim();

        if vin.is_empty() {
            return Err(CrmError::Validation("VIN must not be empty".to_string()));
        }
        if make.is_empty() {
            return Err(CrmError::Validation("make must not be empty".to_string()));
        }
        if model.is_empty() {
            return Err(CrmError::Validation("model must not be empty".to_string()));
        }
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(CrmError::Validation(format!(
                "year {year} is outside {MIN_YEAR}..={MAX_YEAR}"
            )));
        }

        Ok(Vehicle {
            vin: vin.to_string(),
            make: make.to_string(),
            model: model.to_string(),
            year,
            purchase_date: None,
            purchase_price: None,
            sold_date: None,
            sold_price: None,
            profit: None,
        })
    }

    /// Derives the lifecycle stage from field presence. A record with both
    /// transaction legs is Sold, one with only the purchase leg is
    /// Purchased, anything else is still on the watchlist.
    pub fn status(&self) -> VehicleStatus {
        let purchased = self.purchase_date.is_some() && self.purchase_price.is_some();
        let sold = self.sold_date.is_some() && self.sold_price.is_some();

        if purchased && sold {
            VehicleStatus::Sold
        } else if purchased {
            VehicleStatus::Purchased
        } else {
            VehicleStatus::Watch
        }
    }

    /// Short human label, e.g. "2014 Honda Civic".
    pub fn label(&self) -> String {
        format!("{} {} {}", self.year, self.make, self.model)
    }
}
