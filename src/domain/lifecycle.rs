// src/domain/lifecycle.rs

use chrono::NaiveDate;

use crate::domain::vehicle::{Vehicle, VehicleStatus};
use crate::errors::CrmError;
use crate::store::{VehiclePatch, VehicleTable};

/// Watch -> Purchased -> Sold transitions over the vehicle table.
///
/// Every transition validates before it writes and lands all of its field
/// updates in one patch, so a failed call leaves the record untouched.

/// Validates and inserts a new watchlist entry.
pub fn create<'a>(
    vehicles: &'a mut VehicleTable,
    vin: &str,
    make: &str,
    model: &str,
    year: i32,
) -> Result<&'a Vehicle, CrmError> {
    let vehicle = Vehicle::new(vin, make, model, year)?;
    vehicles.insert(vehicle)
}

/// Moves a watched vehicle into Purchased by recording the buy leg.
pub fn mark_purchased<'a>(
    vehicles: &'a mut VehicleTable,
    vin: &str,
    purchase_date: NaiveDate,
    purchase_price: f64,
) -> Result<&'a Vehicle, CrmError> {
    if purchase_price <= 0.0 {
        return Err(CrmError::Validation(format!(
            "purchase price must be positive, got {purchase_price}"
        )));
    }

    let from = vehicles.require(vin)?.status();
    if from != VehicleStatus::Watch {
        return Err(CrmError::InvalidTransition {
            vin: vin.to_string(),
            from,
            to: VehicleStatus::Purchased,
        });
    }

    vehicles.update(
        vin,
        VehiclePatch {
            purchase_date: Some(purchase_date),
            purchase_price: Some(purchase_price),
            ..VehiclePatch::default()
        },
    )
}

/// Moves a purchased vehicle into Sold, deriving profit from the two legs.
pub fn mark_sold<'a>(
    vehicles: &'a mut VehicleTable,
    vin: &str,
    sold_date: NaiveDate,
    sold_price: f64,
) -> Result<&'a Vehicle, CrmError> {
    if sold_price <= 0.0 {
        return Err(CrmError::Validation(format!(
            "sold price must be positive, got {sold_price}"
        )));
    }

    let (from, purchase_price) = {
        let vehicle = vehicles.require(vin)?;
        (vehicle.status(), vehicle.purchase_price)
    };
    let purchase_price = match (from, purchase_price) {
        (VehicleStatus::Purchased, Some(price)) => price,
        _ => {
            return Err(CrmError::InvalidTransition {
                vin: vin.to_string(),
                from,
                to: VehicleStatus::Sold,
            })
        }
    };

    vehicles.update(
        vin,
        VehiclePatch {
            sold_date: Some(sold_date),
            sold_price: Some(sold_price),
            profit: Some(sold_price - purchase_price),
            ..VehiclePatch::default()
        },
    )
}

/// Removes a vehicle outright, whatever its stage. Contacts that reference
/// the VIN are deliberately left alone.
pub fn delete(vehicles: &mut VehicleTable, vin: &str) -> Result<Vehicle, CrmError> {
    vehicles.delete(vin)
}
