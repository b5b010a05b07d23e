// src/store/vehicles.rs

use chrono::NaiveDate;

use crate::domain::vehicle::Vehicle;
use crate::errors::CrmError;

/// Partial update for a vehicle row. `None` fields are left as they are;
/// identity fields (VIN, make, model, year) are not patchable.
#[derive(Debug, Default, Clone)]
pub struct VehiclePatch {
    pub purchase_date: Option<NaiveDate>,
    pub purchase_price: Option<f64>,
    pub sold_date: Option<NaiveDate>,
    pub sold_price: Option<f64>,
    pub profit: Option<f64>,
}

/// In-memory vehicle table, keyed by VIN, kept in insertion order.
#[derive(Debug, Default)]
pub struct VehicleTable {
    rows: Vec<Vehicle>,
}

impl VehicleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a vehicle. VINs are unique across the table.
    pub fn insert(&mut self, vehicle: Vehicle) -> Result<&Vehicle, CrmError> {
        if self.rows.iter().any(|v| v.vin == vehicle.vin) {
            return Err(CrmError::DuplicateKey(vehicle.vin));
        }
        self.rows.push(vehicle);
        let idx = self.rows.len() - 1;
        Ok(&self.rows[idx])
    }

    pub fn get(&self, vin: &str) -> Option<&Vehicle> {
        self.rows.iter().find(|v| v.vin == vin)
    }

    /// Like `get`, but a missing VIN is an error.
    pub fn require(&self, vin: &str) -> Result<&Vehicle, CrmError> {
        self.get(vin)
            .ok_or_else(|| CrmError::NotFound(format!("no vehicle with VIN '{vin}'")))
    }

    /// Lazy scan in insertion order.
    pub fn find<'a>(
        &'a self,
        mut predicate: impl FnMut(&Vehicle) -> bool + 'a,
    ) -> impl Iterator<Item = &'a Vehicle> + 'a {
        self.rows.iter().filter(move |v| predicate(v))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vehicle> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Applies a patch to the row under `vin` and returns the updated row.
    pub fn update(&mut self, vin: &str, patch: VehiclePatch) -> Result<&Vehicle, CrmError> {
        let row = self
            .rows
            .iter_mut()
            .find(|v| v.vin == vin)
            .ok_or_else(|| CrmError::NotFound(format!("no vehicle with VIN '{vin}'")))?;

        if let Some(date) = patch.purchase_date {
            row.purchase_date = Some(date);
        }
        if let Some(price) = patch.purchase_price {
            row.purchase_price = Some(price);
        }
        if let Some(date) = patch.sold_date {
            row.sold_date = Some(date);
        }
        if let Some(price) = patch.sold_price {
            row.sold_price = Some(price);
        }
        if let Some(profit) = patch.profit {
            row.profit = Some(profit);
        }
        Ok(row)
    }

    /// Removes and returns the row under `vin`.
    pub fn delete(&mut self, vin: &str) -> Result<Vehicle, CrmError> {
        let idx = self
            .rows
            .iter()
            .position(|v| v.vin == vin)
            .ok_or_else(|| CrmError::NotFound(format!("no vehicle with VIN '{vin}'")))?;
        Ok(self.rows.remove(idx))
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }
}
