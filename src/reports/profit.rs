// src/reports/profit.rs

use std::collections::BTreeMap;

use crate::domain::vehicle::{Vehicle, VehicleStatus};

/// Watch / Purchased / Sold counts across the inventory.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StatusBreakdown {
    pub watching: usize,
    pub purchased: usize,
    pub sold: usize,
}

impl StatusBreakdown {
    pub fn total(&self) -> usize {
        self.watching + self.purchased + self.sold
    }
}

pub fn status_breakdown<'a>(vehicles: impl IntoIterator<Item = &'a Vehicle>) -> StatusBreakdown {
    let mut out = StatusBreakdown::default();
    for v in vehicles {
        match v.status() {
            VehicleStatus::Watch => out.watching += 1,
            VehicleStatus::Purchased => out.purchased += 1,
            VehicleStatus::Sold => out.sold += 1,
        }
    }
    out
}

/// Realized profit across all sold vehicles.
pub fn total_profit<'a>(vehicles: impl IntoIterator<Item = &'a Vehicle>) -> f64 {
    vehicles.into_iter().filter_map(|v| v.profit).sum()
}

/// Profit summed per `YYYY-MM` month of the sold date, months ascending.
/// Vehicles without a recorded sale are skipped.
pub fn monthly_profit<'a>(vehicles: impl IntoIterator<Item = &'a Vehicle>) -> Vec<(String, f64)> {
    let mut months: BTreeMap<String, f64> = BTreeMap::new();
    for v in vehicles {
        if let (Some(date), Some(profit)) = (v.sold_date, v.profit) {
            *months.entry(date.format("%Y-%m").to_string()).or_insert(0.0) += profit;
        }
    }
    months.into_iter().collect()
}
