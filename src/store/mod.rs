// src/store/mod.rs

pub mod contacts;
pub mod follow_ups;
pub mod vehicles;

pub use contacts::ContactTable;
pub use follow_ups::FollowUpTable;
pub use vehicles::{VehiclePatch, VehicleTable};

/// The in-memory record store: one table per record kind, independent of
/// each other. State lives for the process lifetime only; the CSV exports
/// are the sole way data leaves the process.
#[derive(Debug, Default)]
pub struct Store {
    pub vehicles: VehicleTable,
    pub contacts: ContactTable,
    pub follow_ups: FollowUpTable,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }
}
