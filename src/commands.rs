// src/commands.rs

use chrono::NaiveDate;

use crate::domain::contact::{ContactType, NewContact};
use crate::domain::follow_up::NewFollowUp;
use crate::domain::lifecycle;
use crate::errors::CrmError;
use crate::store::Store;

/// Optional seller captured on the add-car form.
#[derive(Debug, Clone, PartialEq)]
pub struct SellerInfo {
    pub name: String,
    pub phone: String,
}

/// Every mutation the browser can ask for, one variant per form.
///
/// The route handlers translate posted forms into commands and hand them
/// to `dispatch`; nothing else in the application writes to the store.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddVehicle {
        vin: String,
        make: String,
        model: String,
        year: i32,
        seller: Option<SellerInfo>,
    },
    MarkPurchased {
        vin: String,
        date: NaiveDate,
        price: f64,
    },
    MarkSold {
        vin: String,
        date: NaiveDate,
        price: f64,
    },
    DeleteVehicle {
        vin: String,
    },
    AddContact {
        name: String,
        phone: String,
        kind: ContactType,
        associated_vin: Option<String>,
    },
    SaveMarketContact {
        dealership: String,
        phone: String,
    },
    LogFollowUp {
        dealership: String,
        phone: String,
        email: String,
        message: String,
        date_sent: NaiveDate,
        needs_follow_up: bool,
    },
    SetNeedsFollowUp {
        id: i64,
        value: bool,
    },
    ClearVehicles,
    ClearContacts,
}

/// Confirmation reported back to the page after a command goes through.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub message: String,
}

impl Outcome {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Runs one command against the store. A failed command leaves the store
/// exactly as it was.
pub fn dispatch(store: &mut Store, command: Command) -> Result<Outcome, CrmError> {
    match command {
        Command::AddVehicle {
            vin,
            make,
            model,
            year,
            seller,
        } => add_vehicle(store, &vin, &make, &model, year, seller),
        Command::MarkPurchased { vin, date, price } => {
            lifecycle::mark_purchased(&mut store.vehicles, &vin, date, price)?;
            Ok(Outcome::new("Car marked as purchased!"))
        }
        Command::MarkSold { vin, date, price } => {
            lifecycle::mark_sold(&mut store.vehicles, &vin, date, price)?;
            Ok(Outcome::new("Car marked as sold!"))
        }
        Command::DeleteVehicle { vin } => {
            let removed = lifecycle::delete(&mut store.vehicles, &vin)?;
            Ok(Outcome::new(format!("Car with VIN {} deleted.", removed.vin)))
        }
        Command::AddContact {
            name,
            phone,
            kind,
            associated_vin,
        } => {
            store.contacts.insert(NewContact {
                name,
                phone,
                kind,
                associated_vin,
            })?;
            Ok(Outcome::new("Contact added!"))
        }
        Command::SaveMarketContact { dealership, phone } => {
            let saved = store.contacts.insert(NewContact {
                name: dealership,
                phone,
                kind: ContactType::Seller,
                associated_vin: None,
            })?;
            Ok(Outcome::new(format!("Contact for {} saved!", saved.name)))
        }
        Command::LogFollowUp {
            dealership,
            phone,
            email,
            message,
            date_sent,
            needs_follow_up,
        } => {
            store.follow_ups.insert(NewFollowUp {
                dealership,
                phone,
                email,
                message,
                date_sent,
                needs_follow_up,
            });
            Ok(Outcome::new("Follow-up logged!"))
        }
        Command::SetNeedsFollowUp { id, value } => {
            store.follow_ups.set_needs_follow_up(id, value)?;
            Ok(Outcome::new(if value {
                "Marked as needing follow-up."
            } else {
                "Follow-up resolved."
            }))
        }
        Command::ClearVehicles => {
            store.vehicles.clear();
            Ok(Outcome::new("CRM data cleared!"))
        }
        Command::ClearContacts => {
            store.contacts.clear();
            Ok(Outcome::new("Contacts data cleared!"))
        }
    }
}

fn add_vehicle(
    store: &mut Store,
    vin: &str,
    make: &str,
    model: &str,
    year: i32,
    seller: Option<SellerInfo>,
) -> Result<Outcome, CrmError> {
    lifecycle::create(&mut store.vehicles, vin, make, model, year)?;

    // The add-car form tucks an optional seller next to the car. A blank
    // name or phone means no contact row, matching how the form is used.
    if let Some(seller) = seller {
        if !seller.name.trim().is_empty() && !seller.phone.trim().is_empty() {
            store.contacts.insert(NewContact {
                name: seller.name,
                phone: seller.phone,
                kind: ContactType::Seller,
                associated_vin: Some(vin.trim().to_string()),
            })?;
        }
    }

    Ok(Outcome::new("Car added to watchlist!"))
}
