// src/domain/contact.rs

use std::fmt;
use std::str::FromStr;

use crate::errors::CrmError;

/// Role a contact plays for the business.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactType {
    Seller,
    Buyer,
    Dealer,
    Other,
}

impl ContactType {
    pub const ALL: [ContactType; 4] = [
        ContactType::Seller,
        ContactType::Buyer,
        ContactType::Dealer,
        ContactType::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ContactType::Seller => "Seller",
            ContactType::Buyer => "Buyer",
            ContactType::Dealer => "Dealer",
            ContactType::Other => "Other",
        }
    }
}

impl fmt::Display for ContactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactType {
    type Err = CrmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "seller" => Ok(ContactType::Seller),
            "buyer" => Ok(ContactType::Buyer),
            "dealer" => Ok(ContactType::Dealer),
            "other" => Ok(ContactType::Other),
            _ => Err(CrmError::Validation(format!("unknown contact type '{s}'"))),
        }
    }
}

/// A person or dealership in the rolodex.
///
/// `associated_vin` is a soft link: the vehicle it names may have been
/// deleted since, and deleting a vehicle never removes its contacts.
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub kind: ContactType,
    pub associated_vin: Option<String>,
}

/// Input for a contact row. The store assigns the id on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewContact {
    pub name: String,
    pub phone: String,
    pub kind: ContactType,
    pub associated_vin: Option<String>,
}

impl NewContact {
    pub fn validate(&self) -> Result<(), CrmError> {
        if self.name.trim().is_empty() {
            return Err(CrmError::Validation(
                "contact name must not be empty".to_string(),
            ));
        }
        if self.phone.trim().is_empty() {
            return Err(CrmError::Validation(
                "contact phone must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
