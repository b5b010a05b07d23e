// src/outreach.rs

use crate::errors::CrmError;

/// Boilerplate text the business sends out: the dealer sourcing inquiry,
/// offer sheets, and the quick pitch. Building text is pure; delivery goes
/// through the `Mailer` seam and its failures never touch the store.

pub const SENDER_NAME: &str = "Anthony Rodas";
pub const SENDER_TITLE: &str = "Senior Acquisition Specialist";
pub const SENDER_EMAIL: &str = "AnthonyRodas@velocitycarssale.com";
pub const SENDER_PHONE: &str = "949-796-2933";
pub const COMPANY_NAME: &str = "VelocityCarDeals";

/// A composed message before it has a recipient.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub subject: String,
    pub body: String,
}

impl Draft {
    pub fn addressed_to(self, to: &str) -> OutboundEmail {
        OutboundEmail {
            to: to.to_string(),
            subject: self.subject,
            body: self.body,
        }
    }
}

/// A fully addressed outbound message.
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Delivery collaborator. The production implementation posts to the
/// Brevo transactional API; tests substitute their own.
pub trait Mailer: Send + Sync {
    fn send(&self, email: &OutboundEmail) -> Result<(), CrmError>;
}

/// The professional sourcing inquiry sent to a dealership that may carry
/// the wanted vehicle.
pub fn sourcing_inquiry(year: i32, make: &str, model: &str, dealership: &str) -> Draft {
    Draft {
        subject: format!("Vehicle Sourcing Inquiry - {year} {make} {model}"),
        body: format!(
            "Dear {dealership} Team,\n\n\
             I hope this message finds you well. My name is {SENDER_NAME}, and I represent \
             {COMPANY_NAME}, a professional automotive sourcing company.\n\n\
             I am currently seeking a {year} {make} {model} for one of our clients. I noticed \
             you may have this vehicle available and would like to discuss a potential \
             acquisition.\n\n\
             We are serious cash buyers with immediate funding available and can close \
             quickly. If you have this vehicle or similar inventory, please contact me at \
             your earliest convenience.\n\n\
             Contact Information:\n\
             Email: {SENDER_EMAIL}\n\
             Phone: {SENDER_PHONE}\n\n\
             Thank you for your time. I look forward to doing business together.\n\n\
             Best regards,\n\
             {SENDER_NAME}\n\
             {SENDER_TITLE}\n\
             {COMPANY_NAME}"
        ),
    }
}

/// The short cash-buyer pitch pasted into listing replies.
pub fn pitch(description: &str) -> String {
    format!(
        "Hi, I'm looking for a vehicle with the following specs: {description}. \
         If you have something that fits or close, let me know. Cash buyer, \
         ready to move fast."
    )
}

/// Everything that goes on a printed dealer offer.
#[derive(Debug, Clone, PartialEq)]
pub struct OfferSheet {
    pub vin: String,
    pub stock_number: String,
    pub make: String,
    pub model: String,
    pub trim: String,
    pub mileage: u32,
    pub price: f64,
    pub notes: String,
}

impl OfferSheet {
    /// VIN, make, and model are the minimum a dealer needs to look the
    /// car up.
    pub fn validate(&self) -> Result<(), CrmError> {
        if self.vin.trim().is_empty() {
            return Err(CrmError::Validation("offer VIN must not be empty".to_string()));
        }
        if self.make.trim().is_empty() || self.model.trim().is_empty() {
            return Err(CrmError::Validation(
                "offer make and model must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Plain-text rendering, as handed to dealers or downloaded.
    pub fn render(&self) -> String {
        let trim = if self.trim.trim().is_empty() {
            String::new()
        } else {
            format!(" {}", self.trim.trim())
        };
        let notes = if self.notes.trim().is_empty() {
            "None"
        } else {
            self.notes.trim()
        };
        format!(
            "Dealer Offer Sheet\n\
             ------------------\n\
             VIN:                 {}\n\
             Stock #:             {}\n\
             Make / Model / Trim: {} {}{}\n\
             Mileage:             {} miles\n\
             Offer Price:         {}\n\
             Notes:               {}\n",
            self.vin,
            if self.stock_number.trim().is_empty() {
                "N/A"
            } else {
                self.stock_number.trim()
            },
            self.make,
            self.model,
            trim,
            self.mileage,
            usd(self.price),
            notes,
        )
    }
}

/// Formats a dollar amount with thousands separators, e.g. `$6,350.00`.
pub fn usd(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let dollars = (cents / 100).to_string();
    let rem = cents % 100;

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, ch) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{rem:02}")
}
