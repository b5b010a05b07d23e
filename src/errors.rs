use astra::Response;
// errors.rs
use std::fmt;

use crate::domain::vehicle::VehicleStatus;

/// Errors originating from the record store and lifecycle rules,
/// from request handling, or from downstream delivery (mail API).
///
/// Store and lifecycle failures are recoverable: they are reported to the
/// caller and never leave a table half-updated.
#[derive(Debug, Clone, PartialEq)]
pub enum CrmError {
    /// Input shape or range is wrong (blank VIN, year out of bounds,
    /// non-positive price).
    Validation(String),
    /// A vehicle with this VIN already exists.
    DuplicateKey(String),
    /// No record under the given key, or no such route.
    NotFound(String),
    /// The requested lifecycle step is not legal from the current stage.
    InvalidTransition {
        vin: String,
        from: VehicleStatus,
        to: VehicleStatus,
    },
    /// Outbound mail could not be delivered. Store state is unaffected.
    Delivery(String),
    /// The request itself is malformed (missing field, unparsable value).
    BadRequest(String),
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, CrmError>;

impl fmt::Display for CrmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrmError::Validation(msg) => write!(f, "Validation failed: {msg}"),
            CrmError::DuplicateKey(vin) => {
                write!(f, "A vehicle with VIN '{vin}' already exists")
            }
            CrmError::NotFound(msg) => write!(f, "Not Found: {msg}"),
            CrmError::InvalidTransition { vin, from, to } => {
                write!(f, "Vehicle '{vin}' cannot move from {from} to {to}")
            }
            CrmError::Delivery(msg) => write!(f, "Mail delivery failed: {msg}"),
            CrmError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            CrmError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for CrmError {}
