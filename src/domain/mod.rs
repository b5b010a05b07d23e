pub mod contact;
pub mod follow_up;
pub mod lifecycle;
pub mod valuation;
pub mod vehicle;
