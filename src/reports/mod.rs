pub mod csv;
pub mod profit;
