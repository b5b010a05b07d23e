pub mod csv;
pub mod errors;
pub mod html;
pub mod text;

pub use csv::csv_response;
pub use errors::error_to_response;
pub use html::html_response;
pub use text::text_response;
