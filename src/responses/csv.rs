// responses/csv.rs
use crate::errors::{CrmError, ResultResp};
use astra::{Body, ResponseBuilder};

/// Return a CSV export as a file download
pub fn csv_response(csv: String, filename: &str) -> ResultResp {
    let resp = ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::TEXT_CSV_UTF_8.as_ref())
        .header(
            "Content-Disposition",
            format!("attachment; filename=\"{filename}\""),
        )
        .body(Body::from(csv))
        .map_err(|_| CrmError::InternalError)?;

    Ok(resp)
}
