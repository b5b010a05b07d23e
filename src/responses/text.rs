// responses/text.rs
use crate::errors::{CrmError, ResultResp};
use astra::{Body, ResponseBuilder};

/// Return plain text as a named file download (offer sheets, pitches)
pub fn text_response(text: String, filename: &str) -> ResultResp {
    let resp = ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::TEXT_PLAIN_UTF_8.as_ref())
        .header(
            "Content-Disposition",
            format!("attachment; filename=\"{filename}\""),
        )
        .body(Body::from(text))
        .map_err(|_| CrmError::InternalError)?;

    Ok(resp)
}
