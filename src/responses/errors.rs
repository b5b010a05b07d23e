// src/responses/errors.rs

use astra::{Body, Response, ResponseBuilder};
use maud::{html, DOCTYPE};

use crate::errors::CrmError;

/// Convert a CrmError into a proper HTML response with the right status.
pub fn error_to_response(err: &CrmError) -> Response {
    let (status, message) = match err {
        CrmError::Validation(msg) => (400, msg.clone()),
        CrmError::BadRequest(msg) => (400, msg.clone()),
        CrmError::NotFound(msg) => (404, msg.clone()),
        CrmError::DuplicateKey(_) | CrmError::InvalidTransition { .. } => (409, err.to_string()),
        CrmError::Delivery(msg) => (502, format!("Mail delivery failed: {msg}")),
        CrmError::InternalError => (500, "Internal Server Error".to_string()),
    };
    render_error(status, &message)
}

/// Build a basic HTML error page
fn render_error(status: u16, message: &str) -> Response {
    let markup = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Error " (status) }
                style {
                    (maud::PreEscaped(
                        "body { font-family: system-ui, sans-serif; max-width: 720px; \
                         margin: 4rem auto; padding: 1rem; } \
                         h1 { font-size: 2rem; margin-bottom: 1rem; } \
                         p { font-size: 1.1rem; color: #444; }"
                    ))
                }
            }
            body {
                h1 { "Error " (status) }
                p { (message) }
                p { a href="/" { "Back to dashboard" } }
            }
        }
    };

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(markup.into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error".to_string())))
}
