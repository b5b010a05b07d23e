// src/mailer.rs

use reqwest::blocking::Client;
use serde::Serialize;

use crate::errors::CrmError;
use crate::outreach::{Mailer, OutboundEmail, SENDER_EMAIL, SENDER_NAME};

const BREVO_ENDPOINT: &str = "https://api.brevo.com/v3/smtp/email";

/// Sends outreach mail through the Brevo transactional API.
///
/// Configured from the environment via `from_env`; when `BREVO_API_KEY`
/// is absent the application runs without a mailer and outreach stays
/// preview-only.
pub struct BrevoMailer {
    api_key: String,
    sender_email: String,
    sender_name: String,
    client: Client,
}

#[derive(Serialize)]
struct BrevoSender<'a> {
    name: &'a str,
    email: &'a str,
}

#[derive(Serialize)]
struct BrevoRecipient<'a> {
    email: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BrevoPayload<'a> {
    sender: BrevoSender<'a>,
    to: Vec<BrevoRecipient<'a>>,
    subject: &'a str,
    text_content: &'a str,
}

impl BrevoMailer {
    pub fn new(api_key: String, sender_email: String, sender_name: String) -> Self {
        Self {
            api_key,
            sender_email,
            sender_name,
            client: Client::new(),
        }
    }

    /// Builds a mailer from `BREVO_API_KEY`, with `CRM_SENDER_EMAIL` and
    /// `CRM_SENDER_NAME` overriding the default sender identity. Returns
    /// `None` when no key is set.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("BREVO_API_KEY").ok()?;
        let sender_email =
            std::env::var("CRM_SENDER_EMAIL").unwrap_or_else(|_| SENDER_EMAIL.to_string());
        let sender_name =
            std::env::var("CRM_SENDER_NAME").unwrap_or_else(|_| SENDER_NAME.to_string());
        Some(Self::new(api_key, sender_email, sender_name))
    }
}

impl Mailer for BrevoMailer {
    fn send(&self, email: &OutboundEmail) -> Result<(), CrmError> {
        let payload = BrevoPayload {
            sender: BrevoSender {
                name: &self.sender_name,
                email: &self.sender_email,
            },
            to: vec![BrevoRecipient { email: &email.to }],
            subject: &email.subject,
            text_content: &email.body,
        };

        let resp = self
            .client
            .post(BREVO_ENDPOINT)
            .header("api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .map_err(|e| CrmError::Delivery(format!("request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().unwrap_or_else(|_| "Unknown error".to_string());
            // Brevo wraps failures in {"code": ..., "message": ...}.
            let detail = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| {
                    v.get("message")
                        .and_then(|m| m.as_str())
                        .map(str::to_string)
                })
                .unwrap_or(body);
            return Err(CrmError::Delivery(format!("Brevo API error: {status} - {detail}")));
        }

        Ok(())
    }
}
