use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;
use std::sync::{Arc, Mutex};

use crate::errors::CrmError;
use crate::outreach::{Mailer, OutboundEmail};
use crate::state::AppState;
use crate::store::Store;

/// Fresh application state: empty store, no mail service.
pub fn test_state() -> AppState {
    AppState {
        store: Mutex::new(Store::new()),
        mailer: None,
    }
}

/// State with a stub mailer. The returned handle records every email the
/// application hands to the mail service.
pub fn state_with_mailer(fail: bool) -> (AppState, Arc<Mutex<Vec<OutboundEmail>>>) {
    let sent = Arc::new(Mutex::new(Vec::new()));
    let state = AppState {
        store: Mutex::new(Store::new()),
        mailer: Some(Box::new(StubMailer {
            fail,
            sent: Arc::clone(&sent),
        })),
    };
    (state, sent)
}

struct StubMailer {
    fail: bool,
    sent: Arc<Mutex<Vec<OutboundEmail>>>,
}

impl Mailer for StubMailer {
    fn send(&self, email: &OutboundEmail) -> Result<(), CrmError> {
        if self.fail {
            return Err(CrmError::Delivery("stub mailer set to fail".to_string()));
        }
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}

pub fn get(path: &str) -> astra::Request {
    Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(path: &str, form: &str) -> astra::Request {
    Request::builder()
        .method(Method::POST)
        .uri(path)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(form.as_bytes().to_vec()))
        .unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}
