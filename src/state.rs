// src/state.rs

use std::sync::{Mutex, MutexGuard};

use crate::errors::CrmError;
use crate::mailer::BrevoMailer;
use crate::outreach::Mailer;
use crate::store::Store;

/// Everything a request handler can reach: the record store behind its
/// single lock, and the optional mail collaborator.
pub struct AppState {
    pub store: Mutex<Store>,
    pub mailer: Option<Box<dyn Mailer>>,
}

impl AppState {
    /// Fresh state with an empty store. The store always starts empty:
    /// records live for the process lifetime only.
    pub fn from_env() -> Self {
        Self {
            store: Mutex::new(Store::new()),
            mailer: BrevoMailer::from_env().map(|m| Box::new(m) as Box<dyn Mailer>),
        }
    }

    /// Acquires the store lock. Every handler mutation and read happens
    /// under this one lock, one user action at a time.
    pub fn lock_store(&self) -> Result<MutexGuard<'_, Store>, CrmError> {
        self.store.lock().map_err(|_| CrmError::InternalError)
    }
}
