// src/store/contacts.rs

use crate::domain::contact::{Contact, ContactType, NewContact};
use crate::errors::CrmError;

/// Partial update for a contact row. `None` fields are left as they are.
#[derive(Debug, Default, Clone)]
pub struct ContactPatch {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub kind: Option<ContactType>,
    pub associated_vin: Option<String>,
}

/// In-memory contact table with store-assigned ids, kept in insertion
/// order.
#[derive(Debug)]
pub struct ContactTable {
    rows: Vec<Contact>,
    next_id: i64,
}

impl Default for ContactTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactTable {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }

    /// Validates the input, assigns the next id, and appends the row.
    /// A blank associated VIN is stored as no association.
    pub fn insert(&mut self, new: NewContact) -> Result<&Contact, CrmError> {
        new.validate()?;

        let id = self.next_id;
        self.next_id += 1;

        let associated_vin = new.associated_vin.and_then(|vin| {
            let vin = vin.trim().to_string();
            if vin.is_empty() {
                None
            } else {
                Some(vin)
            }
        });

        self.rows.push(Contact {
            id,
            name: new.name.trim().to_string(),
            phone: new.phone.trim().to_string(),
            kind: new.kind,
            associated_vin,
        });
        let idx = self.rows.len() - 1;
        Ok(&self.rows[idx])
    }

    pub fn get(&self, id: i64) -> Option<&Contact> {
        self.rows.iter().find(|c| c.id == id)
    }

    /// Lazy scan in insertion order.
    pub fn find<'a>(
        &'a self,
        mut predicate: impl FnMut(&Contact) -> bool + 'a,
    ) -> impl Iterator<Item = &'a Contact> + 'a {
        self.rows.iter().filter(move |c| predicate(c))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contact> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Applies a patch to the row under `id` and returns the updated row.
    pub fn update(&mut self, id: i64, patch: ContactPatch) -> Result<&Contact, CrmError> {
        let row = self
            .rows
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| CrmError::NotFound(format!("no contact with id {id}")))?;

        if let Some(name) = patch.name {
            row.name = name;
        }
        if let Some(phone) = patch.phone {
            row.phone = phone;
        }
        if let Some(kind) = patch.kind {
            row.kind = kind;
        }
        if let Some(vin) = patch.associated_vin {
            row.associated_vin = Some(vin);
        }
        Ok(row)
    }

    /// Removes and returns the row under `id`.
    pub fn delete(&mut self, id: i64) -> Result<Contact, CrmError> {
        let idx = self
            .rows
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| CrmError::NotFound(format!("no contact with id {id}")))?;
        Ok(self.rows.remove(idx))
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }
}
