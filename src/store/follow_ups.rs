// src/store/follow_ups.rs

use crate::domain::follow_up::{FollowUp, NewFollowUp};
use crate::errors::CrmError;

/// In-memory follow-up log with store-assigned ids, kept in insertion
/// order. Rows are append-then-flag: the only field that changes after
/// insert is `needs_follow_up`.
#[derive(Debug)]
pub struct FollowUpTable {
    rows: Vec<FollowUp>,
    next_id: i64,
}

impl Default for FollowUpTable {
    fn default() -> Self {
        Self::new()
    }
}

impl FollowUpTable {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }

    /// Assigns the next id and appends the row.
    pub fn insert(&mut self, new: NewFollowUp) -> &FollowUp {
        let id = self.next_id;
        self.next_id += 1;

        self.rows.push(FollowUp {
            id,
            dealership: new.dealership.trim().to_string(),
            phone: new.phone.trim().to_string(),
            email: new.email.trim().to_string(),
            message: new.message,
            date_sent: new.date_sent,
            needs_follow_up: new.needs_follow_up,
        });
        let idx = self.rows.len() - 1;
        &self.rows[idx]
    }

    pub fn get(&self, id: i64) -> Option<&FollowUp> {
        self.rows.iter().find(|f| f.id == id)
    }

    /// Lazy scan in insertion order.
    pub fn find<'a>(
        &'a self,
        mut predicate: impl FnMut(&FollowUp) -> bool + 'a,
    ) -> impl Iterator<Item = &'a FollowUp> + 'a {
        self.rows.iter().filter(move |f| predicate(f))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FollowUp> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Flips the reminder flag on the row under `id`.
    pub fn set_needs_follow_up(&mut self, id: i64, needs: bool) -> Result<&FollowUp, CrmError> {
        let row = self
            .rows
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| CrmError::NotFound(format!("no follow-up with id {id}")))?;
        row.needs_follow_up = needs;
        Ok(row)
    }

    /// Removes and returns the row under `id`.
    pub fn delete(&mut self, id: i64) -> Result<FollowUp, CrmError> {
        let idx = self
            .rows
            .iter()
            .position(|f| f.id == id)
            .ok_or_else(|| CrmError::NotFound(format!("no follow-up with id {id}")))?;
        Ok(self.rows.remove(idx))
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }
}
