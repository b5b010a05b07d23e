// src/domain/follow_up.rs

use chrono::NaiveDate;

/// One logged outreach touch with a dealership.
#[derive(Debug, Clone, PartialEq)]
pub struct FollowUp {
    pub id: i64,
    pub dealership: String,
    pub phone: String,
    pub email: String,
    pub message: String,
    pub date_sent: NaiveDate,
    pub needs_follow_up: bool,
}

impl FollowUp {
    /// Whole days between the contact date and `today`. Negative when the
    /// logged date is in the future.
    pub fn days_since_sent(&self, today: NaiveDate) -> i64 {
        today.signed_duration_since(self.date_sent).num_days()
    }
}

/// Input for a follow-up row. The store assigns the id on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewFollowUp {
    pub dealership: String,
    pub phone: String,
    pub email: String,
    pub message: String,
    pub date_sent: NaiveDate,
    pub needs_follow_up: bool,
}
