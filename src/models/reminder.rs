//! One-off reminder records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{RecordId, UserId};

/// A dated note to self. No recurrence, no done flag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    /// Unique within the reminders collection
    pub id: RecordId,
    /// Owning user
    pub user_id: UserId,
    /// What to remember
    pub note: String,
    /// When it is due
    pub due_date: DateTime<Utc>,
}

/// Caller-supplied fields for a new reminder; id and owner are assigned on add.
#[derive(Clone, Debug)]
pub struct ReminderForm {
    /// What to remember
    pub note: String,
    /// When it is due
    pub due_date: DateTime<Utc>,
}

impl ReminderForm {
    /// Builds the stored record once the facade has assigned id and owner.
    #[must_use]
    pub fn into_reminder(self, id: RecordId, user_id: UserId) -> Reminder {
        Reminder {
            id,
            user_id,
            note: self.note,
            due_date: self.due_date,
        }
    }
}
