//! Savings goal records.
//!
//! Goals carry no completion state; reaching one is the users' business.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{RecordId, UserId};

/// A savings goal with a target date.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    /// Unique within the goals collection
    pub id: RecordId,
    /// Owning user
    pub user_id: UserId,
    /// Short name shown in listings
    pub title: String,
    /// Longer description of what to achieve
    pub description: String,
    /// When the goal should be reached
    pub target_date: DateTime<Utc>,
}

/// Caller-supplied fields for a new goal; id and owner are assigned on add.
#[derive(Clone, Debug)]
pub struct GoalForm {
    /// Short name shown in listings
    pub title: String,
    /// Longer description of what to achieve
    pub description: String,
    /// When the goal should be reached
    pub target_date: DateTime<Utc>,
}

impl GoalForm {
    /// Builds the stored record once the facade has assigned id and owner.
    #[must_use]
    pub fn into_goal(self, id: RecordId, user_id: UserId) -> Goal {
        Goal {
            id,
            user_id,
            title: self.title,
            description: self.description,
            target_date: self.target_date,
        }
    }
}
