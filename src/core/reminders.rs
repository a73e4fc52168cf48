//! Reminder facade operations.
//!
//! Same surface as goals: per-user listing in stored order, add, and
//! owner-scoped delete.

use tracing::{debug, info, instrument};

use crate::core::records;
use crate::errors::Result;
use crate::models::{RecordId, Reminder, ReminderForm, UserId};
use crate::store::{StorePool, simulate_latency};

/// Retrieves one user's reminders in stored order.
#[instrument(skip(pool))]
pub async fn get_reminders(pool: &StorePool, user_id: UserId) -> Vec<Reminder> {
    let reminders = records::list_for_user::<Reminder>(pool, user_id);
    simulate_latency(pool).await;
    debug!("Fetched {} reminders for user {}.", reminders.len(), user_id);
    reminders
}

/// Stores a new reminder for `user_id` under a fresh id and returns it.
#[instrument(skip(pool, form))]
pub async fn add_reminder(pool: &StorePool, user_id: UserId, form: ReminderForm) -> Reminder {
    let reminder = records::append(pool, |id| form.into_reminder(id, user_id));
    simulate_latency(pool).await;
    info!("Added reminder {} for user {}.", reminder.id, user_id);
    reminder
}

/// Deletes the reminder matching both `id` and `user_id`.
///
/// # Errors
/// `Error::RecordNotFound` when no reminder matches the pair.
#[instrument(skip(pool))]
pub async fn delete_reminder(pool: &StorePool, id: RecordId, user_id: UserId) -> Result<()> {
    let result = records::remove::<Reminder>(pool, id, user_id);
    simulate_latency(pool).await;
    result?;
    info!("Deleted reminder {} for user {}.", id, user_id);
    Ok(())
}
