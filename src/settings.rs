//! Reminder settings and the daily reminder mail link.
//!
//! A small user-facing surface beside the facade: when to be reminded, what
//! the reminder says, and where it goes. Each field persists under its own
//! key, and composing the reminder is just building a `mailto:` URL; no mail
//! is ever sent from here.

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::store::{StorePool, lock_store};

const REMINDER_TIME_KEY: &str = "nexus_reminder_time";
const REMINDER_MESSAGE_KEY: &str = "nexus_reminder_message";
const EMAIL_ASH_KEY: &str = "nexus_email_ash";
const EMAIL_ANB_KEY: &str = "nexus_email_anb";

const DEFAULT_REMINDER_TIME: &str = "20:00";
const DEFAULT_REMINDER_MESSAGE: &str = "Please add the expenses or investments to Nexus";

/// Daily reminder configuration for both users.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderSettings {
    /// Time of day the reminder should fire, as "HH:MM"
    pub reminder_time: String,
    /// Body of the reminder mail
    pub reminder_message: String,
    /// Ash's email address; empty means not configured
    pub email_ash: String,
    /// Anb's email address; empty means not configured
    pub email_anb: String,
}

impl Default for ReminderSettings {
    fn default() -> Self {
        Self {
            reminder_time: DEFAULT_REMINDER_TIME.to_string(),
            reminder_message: DEFAULT_REMINDER_MESSAGE.to_string(),
            email_ash: String::new(),
            email_anb: String::new(),
        }
    }
}

impl ReminderSettings {
    /// Loads settings from the store, falling back to defaults field by
    /// field. Missing or corrupt values degrade silently.
    #[must_use]
    pub fn load(pool: &StorePool) -> Self {
        let store = lock_store(pool);
        let defaults = Self::default();
        Self {
            reminder_time: store.get(REMINDER_TIME_KEY).unwrap_or(defaults.reminder_time),
            reminder_message: store
                .get(REMINDER_MESSAGE_KEY)
                .unwrap_or(defaults.reminder_message),
            email_ash: store.get(EMAIL_ASH_KEY).unwrap_or(defaults.email_ash),
            email_anb: store.get(EMAIL_ANB_KEY).unwrap_or(defaults.email_anb),
        }
    }

    /// Persists all four settings fields.
    #[instrument(skip(self, pool))]
    pub fn save(&self, pool: &StorePool) {
        let mut store = lock_store(pool);
        store.set(REMINDER_TIME_KEY, &self.reminder_time);
        store.set(REMINDER_MESSAGE_KEY, &self.reminder_message);
        store.set(EMAIL_ASH_KEY, &self.email_ash);
        store.set(EMAIL_ANB_KEY, &self.email_anb);
        drop(store);
        info!("Saved reminder settings.");
    }

    /// Builds the `mailto:` URL for the daily reminder.
    ///
    /// Recipients are the trimmed non-empty addresses joined by commas, the
    /// subject is fixed, and the message is percent-encoded into the body.
    /// Returns `None` when neither user has an address configured.
    #[must_use]
    pub fn mailto_link(&self) -> Option<String> {
        let recipients: Vec<&str> = [self.email_ash.trim(), self.email_anb.trim()]
            .into_iter()
            .filter(|email| !email.is_empty())
            .collect();
        if recipients.is_empty() {
            return None;
        }
        Some(format!(
            "mailto:{}?subject=Nexus Daily Reminder&body={}",
            recipients.join(","),
            urlencoding::encode(&self.reminder_message),
        ))
    }
}
