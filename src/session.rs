//! Current-user selection, persisted next to the tracked data.
//!
//! The session holder is a peer of the persistence facade, not part of it:
//! its reads and writes are immediate, with no simulated latency. Which user
//! is active is an explicit object passed around by the caller, never global
//! state.

use tracing::{info, instrument};

use crate::models::{User, other_user};
use crate::store::{StorePool, lock_store};

/// Storage key for the signed-in user.
const CURRENT_USER_KEY: &str = "nexus_user";

/// Owns which of the two predefined users is active.
#[derive(Clone)]
pub struct Session {
    pool: StorePool,
}

impl Session {
    /// Creates a session over the shared store.
    #[must_use]
    pub const fn new(pool: StorePool) -> Self {
        Self { pool }
    }

    /// The persisted current user, or `None` when signed out.
    ///
    /// A corrupt stored value reads as signed out, like any other degraded
    /// store read.
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        lock_store(&self.pool).get(CURRENT_USER_KEY)
    }

    /// Persists `user` as current, or signs out when given `None`.
    #[instrument(skip(self, user))]
    pub fn set_current_user(&self, user: Option<&User>) {
        match user {
            Some(user) => {
                lock_store(&self.pool).set(CURRENT_USER_KEY, user);
                info!("Current user set to '{}'.", user.username);
            }
            None => {
                lock_store(&self.pool).remove(CURRENT_USER_KEY);
                info!("Current user cleared.");
            }
        }
    }

    /// Switches to the other predefined user, persists, and returns it.
    ///
    /// A no-op returning `None` when nobody is signed in.
    pub fn switch_to_other_user(&self) -> Option<User> {
        let current = self.current_user()?;
        let other = other_user(current.id);
        self.set_current_user(Some(&other));
        Some(other)
    }
}
