//! The two fixed users sharing the tracker.
//!
//! Users are predefined and never created or destroyed at runtime; everything
//! else in the store is owned by one of them via `user_id`.

use serde::{Deserialize, Serialize};

use crate::models::UserId;

/// One of the two people using the tracker.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Stable identifier referenced by every record's `user_id`
    pub id: UserId,
    /// Display name
    pub username: String,
}

const USERS: [(UserId, &str); 2] = [(1, "Ash"), (2, "Anb")];

/// Returns both predefined users, in id order.
#[must_use]
pub fn predefined_users() -> [User; 2] {
    USERS.map(|(id, username)| User {
        id,
        username: username.to_string(),
    })
}

/// Looks up a predefined user by id.
#[must_use]
pub fn user_by_id(id: UserId) -> Option<User> {
    predefined_users().into_iter().find(|user| user.id == id)
}

/// Returns the predefined user that is not `id`.
///
/// With exactly two users this is always the partner; an unknown id falls
/// back to the first user.
#[must_use]
pub fn other_user(id: UserId) -> User {
    let [first, second] = predefined_users();
    if first.id == id { second } else { first }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predefined_users_are_fixed() {
        let [first, second] = predefined_users();
        assert_eq!(first.id, 1);
        assert_eq!(first.username, "Ash");
        assert_eq!(second.id, 2);
        assert_eq!(second.username, "Anb");
    }

    #[test]
    fn test_user_by_id() {
        assert_eq!(user_by_id(2).map(|user| user.username), Some("Anb".to_string()));
        assert!(user_by_id(3).is_none());
    }

    #[test]
    fn test_other_user_swaps_between_the_pair() {
        assert_eq!(other_user(1).id, 2);
        assert_eq!(other_user(2).id, 1);
    }
}
