//! Goal facade operations.
//!
//! Goals have no update operation and no combined listing; they are listed
//! per user in stored order, added, and deleted. Deletion is scoped to the
//! owner the same way expense deletion is.

use tracing::{debug, info, instrument};

use crate::core::records;
use crate::errors::Result;
use crate::models::{Goal, GoalForm, RecordId, UserId};
use crate::store::{StorePool, simulate_latency};

/// Retrieves one user's goals in stored order.
#[instrument(skip(pool))]
pub async fn get_goals(pool: &StorePool, user_id: UserId) -> Vec<Goal> {
    let goals = records::list_for_user::<Goal>(pool, user_id);
    simulate_latency(pool).await;
    debug!("Fetched {} goals for user {}.", goals.len(), user_id);
    goals
}

/// Stores a new goal for `user_id` under a fresh id and returns it.
#[instrument(skip(pool, form))]
pub async fn add_goal(pool: &StorePool, user_id: UserId, form: GoalForm) -> Goal {
    let goal = records::append(pool, |id| form.into_goal(id, user_id));
    simulate_latency(pool).await;
    info!("Added goal {} for user {}.", goal.id, user_id);
    goal
}

/// Deletes the goal matching both `id` and `user_id`.
///
/// # Errors
/// `Error::RecordNotFound` when no goal matches the pair.
#[instrument(skip(pool))]
pub async fn delete_goal(pool: &StorePool, id: RecordId, user_id: UserId) -> Result<()> {
    let result = records::remove::<Goal>(pool, id, user_id);
    simulate_latency(pool).await;
    result?;
    info!("Deleted goal {} for user {}.", id, user_id);
    Ok(())
}
