//! Investment facade operations.
//!
//! Mirrors the expense operations over the investments collection: same
//! degrade-to-empty reads, same merged not-found/wrong-user failure on
//! update and delete.

use tracing::{debug, info, instrument};

use crate::core::records;
use crate::errors::Result;
use crate::models::{Investment, InvestmentForm, InvestmentPatch, RecordId, UserId};
use crate::store::{StorePool, simulate_latency};

/// Retrieves one user's investments, newest first.
#[instrument(skip(pool))]
pub async fn get_investments(pool: &StorePool, user_id: UserId) -> Vec<Investment> {
    let mut investments = records::list_for_user::<Investment>(pool, user_id);
    sort_newest_first(&mut investments);
    simulate_latency(pool).await;
    debug!("Fetched {} investments for user {}.", investments.len(), user_id);
    investments
}

/// Retrieves both users' investments combined, newest first.
#[instrument(skip(pool))]
pub async fn get_all_investments(pool: &StorePool) -> Vec<Investment> {
    let mut investments = records::list_all::<Investment>(pool);
    sort_newest_first(&mut investments);
    simulate_latency(pool).await;
    debug!("Fetched {} investments across both users.", investments.len());
    investments
}

/// Stores a new investment for `user_id` under a fresh id and returns it.
#[instrument(skip(pool, form))]
pub async fn add_investment(pool: &StorePool, user_id: UserId, form: InvestmentForm) -> Investment {
    let investment = records::append(pool, |id| form.into_investment(id, user_id));
    simulate_latency(pool).await;
    info!("Added investment {} for user {}.", investment.id, user_id);
    investment
}

/// Applies a partial update to the investment matching both `id` and
/// `user_id` and returns the updated record.
///
/// # Errors
/// `Error::RecordNotFound` when no investment matches the pair.
#[instrument(skip(pool, patch))]
pub async fn update_investment(
    pool: &StorePool,
    id: RecordId,
    user_id: UserId,
    patch: InvestmentPatch,
) -> Result<Investment> {
    let result = records::modify(pool, id, user_id, |investment: &mut Investment| {
        patch.apply(investment);
    });
    simulate_latency(pool).await;
    let investment = result?;
    info!("Updated investment {} for user {}.", id, user_id);
    Ok(investment)
}

/// Deletes the investment matching both `id` and `user_id`.
///
/// # Errors
/// `Error::RecordNotFound` when no investment matches the pair.
#[instrument(skip(pool))]
pub async fn delete_investment(pool: &StorePool, id: RecordId, user_id: UserId) -> Result<()> {
    let result = records::remove::<Investment>(pool, id, user_id);
    simulate_latency(pool).await;
    result?;
    info!("Deleted investment {} for user {}.", id, user_id);
    Ok(())
}

/// Date-descending sort; ties keep their stored order.
fn sort_newest_first(investments: &mut [Investment]) {
    investments.sort_by(|a, b| b.date.cmp(&a.date));
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::errors::Error;
    use crate::models::InvestmentCategory;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_add_and_list_per_user() {
        let pool = setup_test_store();

        let added = add_investment(&pool, 2, sample_investment_form()).await;
        assert_eq!(added.user_id, 2);

        assert_eq!(get_investments(&pool, 2).await, vec![added]);
        assert!(get_investments(&pool, 1).await.is_empty());
    }

    #[tokio::test]
    async fn test_get_all_investments_sorts_newest_first() {
        let pool = setup_test_store();

        let mut older = sample_investment_form();
        older.date = utc_date(2024, 1, 10);
        let mut newer = sample_investment_form();
        newer.date = utc_date(2024, 4, 10);

        add_investment(&pool, 1, older).await;
        add_investment(&pool, 2, newer).await;

        let all = get_all_investments(&pool).await;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].date, utc_date(2024, 4, 10));
        assert_eq!(all[1].date, utc_date(2024, 1, 10));
    }

    #[tokio::test]
    async fn test_update_merges_patch_fields() {
        let pool = setup_test_store();
        let investment = add_investment(&pool, 1, sample_investment_form()).await;

        let patch = InvestmentPatch {
            amount: Some(750.0),
            category: Some(InvestmentCategory::Etfs),
            ..InvestmentPatch::default()
        };
        let updated = update_investment(&pool, investment.id, 1, patch).await.unwrap();

        assert_eq!(updated.amount, 750.0);
        assert_eq!(updated.category, InvestmentCategory::Etfs);
        assert_eq!(updated.notes, investment.notes);
    }

    #[tokio::test]
    async fn test_update_with_wrong_user_is_not_found() {
        let pool = setup_test_store();
        let investment = add_investment(&pool, 1, sample_investment_form()).await;

        let result = update_investment(&pool, investment.id, 2, InvestmentPatch::default()).await;
        assert!(matches!(result.unwrap_err(), Error::RecordNotFound { .. }));
        assert_eq!(get_investments(&pool, 1).await, vec![investment]);
    }

    #[tokio::test]
    async fn test_delete_scoped_to_owner() {
        let pool = setup_test_store();
        let investment = add_investment(&pool, 1, sample_investment_form()).await;

        let result = delete_investment(&pool, investment.id, 2).await;
        assert!(matches!(result.unwrap_err(), Error::RecordNotFound { .. }));

        delete_investment(&pool, investment.id, 1).await.unwrap();
        assert!(get_investments(&pool, 1).await.is_empty());
    }

    #[tokio::test]
    async fn test_seeded_store_lists_demo_investments() {
        let pool = setup_seeded_store();

        let user1 = get_investments(&pool, 1).await;
        assert_eq!(user1.len(), 1);
        assert_eq!(user1[0].category, InvestmentCategory::Stocks);
        assert_eq!(user1[0].amount, 500.0);

        let user2 = get_investments(&pool, 2).await;
        assert_eq!(user2.len(), 1);
        assert_eq!(user2[0].category, InvestmentCategory::Cryptocurrency);
    }
}
