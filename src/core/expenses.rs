//! Expense facade operations.
//!
//! All functions are async, take the shared store pool, and sleep the
//! simulated backend latency before returning. Listing and adding cannot
//! fail: storage trouble degrades to empty reads and dropped writes inside
//! the store. Only update and delete return a `Result`, and their only
//! failure is the merged not-found/wrong-user case.

use tracing::{debug, info, instrument};

use crate::core::records;
use crate::errors::Result;
use crate::models::{Expense, ExpenseForm, ExpensePatch, RecordId, UserId};
use crate::store::{StorePool, simulate_latency};

/// Retrieves one user's expenses, newest first.
#[instrument(skip(pool))]
pub async fn get_expenses(pool: &StorePool, user_id: UserId) -> Vec<Expense> {
    let mut expenses = records::list_for_user::<Expense>(pool, user_id);
    sort_newest_first(&mut expenses);
    simulate_latency(pool).await;
    debug!("Fetched {} expenses for user {}.", expenses.len(), user_id);
    expenses
}

/// Retrieves both users' expenses combined, newest first.
///
/// This is the joint view of the household's spending; per-user queries go
/// through [`get_expenses`].
#[instrument(skip(pool))]
pub async fn get_all_expenses(pool: &StorePool) -> Vec<Expense> {
    let mut expenses = records::list_all::<Expense>(pool);
    sort_newest_first(&mut expenses);
    simulate_latency(pool).await;
    debug!("Fetched {} expenses across both users.", expenses.len());
    expenses
}

/// Stores a new expense for `user_id` under a fresh id and returns it.
#[instrument(skip(pool, form))]
pub async fn add_expense(pool: &StorePool, user_id: UserId, form: ExpenseForm) -> Expense {
    let expense = records::append(pool, |id| form.into_expense(id, user_id));
    simulate_latency(pool).await;
    info!("Added expense {} for user {}.", expense.id, user_id);
    expense
}

/// Applies a partial update to the expense matching both `id` and `user_id`
/// and returns the updated record.
///
/// # Errors
/// `Error::RecordNotFound` when no expense matches the pair; the caller
/// cannot tell a missing id from one owned by the other user.
#[instrument(skip(pool, patch))]
pub async fn update_expense(
    pool: &StorePool,
    id: RecordId,
    user_id: UserId,
    patch: ExpensePatch,
) -> Result<Expense> {
    let result = records::modify(pool, id, user_id, |expense: &mut Expense| patch.apply(expense));
    simulate_latency(pool).await;
    let expense = result?;
    info!("Updated expense {} for user {}.", id, user_id);
    Ok(expense)
}

/// Deletes the expense matching both `id` and `user_id`.
///
/// # Errors
/// `Error::RecordNotFound` under the same merged condition as
/// [`update_expense`].
#[instrument(skip(pool))]
pub async fn delete_expense(pool: &StorePool, id: RecordId, user_id: UserId) -> Result<()> {
    let result = records::remove::<Expense>(pool, id, user_id);
    simulate_latency(pool).await;
    result?;
    info!("Deleted expense {} for user {}.", id, user_id);
    Ok(())
}

/// Date-descending sort; ties keep their stored order.
fn sort_newest_first(expenses: &mut [Expense]) {
    expenses.sort_by(|a, b| b.date.cmp(&a.date));
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::errors::Error;
    use crate::models::ExpenseCategory;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_add_then_get_returns_the_stored_expense() {
        let pool = setup_test_store();

        let mut form = sample_expense_form();
        form.amount = 75.50;
        form.category = ExpenseCategory::Groceries;
        form.date = utc_date(2024, 1, 1);
        let added = add_expense(&pool, 1, form).await;

        assert_eq!(added.user_id, 1);
        assert!(added.id >= 1);

        let listed = get_expenses(&pool, 1).await;
        assert_eq!(listed, vec![added]);

        // The other user is unaffected
        assert!(get_expenses(&pool, 2).await.is_empty());
    }

    #[tokio::test]
    async fn test_get_expenses_filters_by_user() {
        let pool = setup_test_store();

        add_expense(&pool, 1, sample_expense_form()).await;
        add_expense(&pool, 2, sample_expense_form()).await;
        add_expense(&pool, 1, sample_expense_form()).await;

        let user1 = get_expenses(&pool, 1).await;
        assert_eq!(user1.len(), 2);
        assert!(user1.iter().all(|expense| expense.user_id == 1));

        let user2 = get_expenses(&pool, 2).await;
        assert_eq!(user2.len(), 1);
        assert!(user2.iter().all(|expense| expense.user_id == 2));
    }

    #[tokio::test]
    async fn test_get_expenses_sorts_newest_first() {
        let pool = setup_test_store();

        let mut oldest = sample_expense_form();
        oldest.date = utc_date(2024, 1, 1);
        let mut newest = sample_expense_form();
        newest.date = utc_date(2024, 3, 1);
        let mut middle = sample_expense_form();
        middle.date = utc_date(2024, 2, 1);

        add_expense(&pool, 1, oldest).await;
        add_expense(&pool, 1, newest).await;
        add_expense(&pool, 1, middle).await;

        let dates: Vec<_> = get_expenses(&pool, 1)
            .await
            .into_iter()
            .map(|expense| expense.date)
            .collect();
        assert_eq!(
            dates,
            vec![utc_date(2024, 3, 1), utc_date(2024, 2, 1), utc_date(2024, 1, 1)]
        );
    }

    #[tokio::test]
    async fn test_equal_dates_keep_stored_order() {
        let pool = setup_test_store();

        let mut first = sample_expense_form();
        first.date = utc_date(2024, 5, 10);
        first.notes = "first".to_string();
        let mut second = sample_expense_form();
        second.date = utc_date(2024, 5, 10);
        second.notes = "second".to_string();

        add_expense(&pool, 1, first).await;
        add_expense(&pool, 1, second).await;

        let notes: Vec<_> = get_expenses(&pool, 1)
            .await
            .into_iter()
            .map(|expense| expense.notes)
            .collect();
        assert_eq!(notes, vec!["first".to_string(), "second".to_string()]);
    }

    #[tokio::test]
    async fn test_get_all_expenses_spans_both_users() {
        let pool = setup_test_store();

        let mut older = sample_expense_form();
        older.date = utc_date(2024, 1, 5);
        let mut newer = sample_expense_form();
        newer.date = utc_date(2024, 2, 5);

        add_expense(&pool, 1, older).await;
        add_expense(&pool, 2, newer).await;

        let all = get_all_expenses(&pool).await;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].user_id, 2);
        assert_eq!(all[1].user_id, 1);
    }

    #[tokio::test]
    async fn test_rapid_adds_assign_distinct_ascending_ids() {
        let pool = setup_test_store();

        let a = add_expense(&pool, 1, sample_expense_form()).await;
        let b = add_expense(&pool, 1, sample_expense_form()).await;
        let c = add_expense(&pool, 2, sample_expense_form()).await;

        assert_eq!((a.id, b.id, c.id), (1, 2, 3));
    }

    #[tokio::test]
    async fn test_ids_continue_past_the_seeded_records() {
        let pool = setup_seeded_store();

        let added = add_expense(&pool, 1, sample_expense_form()).await;
        assert_eq!(added.id, 5);
    }

    #[tokio::test]
    async fn test_update_merges_only_patch_fields() {
        let pool = setup_test_store();

        let mut form = sample_expense_form();
        form.amount = 20.0;
        form.notes = "Lunch".to_string();
        let expense = add_expense(&pool, 1, form).await;

        let patch = ExpensePatch {
            amount: Some(25.0),
            ..ExpensePatch::default()
        };
        let updated = update_expense(&pool, expense.id, 1, patch).await.unwrap();

        assert_eq!(updated.amount, 25.0);
        assert_eq!(updated.notes, "Lunch");
        assert_eq!(updated.category, expense.category);
        assert_eq!(updated.date, expense.date);

        // The merge is persisted, not just returned
        let listed = get_expenses(&pool, 1).await;
        assert_eq!(listed[0].amount, 25.0);
    }

    #[tokio::test]
    async fn test_update_with_wrong_user_is_not_found() {
        let pool = setup_test_store();
        let expense = add_expense(&pool, 1, sample_expense_form()).await;

        let result = update_expense(&pool, expense.id, 2, ExpensePatch::default()).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::RecordNotFound { id, .. } if id == expense.id
        ));

        // The record is untouched
        assert_eq!(get_expenses(&pool, 1).await, vec![expense]);
    }

    #[tokio::test]
    async fn test_update_missing_id_is_not_found() {
        let pool = setup_test_store();

        let result = update_expense(&pool, 999, 1, ExpensePatch::default()).await;
        assert!(matches!(result.unwrap_err(), Error::RecordNotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_removes_the_expense() {
        let pool = setup_test_store();

        let keep = add_expense(&pool, 1, sample_expense_form()).await;
        let gone = add_expense(&pool, 1, sample_expense_form()).await;

        delete_expense(&pool, gone.id, 1).await.unwrap();

        let remaining = get_expenses(&pool, 1).await;
        assert_eq!(remaining, vec![keep]);
    }

    #[tokio::test]
    async fn test_delete_with_wrong_user_is_not_found_and_keeps_the_record() {
        let pool = setup_test_store();
        let expense = add_expense(&pool, 1, sample_expense_form()).await;

        let result = delete_expense(&pool, expense.id, 2).await;
        assert!(matches!(result.unwrap_err(), Error::RecordNotFound { .. }));
        assert_eq!(get_expenses(&pool, 1).await.len(), 1);
    }

    #[tokio::test]
    async fn test_corrupt_collection_reads_as_empty() {
        let pool = setup_test_store();
        crate::store::lock_store(&pool).set_raw_for_test("expenses", "going nowhere");

        assert!(get_expenses(&pool, 1).await.is_empty());

        // And adding starts the collection over from id 1
        let added = add_expense(&pool, 1, sample_expense_form()).await;
        assert_eq!(added.id, 1);
    }
}
