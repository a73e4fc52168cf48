//! Aggregation helpers and the dashboard summary.
//!
//! The helpers are pure single-pass functions over already-fetched records;
//! the dashboard summary is the one composite operation, gathering a user's
//! four collections concurrently so their simulated latencies overlap.

use serde::Serialize;
use tracing::instrument;

use crate::core::{expenses, goals, investments, reminders};
use crate::models::{Expense, Goal, Investment, Reminder, UserId};
use crate::store::StorePool;

/// How many goals and reminders the dashboard previews.
const PREVIEW_LIMIT: usize = 5;

/// Records that carry an amount under a category label.
pub trait Categorized {
    /// The category's display label.
    fn category_label(&self) -> &'static str;
    /// The record's amount.
    fn amount(&self) -> f64;
}

impl Categorized for Expense {
    fn category_label(&self) -> &'static str {
        self.category.as_str()
    }
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Categorized for Investment {
    fn category_label(&self) -> &'static str {
        self.category.as_str()
    }
    fn amount(&self) -> f64 {
        self.amount
    }
}

/// One category's summed amount, ready for a chart or table row.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CategoryTotal {
    /// Category display label
    pub category: &'static str,
    /// Sum of the category's record amounts
    pub total: f64,
}

/// Sums record amounts per category.
///
/// Categories appear in the order they are first seen in `records`; an empty
/// input yields an empty breakdown.
#[must_use]
pub fn sum_by_category<T: Categorized>(records: &[T]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for record in records {
        let label = record.category_label();
        match totals.iter_mut().find(|entry| entry.category == label) {
            Some(entry) => entry.total += record.amount(),
            None => totals.push(CategoryTotal {
                category: label,
                total: record.amount(),
            }),
        }
    }
    totals
}

/// Sums all record amounts. Empty input yields zero.
#[must_use]
pub fn total_amount<T: Categorized>(records: &[T]) -> f64 {
    records.iter().map(Categorized::amount).sum()
}

/// Snapshot of one user's finances for the dashboard.
#[derive(Clone, Debug)]
pub struct DashboardSummary {
    /// Sum of the user's expenses
    pub total_expenses: f64,
    /// Sum of the user's investments
    pub total_investments: f64,
    /// Expense breakdown in first-seen category order
    pub expenses_by_category: Vec<CategoryTotal>,
    /// Investment breakdown in first-seen category order
    pub investments_by_category: Vec<CategoryTotal>,
    /// The first few goals, as stored
    pub goals_preview: Vec<Goal>,
    /// The first few reminders, as stored
    pub reminders_preview: Vec<Reminder>,
}

/// Assembles the dashboard snapshot for one user.
///
/// The four collection fetches run concurrently, so the summary costs one
/// simulated round trip rather than four.
#[instrument(skip(pool))]
pub async fn dashboard_summary(pool: &StorePool, user_id: UserId) -> DashboardSummary {
    let (expense_list, investment_list, mut goal_list, mut reminder_list) = tokio::join!(
        expenses::get_expenses(pool, user_id),
        investments::get_investments(pool, user_id),
        goals::get_goals(pool, user_id),
        reminders::get_reminders(pool, user_id),
    );
    goal_list.truncate(PREVIEW_LIMIT);
    reminder_list.truncate(PREVIEW_LIMIT);

    DashboardSummary {
        total_expenses: total_amount(&expense_list),
        total_investments: total_amount(&investment_list),
        expenses_by_category: sum_by_category(&expense_list),
        investments_by_category: sum_by_category(&investment_list),
        goals_preview: goal_list,
        reminders_preview: reminder_list,
    }
}
