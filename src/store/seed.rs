//! One-time demo dataset for a fresh store.
//!
//! On first run the four collections are populated with a few records per
//! user so the dashboard has something to show, then a flag is set so the
//! seed never runs again for that store.

use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};
use tracing::{debug, info, instrument};

use crate::models::{Expense, ExpenseCategory, Goal, Investment, InvestmentCategory, Reminder};
use crate::store::{Collection, LocalStore};

/// Flag key marking a store as already seeded.
const SEEDED_KEY: &str = "seeded";

/// Populates an unseeded store with the demo dataset and sets the seed flag.
/// Idempotent: a store that carries the flag is left untouched.
#[instrument(skip(store))]
pub fn seed_demo_data(store: &mut LocalStore) {
    if store.get::<bool>(SEEDED_KEY).unwrap_or(false) {
        debug!("Store already seeded, skipping demo data.");
        return;
    }

    info!("Seeding demo data into a fresh store.");
    let now = Utc::now();
    store.set(Collection::Expenses.key(), &demo_expenses(now));
    store.set(Collection::Investments.key(), &demo_investments(now));
    store.set(Collection::Goals.key(), &demo_goals(now));
    store.set(Collection::Reminders.key(), &demo_reminders(now));
    store.set(SEEDED_KEY, &true);
    info!("Demo data seeded for both users.");
}

fn demo_expenses(now: DateTime<Utc>) -> Vec<Expense> {
    vec![
        Expense {
            id: 1,
            user_id: 1,
            amount: 75.50,
            category: ExpenseCategory::Groceries,
            notes: "Weekly shopping".to_string(),
            date: now - Duration::days(5),
        },
        Expense {
            id: 2,
            user_id: 2,
            amount: 120.00,
            category: ExpenseCategory::Utilities,
            notes: "Electricity bill".to_string(),
            date: now - Duration::days(15),
        },
        Expense {
            id: 3,
            user_id: 1,
            amount: 45.00,
            category: ExpenseCategory::DiningOut,
            notes: "Dinner with friends".to_string(),
            date: now - Duration::days(17),
        },
        Expense {
            id: 4,
            user_id: 2,
            amount: 30.00,
            category: ExpenseCategory::Transportation,
            notes: "Gas for car".to_string(),
            date: now - Duration::days(20),
        },
    ]
}

fn demo_investments(now: DateTime<Utc>) -> Vec<Investment> {
    vec![
        Investment {
            id: 1,
            user_id: 1,
            amount: 500.00,
            category: InvestmentCategory::Stocks,
            notes: "Invested in AAPL".to_string(),
            date: now - Duration::days(35),
        },
        Investment {
            id: 2,
            user_id: 2,
            amount: 1000.00,
            category: InvestmentCategory::Cryptocurrency,
            notes: "Bought Bitcoin".to_string(),
            date: now - Duration::days(55),
        },
    ]
}

fn demo_goals(now: DateTime<Utc>) -> Vec<Goal> {
    vec![
        Goal {
            id: 1,
            user_id: 1,
            title: "Save for vacation".to_string(),
            description: "Save €1000 for a trip to Hawaii".to_string(),
            target_date: day_in_month(now, 3, 1),
        },
        Goal {
            id: 2,
            user_id: 2,
            title: "Learn React Native".to_string(),
            description: "Complete a full course by end of the year".to_string(),
            target_date: end_of_year(now),
        },
    ]
}

fn demo_reminders(now: DateTime<Utc>) -> Vec<Reminder> {
    vec![
        Reminder {
            id: 1,
            user_id: 1,
            note: "Pay credit card bill".to_string(),
            due_date: day_in_month(now, 0, 25),
        },
        Reminder {
            id: 2,
            user_id: 2,
            note: "Doctor's appointment".to_string(),
            due_date: day_in_month(now, 1, 5),
        },
    ]
}

/// Midnight UTC on `day` of the month `months_ahead` months after `now`.
fn day_in_month(now: DateTime<Utc>, months_ahead: u32, day: u32) -> DateTime<Utc> {
    let months_total = now.month0() + months_ahead;
    let year = now.year() + i32::try_from(months_total / 12).unwrap_or(0);
    let month = months_total % 12 + 1;
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or(now)
}

/// Midnight UTC on December 31st of `now`'s year.
fn end_of_year(now: DateTime<Utc>) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(now.year(), 12, 31, 0, 0, 0)
        .single()
        .unwrap_or(now)
}
