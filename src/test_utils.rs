//! Shared test utilities for `NexusTracker`.
//!
//! This module provides common helper functions for setting up test stores
//! and building sample records with sensible defaults.

#![allow(clippy::unwrap_used)]

use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeZone, Utc};
use tracing_subscriber::EnvFilter;

use crate::models::{
    ExpenseCategory, ExpenseForm, GoalForm, InvestmentCategory, InvestmentForm, ReminderForm,
};
use crate::store::{LocalStore, StorePool, seed};

/// Initializes test tracing once; safe to call from every test.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")),
        )
        .with_test_writer()
        .try_init();
}

/// Creates an empty in-memory store pool with zero latency.
/// This is the standard setup for facade tests.
#[must_use]
pub fn setup_test_store() -> StorePool {
    Arc::new(Mutex::new(LocalStore::open_in_memory()))
}

/// Creates an in-memory store pool populated with the demo dataset.
#[must_use]
pub fn setup_seeded_store() -> StorePool {
    let mut store = LocalStore::open_in_memory();
    seed::seed_demo_data(&mut store);
    Arc::new(Mutex::new(store))
}

/// Builds a fixed UTC timestamp at noon on the given day.
#[must_use]
pub fn utc_date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

/// Creates a test expense form with sensible defaults.
///
/// # Defaults
/// * `amount`: 50.0
/// * `category`: `Groceries`
/// * `notes`: `"Test expense"`
/// * `date`: 2024-06-01 noon UTC
#[must_use]
pub fn sample_expense_form() -> ExpenseForm {
    ExpenseForm {
        amount: 50.0,
        category: ExpenseCategory::Groceries,
        notes: "Test expense".to_string(),
        date: utc_date(2024, 6, 1),
    }
}

/// Creates a test investment form with sensible defaults.
///
/// # Defaults
/// * `amount`: 500.0
/// * `category`: `Stocks`
/// * `notes`: `"Test investment"`
/// * `date`: 2024-06-01 noon UTC
#[must_use]
pub fn sample_investment_form() -> InvestmentForm {
    InvestmentForm {
        amount: 500.0,
        category: InvestmentCategory::Stocks,
        notes: "Test investment".to_string(),
        date: utc_date(2024, 6, 1),
    }
}

/// Creates a test goal form with sensible defaults.
///
/// # Defaults
/// * `title`: `"Test goal"`
/// * `description`: `"A goal for tests"`
/// * `target_date`: 2025-01-01 noon UTC
#[must_use]
pub fn sample_goal_form() -> GoalForm {
    GoalForm {
        title: "Test goal".to_string(),
        description: "A goal for tests".to_string(),
        target_date: utc_date(2025, 1, 1),
    }
}

/// Creates a test reminder form with sensible defaults.
///
/// # Defaults
/// * `note`: `"Test reminder"`
/// * `due_date`: 2024-12-25 noon UTC
#[must_use]
pub fn sample_reminder_form() -> ReminderForm {
    ReminderForm {
        note: "Test reminder".to_string(),
        due_date: utc_date(2024, 12, 25),
    }
}
