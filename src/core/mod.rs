//! Core business logic: the persistence facade and reporting.
//!
//! Each record kind gets its own module of free async functions over the
//! shared store pool; `records` holds the generic plumbing they share, and
//! `report` builds aggregates on top of the fetched data.

/// Expense operations: list, list-all, add, update, delete
pub mod expenses;
/// Goal operations: list, add, delete
pub mod goals;
/// Investment operations: list, list-all, add, update, delete
pub mod investments;
pub(crate) mod records;
/// Reminder operations: list, add, delete
pub mod reminders;
/// Aggregation helpers and the dashboard summary
pub mod report;
