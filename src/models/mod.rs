//! Record types for everything the tracker stores.
//!
//! Each record kind lives in its own file: the persisted struct, the form the
//! caller fills in to create one, and (for expenses and investments) the patch
//! applied on update. Ids and user ownership are assigned by the facade, never
//! by callers.

pub mod expense;
pub mod goal;
pub mod investment;
pub mod reminder;
pub mod user;

pub use expense::{Expense, ExpenseCategory, ExpenseForm, ExpensePatch};
pub use goal::{Goal, GoalForm};
pub use investment::{Investment, InvestmentCategory, InvestmentForm, InvestmentPatch};
pub use reminder::{Reminder, ReminderForm};
pub use user::{User, other_user, predefined_users, user_by_id};

/// Identifier for a stored record, unique within its collection.
pub type RecordId = i64;

/// Identifier for one of the two predefined users.
pub type UserId = i64;
