//! Expense records and their fixed category set.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{RecordId, UserId};

/// A single spend, owned by the user named in `user_id`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique within the expenses collection
    pub id: RecordId,
    /// Owning user
    pub user_id: UserId,
    /// Amount spent
    pub amount: f64,
    /// One of the fixed expense categories
    pub category: ExpenseCategory,
    /// Free-form note
    pub notes: String,
    /// When the expense happened
    pub date: DateTime<Utc>,
}

/// Fixed category set for expenses. Serialized as the display labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Groceries,
    Utilities,
    #[serde(rename = "Rent/Mortgage")]
    RentMortgage,
    Transportation,
    #[serde(rename = "Dining Out")]
    DiningOut,
    Entertainment,
    Shopping,
    Health,
    Travel,
    Other,
}

impl ExpenseCategory {
    /// Every expense category, in display order.
    pub const ALL: [Self; 10] = [
        Self::Groceries,
        Self::Utilities,
        Self::RentMortgage,
        Self::Transportation,
        Self::DiningOut,
        Self::Entertainment,
        Self::Shopping,
        Self::Health,
        Self::Travel,
        Self::Other,
    ];

    /// The category's display label, identical to its serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Groceries => "Groceries",
            Self::Utilities => "Utilities",
            Self::RentMortgage => "Rent/Mortgage",
            Self::Transportation => "Transportation",
            Self::DiningOut => "Dining Out",
            Self::Entertainment => "Entertainment",
            Self::Shopping => "Shopping",
            Self::Health => "Health",
            Self::Travel => "Travel",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-supplied fields for a new expense; id and owner are assigned on add.
#[derive(Clone, Debug)]
pub struct ExpenseForm {
    /// Amount spent
    pub amount: f64,
    /// One of the fixed expense categories
    pub category: ExpenseCategory,
    /// Free-form note
    pub notes: String,
    /// When the expense happened
    pub date: DateTime<Utc>,
}

impl ExpenseForm {
    /// Builds the stored record once the facade has assigned id and owner.
    #[must_use]
    pub fn into_expense(self, id: RecordId, user_id: UserId) -> Expense {
        Expense {
            id,
            user_id,
            amount: self.amount,
            category: self.category,
            notes: self.notes,
            date: self.date,
        }
    }
}

/// Partial update for an expense; `None` fields are left unchanged.
///
/// There is no way to patch `id` or `user_id`, so records cannot move
/// between users.
#[derive(Clone, Debug, Default)]
pub struct ExpensePatch {
    pub amount: Option<f64>,
    pub category: Option<ExpenseCategory>,
    pub notes: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

impl ExpensePatch {
    /// Overwrites the fields present in the patch, keeping the rest.
    pub fn apply(self, expense: &mut Expense) {
        if let Some(amount) = self.amount {
            expense.amount = amount;
        }
        if let Some(category) = self.category {
            expense.category = category;
        }
        if let Some(notes) = self.notes {
            expense.notes = notes;
        }
        if let Some(date) = self.date {
            expense.date = date;
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_category_labels_round_trip_through_json() {
        for category in ExpenseCategory::ALL {
            let encoded = serde_json::to_string(&category).unwrap();
            assert_eq!(encoded, format!("\"{}\"", category.as_str()));
            let decoded: ExpenseCategory = serde_json::from_str(&encoded).unwrap();
            assert_eq!(decoded, category);
        }
    }

    #[test]
    fn test_patch_applies_only_present_fields() {
        let form = ExpenseForm {
            amount: 12.0,
            category: ExpenseCategory::Groceries,
            notes: "Milk".to_string(),
            date: chrono::Utc::now(),
        };
        let mut expense = form.into_expense(1, 1);
        let original_date = expense.date;

        let patch = ExpensePatch {
            amount: Some(15.0),
            notes: Some("Milk and bread".to_string()),
            ..ExpensePatch::default()
        };
        patch.apply(&mut expense);

        assert_eq!(expense.amount, 15.0);
        assert_eq!(expense.notes, "Milk and bread");
        assert_eq!(expense.category, ExpenseCategory::Groceries);
        assert_eq!(expense.date, original_date);
        assert_eq!(expense.id, 1);
        assert_eq!(expense.user_id, 1);
    }
}
