//! Investment records and their fixed category set.
//!
//! Same shape and ownership rules as expenses, kept as a separate collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{RecordId, UserId};

/// A single investment, owned by the user named in `user_id`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Investment {
    /// Unique within the investments collection
    pub id: RecordId,
    /// Owning user
    pub user_id: UserId,
    /// Amount invested
    pub amount: f64,
    /// One of the fixed investment categories
    pub category: InvestmentCategory,
    /// Free-form note
    pub notes: String,
    /// When the investment was made
    pub date: DateTime<Utc>,
}

/// Fixed category set for investments. Serialized as the display labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvestmentCategory {
    Stocks,
    #[serde(rename = "Mutual Funds")]
    MutualFunds,
    Cryptocurrency,
    #[serde(rename = "Real Estate")]
    RealEstate,
    Bonds,
    #[serde(rename = "ETFs")]
    Etfs,
    Other,
}

impl InvestmentCategory {
    /// Every investment category, in display order.
    pub const ALL: [Self; 7] = [
        Self::Stocks,
        Self::MutualFunds,
        Self::Cryptocurrency,
        Self::RealEstate,
        Self::Bonds,
        Self::Etfs,
        Self::Other,
    ];

    /// The category's display label, identical to its serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stocks => "Stocks",
            Self::MutualFunds => "Mutual Funds",
            Self::Cryptocurrency => "Cryptocurrency",
            Self::RealEstate => "Real Estate",
            Self::Bonds => "Bonds",
            Self::Etfs => "ETFs",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for InvestmentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-supplied fields for a new investment; id and owner are assigned on add.
#[derive(Clone, Debug)]
pub struct InvestmentForm {
    /// Amount invested
    pub amount: f64,
    /// One of the fixed investment categories
    pub category: InvestmentCategory,
    /// Free-form note
    pub notes: String,
    /// When the investment was made
    pub date: DateTime<Utc>,
}

impl InvestmentForm {
    /// Builds the stored record once the facade has assigned id and owner.
    #[must_use]
    pub fn into_investment(self, id: RecordId, user_id: UserId) -> Investment {
        Investment {
            id,
            user_id,
            amount: self.amount,
            category: self.category,
            notes: self.notes,
            date: self.date,
        }
    }
}

/// Partial update for an investment; `None` fields are left unchanged.
#[derive(Clone, Debug, Default)]
pub struct InvestmentPatch {
    pub amount: Option<f64>,
    pub category: Option<InvestmentCategory>,
    pub notes: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

impl InvestmentPatch {
    /// Overwrites the fields present in the patch, keeping the rest.
    pub fn apply(self, investment: &mut Investment) {
        if let Some(amount) = self.amount {
            investment.amount = amount;
        }
        if let Some(category) = self.category {
            investment.category = category;
        }
        if let Some(notes) = self.notes {
            investment.notes = notes;
        }
        if let Some(date) = self.date {
            investment.date = date;
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_multi_word_labels_serialize_exactly() {
        let encoded = serde_json::to_string(&InvestmentCategory::MutualFunds).unwrap();
        assert_eq!(encoded, "\"Mutual Funds\"");
        let encoded = serde_json::to_string(&InvestmentCategory::RealEstate).unwrap();
        assert_eq!(encoded, "\"Real Estate\"");
        let encoded = serde_json::to_string(&InvestmentCategory::Etfs).unwrap();
        assert_eq!(encoded, "\"ETFs\"");
    }

    #[test]
    fn test_patch_keeps_absent_fields() {
        let form = InvestmentForm {
            amount: 250.0,
            category: InvestmentCategory::Bonds,
            notes: "Treasury".to_string(),
            date: chrono::Utc::now(),
        };
        let mut investment = form.into_investment(7, 2);

        InvestmentPatch {
            category: Some(InvestmentCategory::Etfs),
            ..InvestmentPatch::default()
        }
        .apply(&mut investment);

        assert_eq!(investment.category, InvestmentCategory::Etfs);
        assert_eq!(investment.notes, "Treasury");
        assert_eq!(investment.user_id, 2);
    }
}
