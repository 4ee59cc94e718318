//! Expense record model
//!
//! An expense is a single logged transaction: what was bought, how much it
//! cost, which category it belongs to, and when. Records are immutable
//! after creation and destroyed only by explicit delete.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::money::Money;

/// Unique identifier for an expense record
///
/// Ids are plain integers assigned monotonically by the store
/// (max existing + 1), never reused within a session.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ExpenseId(pub u64);

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A logged expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// What the money was spent on
    pub description: String,

    /// Amount spent (positive)
    pub amount: Money,

    /// The category this expense belongs to
    pub category: Category,

    /// Transaction date
    pub date: NaiveDate,
}

impl Expense {
    /// Create an expense from a draft with an assigned id
    pub fn from_draft(id: ExpenseId, draft: ExpenseDraft) -> Self {
        Self {
            id,
            description: draft.description,
            amount: draft.amount,
            category: draft.category,
            date: draft.date,
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.amount,
            self.category
        )
    }
}

/// An expense as entered in the form, before an id is assigned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseDraft {
    pub description: String,
    pub amount: Money,
    pub category: Category,
    pub date: NaiveDate,
}

impl ExpenseDraft {
    /// Create a new draft
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        category: Category,
        date: NaiveDate,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            category,
            date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 1).unwrap()
    }

    #[test]
    fn test_from_draft() {
        let draft = ExpenseDraft::new("Groceries", Money::from_dollars(120), Category::Food, test_date());
        let expense = Expense::from_draft(ExpenseId(1), draft.clone());

        assert_eq!(expense.id, ExpenseId(1));
        assert_eq!(expense.description, draft.description);
        assert_eq!(expense.amount, draft.amount);
        assert_eq!(expense.category, Category::Food);
        assert_eq!(expense.date, test_date());
    }

    #[test]
    fn test_display() {
        let expense = Expense::from_draft(
            ExpenseId(3),
            ExpenseDraft::new("Movie Tickets", Money::from_dollars(30), Category::Entertainment, test_date()),
        );
        assert_eq!(
            format!("{}", expense),
            "2025-04-01 Movie Tickets $30.00 (Entertainment)"
        );
    }

    #[test]
    fn test_serialization() {
        let expense = Expense::from_draft(
            ExpenseId(2),
            ExpenseDraft::new("Gas", Money::from_dollars(45), Category::Transportation, test_date()),
        );

        let json = serde_json::to_string(&expense).unwrap();
        let deserialized: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(expense, deserialized);
    }
}
