//! The in-memory record store
//!
//! Holds the ordered expense list and the budget cap mapping for the
//! lifetime of a session. The store is the single writer: all mutation
//! goes through `add_expense`, `delete_expense`, and `set_budget`, and
//! every derived value (totals, filtered views) is recomputed from it.

pub mod budget;

pub use budget::BudgetBook;

use chrono::NaiveDate;

use crate::models::{Category, Expense, ExpenseDraft, ExpenseId, Money};

/// The record store: ordered expenses plus budget caps
#[derive(Debug, Clone, Default)]
pub struct ExpenseStore {
    expenses: Vec<Expense>,
    budgets: BudgetBook,
}

impl ExpenseStore {
    /// Create an empty store with default budget caps
    pub fn new() -> Self {
        Self {
            expenses: Vec::new(),
            budgets: BudgetBook::with_default_caps(),
        }
    }

    /// Create a store seeded with the sample expenses shown on first launch
    pub fn with_sample_data() -> Self {
        let mut store = Self::new();
        for (description, dollars, category, date) in [
            ("Groceries", 120, Category::Food, "2025-04-01"),
            ("Electricity Bill", 85, Category::Utilities, "2025-04-03"),
            ("Movie Tickets", 30, Category::Entertainment, "2025-04-05"),
            ("Gas", 45, Category::Transportation, "2025-04-08"),
        ] {
            let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .expect("sample dates are well-formed");
            store.add_expense(ExpenseDraft::new(
                description,
                Money::from_dollars(dollars),
                category,
                date,
            ));
        }
        store
    }

    /// The ordered expense list
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// The budget cap mapping
    pub fn budgets(&self) -> &BudgetBook {
        &self.budgets
    }

    /// Add an expense, assigning the next id
    ///
    /// The id is one greater than the largest existing id, or 1 when the
    /// store is empty, and the record is appended at the end. Drafts are
    /// never rejected here; validation happens at the form layer.
    pub fn add_expense(&mut self, draft: ExpenseDraft) -> ExpenseId {
        let id = self.next_id();
        self.expenses.push(Expense::from_draft(id, draft));
        id
    }

    /// Delete the expense with the given id
    ///
    /// Returns false (not an error) when no such expense exists.
    pub fn delete_expense(&mut self, id: ExpenseId) -> bool {
        let before = self.expenses.len();
        self.expenses.retain(|e| e.id != id);
        self.expenses.len() != before
    }

    /// Replace the budget cap for a category
    ///
    /// Positivity of the cap is enforced at the form layer; the store
    /// accepts any non-negative amount.
    pub fn set_budget(&mut self, category: Category, cap: Money) {
        self.budgets.set(category, cap);
    }

    fn next_id(&self) -> ExpenseId {
        let max = self.expenses.iter().map(|e| e.id.0).max().unwrap_or(0);
        ExpenseId(max + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(description: &str, dollars: i64) -> ExpenseDraft {
        ExpenseDraft::new(
            description,
            Money::from_dollars(dollars),
            Category::Food,
            NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
        )
    }

    #[test]
    fn test_first_id_is_one() {
        let mut store = ExpenseStore::new();
        let id = store.add_expense(draft("Coffee", 4));
        assert_eq!(id, ExpenseId(1));
    }

    #[test]
    fn test_ids_strictly_increasing_across_adds_and_deletes() {
        let mut store = ExpenseStore::new();
        let mut seen = Vec::new();

        for i in 0..4 {
            seen.push(store.add_expense(draft("x", i + 1)));
        }
        // Delete from the middle and keep adding
        store.delete_expense(seen[1]);
        seen.push(store.add_expense(draft("y", 9)));
        store.delete_expense(seen[4]);
        seen.push(store.add_expense(draft("z", 9)));

        for pair in seen.windows(2) {
            assert!(pair[0] < pair[1], "{:?} not increasing", seen);
        }
    }

    #[test]
    fn test_add_then_delete_restores_list() {
        let mut store = ExpenseStore::with_sample_data();
        let before = store.expenses().to_vec();

        let id = store.add_expense(draft("Snacks", 12));
        assert_eq!(store.expenses().len(), before.len() + 1);

        assert!(store.delete_expense(id));
        assert_eq!(store.expenses(), &before[..]);
    }

    #[test]
    fn test_delete_missing_id_is_noop() {
        let mut store = ExpenseStore::with_sample_data();
        let before = store.expenses().to_vec();

        assert!(!store.delete_expense(ExpenseId(999)));
        assert_eq!(store.expenses(), &before[..]);
    }

    #[test]
    fn test_append_order_preserved() {
        let mut store = ExpenseStore::new();
        store.add_expense(draft("first", 1));
        store.add_expense(draft("second", 2));
        store.add_expense(draft("third", 3));

        let descriptions: Vec<_> = store.expenses().iter().map(|e| e.description.as_str()).collect();
        assert_eq!(descriptions, ["first", "second", "third"]);
    }

    #[test]
    fn test_sample_data() {
        let store = ExpenseStore::with_sample_data();
        assert_eq!(store.expenses().len(), 4);
        assert_eq!(store.expenses()[0].description, "Groceries");
        assert_eq!(store.expenses()[0].id, ExpenseId(1));
        assert_eq!(store.budgets().cap(Category::Food), Money::from_dollars(300));
    }

    #[test]
    fn test_set_budget_replaces() {
        let mut store = ExpenseStore::new();
        store.set_budget(Category::Entertainment, Money::from_dollars(75));
        assert_eq!(
            store.budgets().cap(Category::Entertainment),
            Money::from_dollars(75)
        );
    }
}
