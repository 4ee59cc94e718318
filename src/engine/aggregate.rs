//! Expense aggregation
//!
//! Pure functions computing per-category spend totals, overall totals,
//! remaining budget, and percent-used from the record store. All are a
//! single pass over the expense list.

use crate::models::{Category, Expense, Money};
use crate::store::BudgetBook;

/// Overall spending picture across all categories
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingSummary {
    pub total_spent: Money,
    pub total_budget: Money,
    pub remaining: Money,
    /// Percent of the total budget spent; 0.0 when the total budget is zero
    pub percent_spent: f64,
}

/// Spending picture for a single category
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary {
    pub category: Category,
    pub spent: Money,
    pub cap: Money,
    pub remaining: Money,
    /// Percent of the cap spent; 0.0 when the cap is zero
    pub percent_used: f64,
}

impl CategorySummary {
    /// Whether spending strictly exceeds the cap
    pub fn is_over_budget(&self) -> bool {
        self.spent > self.cap
    }
}

/// Sum of amounts for expenses in the given category; zero if none
pub fn total_for_category(expenses: &[Expense], category: Category) -> Money {
    expenses
        .iter()
        .filter(|e| e.category == category)
        .map(|e| e.amount)
        .sum()
}

/// Sum of all expense amounts
pub fn total_all(expenses: &[Expense]) -> Money {
    expenses.iter().map(|e| e.amount).sum()
}

/// Percent of a category's cap spent; 0.0 when the cap is zero
pub fn percent_used(expenses: &[Expense], budgets: &BudgetBook, category: Category) -> f64 {
    total_for_category(expenses, category).percent_of(budgets.cap(category))
}

/// Categories whose spending strictly exceeds their cap
pub fn over_budget_categories(expenses: &[Expense], budgets: &BudgetBook) -> Vec<Category> {
    Category::ALL
        .iter()
        .copied()
        .filter(|&c| total_for_category(expenses, c) > budgets.cap(c))
        .collect()
}

/// Compute the overall spending summary
pub fn summarize(expenses: &[Expense], budgets: &BudgetBook) -> SpendingSummary {
    let total_spent = total_all(expenses);
    let total_budget = budgets.total();
    SpendingSummary {
        total_spent,
        total_budget,
        remaining: total_budget - total_spent,
        percent_spent: total_spent.percent_of(total_budget),
    }
}

/// Compute the per-category summary for one category
pub fn category_summary(
    expenses: &[Expense],
    budgets: &BudgetBook,
    category: Category,
) -> CategorySummary {
    let spent = total_for_category(expenses, category);
    let cap = budgets.cap(category);
    CategorySummary {
        category,
        spent,
        cap,
        remaining: cap - spent,
        percent_used: spent.percent_of(cap),
    }
}

/// Per-category summaries for every category, in display order
pub fn category_summaries(expenses: &[Expense], budgets: &BudgetBook) -> Vec<CategorySummary> {
    Category::ALL
        .iter()
        .map(|&c| category_summary(expenses, budgets, c))
        .collect()
}

/// The `n` most recent expenses by date, newest first
pub fn recent(expenses: &[Expense], n: usize) -> Vec<Expense> {
    let mut sorted = expenses.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(n);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseDraft;
    use crate::store::ExpenseStore;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_sample_scenario() {
        // store = [{Food,120},{Utilities,85},{Entertainment,30},{Transportation,45}]
        let store = ExpenseStore::with_sample_data();

        assert_eq!(total_all(store.expenses()), Money::from_dollars(280));
        assert_eq!(
            total_for_category(store.expenses(), Category::Food),
            Money::from_dollars(120)
        );
        assert_eq!(
            percent_used(store.expenses(), store.budgets(), Category::Food),
            40.0
        );
    }

    #[test]
    fn test_total_all_equals_sum_over_categories() {
        let store = ExpenseStore::with_sample_data();

        let by_category: Money = Category::ALL
            .iter()
            .map(|&c| total_for_category(store.expenses(), c))
            .sum();

        assert_eq!(total_all(store.expenses()), by_category);
    }

    #[test]
    fn test_empty_category_totals_zero() {
        let store = ExpenseStore::with_sample_data();
        assert_eq!(
            total_for_category(store.expenses(), Category::Other),
            Money::zero()
        );
    }

    #[test]
    fn test_percent_used_zero_cap() {
        let mut store = ExpenseStore::new();
        store.set_budget(Category::Food, Money::zero());
        store.add_expense(ExpenseDraft::new(
            "Groceries",
            Money::from_dollars(50),
            Category::Food,
            date("2025-04-01"),
        ));

        // Zero cap yields 0% rather than a division error
        assert_eq!(percent_used(store.expenses(), store.budgets(), Category::Food), 0.0);
    }

    #[test]
    fn test_over_budget_categories() {
        let mut store = ExpenseStore::with_sample_data();
        assert!(over_budget_categories(store.expenses(), store.budgets()).is_empty());

        store.add_expense(ExpenseDraft::new(
            "Concert",
            Money::from_dollars(90),
            Category::Entertainment,
            date("2025-04-10"),
        ));

        assert_eq!(
            over_budget_categories(store.expenses(), store.budgets()),
            vec![Category::Entertainment]
        );
    }

    #[test]
    fn test_spending_exactly_at_cap_is_not_over() {
        let mut store = ExpenseStore::new();
        store.set_budget(Category::Food, Money::from_dollars(100));
        store.add_expense(ExpenseDraft::new(
            "Groceries",
            Money::from_dollars(100),
            Category::Food,
            date("2025-04-01"),
        ));

        assert!(over_budget_categories(store.expenses(), store.budgets()).is_empty());
    }

    #[test]
    fn test_summarize() {
        let store = ExpenseStore::with_sample_data();
        let summary = summarize(store.expenses(), store.budgets());

        assert_eq!(summary.total_spent, Money::from_dollars(280));
        assert_eq!(summary.total_budget, Money::from_dollars(850));
        assert_eq!(summary.remaining, Money::from_dollars(570));
        assert!((summary.percent_spent - 280.0 / 850.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_category_summaries_in_display_order() {
        let store = ExpenseStore::with_sample_data();
        let summaries = category_summaries(store.expenses(), store.budgets());

        let order: Vec<_> = summaries.iter().map(|s| s.category).collect();
        assert_eq!(order, Category::ALL.to_vec());

        let food = &summaries[0];
        assert_eq!(food.spent, Money::from_dollars(120));
        assert_eq!(food.remaining, Money::from_dollars(180));
        assert!(!food.is_over_budget());
    }

    #[test]
    fn test_recent_newest_first() {
        let store = ExpenseStore::with_sample_data();
        let last_two = recent(store.expenses(), 2);

        assert_eq!(last_two.len(), 2);
        assert_eq!(last_two[0].description, "Gas");
        assert_eq!(last_two[1].description, "Movie Tickets");
    }

    #[test]
    fn test_recent_handles_short_lists() {
        let store = ExpenseStore::with_sample_data();
        assert_eq!(recent(store.expenses(), 10).len(), 4);
        assert!(recent(&[], 5).is_empty());
    }
}
