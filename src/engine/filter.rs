//! Expense filtering and sorting
//!
//! Given a text query, an optional category filter, and a sort key and
//! direction, produces a derived ordered view of the expense list. The
//! view is recomputed in full on every input change; no incremental
//! state is kept.

use std::cmp::Ordering;
use std::fmt;

use crate::models::{Category, Expense};

/// Which field to sort by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Date,
    Amount,
    Description,
}

impl SortKey {
    /// The next key in cycle order (for the sort toggle)
    pub fn next(&self) -> SortKey {
        match self {
            SortKey::Date => SortKey::Amount,
            SortKey::Amount => SortKey::Description,
            SortKey::Description => SortKey::Date,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Date => write!(f, "Date"),
            SortKey::Amount => write!(f, "Amount"),
            SortKey::Description => write!(f, "Description"),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    /// Flip the direction
    pub fn toggled(&self) -> SortDirection {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Arrow indicator for display
    pub fn indicator(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

/// A filter/sort query over the expense list
///
/// Both filters are optional: an empty search string and a `None`
/// category each match everything. Matching expenses must satisfy both.
#[derive(Debug, Clone, Default)]
pub struct ExpenseQuery {
    /// Case-insensitive substring match over descriptions
    pub search: String,
    /// Category equality filter
    pub category: Option<Category>,
    pub sort_key: SortKey,
    pub direction: SortDirection,
}

impl ExpenseQuery {
    /// The default query: everything, newest first
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any filter is active
    pub fn is_filtered(&self) -> bool {
        !self.search.is_empty() || self.category.is_some()
    }

    /// Drop both filters, keeping the sort order
    pub fn clear_filters(&mut self) {
        self.search.clear();
        self.category = None;
    }

    /// Cycle the category filter: None -> Food -> ... -> Other -> None
    pub fn cycle_category(&mut self) {
        self.category = match self.category {
            None => Some(Category::ALL[0]),
            Some(Category::Other) => None,
            Some(c) => Some(c.next()),
        };
    }

    /// Apply the query, producing a new ordered sequence
    ///
    /// The sort is stable: ties keep their original relative order from
    /// the store (insertion order).
    pub fn apply(&self, expenses: &[Expense]) -> Vec<Expense> {
        let needle = self.search.to_lowercase();

        let mut result: Vec<Expense> = expenses
            .iter()
            .filter(|e| needle.is_empty() || e.description.to_lowercase().contains(&needle))
            .filter(|e| self.category.map_or(true, |c| e.category == c))
            .cloned()
            .collect();

        result.sort_by(|a, b| self.compare(a, b));
        result
    }

    fn compare(&self, a: &Expense, b: &Expense) -> Ordering {
        let ordering = match self.sort_key {
            SortKey::Date => a.date.cmp(&b.date),
            SortKey::Amount => a.amount.cmp(&b.amount),
            SortKey::Description => a
                .description
                .to_lowercase()
                .cmp(&b.description.to_lowercase()),
        };

        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}
