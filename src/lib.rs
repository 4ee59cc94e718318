//! Budget Tracker - Terminal-based personal expense tracking
//!
//! This library provides the core functionality for the budget-tracker
//! application: a single-user expense log with per-category budget caps,
//! rendered as a terminal UI.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and the persisted first-visit flag
//! - `error`: Custom error types
//! - `models`: Core data models (money, categories, expenses)
//! - `store`: The in-memory record store (expense list + budget caps)
//! - `engine`: Pure derivations - aggregation and filtering/sorting
//! - `tui`: The ratatui terminal interface
//!
//! All expense and budget state is held in memory for the lifetime of a
//! session; the only persisted state is a one-time "has visited" flag
//! used to decide whether to show the onboarding tour.
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_tracker::store::ExpenseStore;
//! use budget_tracker::engine::aggregate;
//!
//! let store = ExpenseStore::with_sample_data();
//! let summary = aggregate::summarize(store.expenses(), store.budgets());
//! println!("spent {} of {}", summary.total_spent, summary.total_budget);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod store;
pub mod tui;

pub use error::TrackerError;
