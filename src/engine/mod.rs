//! Pure derivations over the record store
//!
//! Nothing in this module holds state: aggregation and filtering are
//! recomputed in full from the store on every call.

pub mod aggregate;
pub mod filter;

pub use filter::{ExpenseQuery, SortDirection, SortKey};
