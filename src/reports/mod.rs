//! Reports module
//!
//! Aggregate views over the budget store.

pub mod summary;

pub use summary::{format_monthly_totals, BudgetSummary};
