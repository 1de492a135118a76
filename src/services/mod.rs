//! Business logic layer

pub mod budget;

pub use budget::{BudgetStore, EntryFilter, BUDGETS_KEY};
