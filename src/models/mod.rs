//! Core data models for the budget tracker

pub mod entry;
pub mod ids;
pub mod month;

pub use entry::{parse_iso_date, BudgetEntry, EntryDraft, EntryKind};
pub use ids::EntryId;
pub use month::MonthKey;
