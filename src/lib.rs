//! budget-tracker - personal income and expense tracking
//!
//! This library holds a list of income/expense entries, derives totals from
//! it, and persists it to a local key-value slot. It also classifies the
//! host viewport as narrow or wide.
//!
//! # Architecture
//!
//! - `config`: Data directory resolution and user settings
//! - `error`: Custom error types
//! - `models`: Entries, ids and month keys
//! - `storage`: Key-value storage contract with file and in-memory backends
//! - `services`: The budget store
//! - `reports`: Aggregate summaries
//! - `viewport`: Narrow-layout detection
//! - `display`, `cli`: Command-line front-end
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_tracker::models::EntryDraft;
//! use budget_tracker::services::BudgetStore;
//! use budget_tracker::storage::FileStore;
//!
//! let mut store = BudgetStore::open(FileStore::new(data_dir))?;
//! store.create(EntryDraft::expense(12.5, "Groceries", today))?;
//! println!("net: {}", store.net_total());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod viewport;

pub use error::{BudgetError, BudgetResult};
pub use services::BudgetStore;
