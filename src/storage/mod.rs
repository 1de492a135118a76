//! Durable key-value storage
//!
//! The budget store persists through the [`KeyValueStore`] contract: named
//! slots holding UTF-8 text. [`FileStore`] keeps one JSON file per slot;
//! [`MemoryStore`] keeps slots in a map and is used in tests and dry runs.

pub mod file;
pub mod file_io;
pub mod memory;

pub use file::FileStore;
pub use file_io::{read_optional, write_atomic};
pub use memory::MemoryStore;

use crate::error::BudgetResult;

/// A durable key-value slot store
pub trait KeyValueStore {
    /// Read the value of `key`, `None` when the slot is empty
    fn get(&self, key: &str) -> BudgetResult<Option<String>>;

    /// Replace the value of `key`
    fn set(&mut self, key: &str, value: &str) -> BudgetResult<()>;
}
