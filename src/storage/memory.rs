//! In-memory key-value store

use std::collections::HashMap;

use crate::error::BudgetResult;

use super::KeyValueStore;

/// Key-value store held in a map, counting writes
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with one slot pre-filled
    pub fn with_slot(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut slots = HashMap::new();
        slots.insert(key.into(), value.into());
        Self { slots, writes: 0 }
    }

    /// Number of `set` calls so far
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn slot(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> BudgetResult<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> BudgetResult<()> {
        self.writes += 1;
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
