//! File-backed key-value store
//!
//! Slot `key` lives in `<dir>/<key>.json` and is replaced atomically on
//! every write.

use std::path::PathBuf;

use crate::config::paths::BudgetPaths;
use crate::error::{BudgetError, BudgetResult};

use super::file_io::{read_optional, write_atomic};
use super::KeyValueStore;

/// Key-value store keeping one file per slot in a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store over `dir`; the directory is created on first write
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Store rooted at the configured data directory
    pub fn from_paths(paths: &BudgetPaths) -> BudgetResult<Self> {
        paths.ensure_directories()?;
        Ok(Self::new(paths.data_dir()))
    }

    /// Path of the file backing `key`
    pub fn slot_path(&self, key: &str) -> BudgetResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(BudgetError::Storage(format!("Invalid slot key: {:?}", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> BudgetResult<Option<String>> {
        read_optional(self.slot_path(key)?)
    }

    fn set(&mut self, key: &str, value: &str) -> BudgetResult<()> {
        let path = self.slot_path(key)?;
        tracing::debug!(path = %path.display(), bytes = value.len(), "writing slot");
        write_atomic(path, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_slot() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().to_path_buf());

        assert_eq!(store.get("budgets").unwrap(), None);
    }

    #[test]
    fn test_set_then_get() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileStore::new(temp_dir.path().join("data"));

        store.set("budgets", "[]").unwrap();

        assert_eq!(store.get("budgets").unwrap().as_deref(), Some("[]"));
        assert!(temp_dir.path().join("data").join("budgets.json").exists());
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileStore::new(temp_dir.path().to_path_buf());

        assert!(store.set("../escape", "x").is_err());
        assert!(store.get("").is_err());
    }

    #[test]
    fn test_from_paths_creates_data_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());

        let store = FileStore::from_paths(&paths).unwrap();

        assert!(paths.data_dir().exists());
        assert_eq!(
            store.slot_path("budgets").unwrap(),
            paths.data_dir().join("budgets.json")
        );
    }
}
