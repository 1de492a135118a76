//! User settings for the budget tracker
//!
//! Display preferences only; nothing here changes how entries are stored or
//! aggregated.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

use super::paths::BudgetPaths;
use crate::error::BudgetError;

/// User settings, persisted as `config.json` in the base directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol prefixed to amounts in command output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format) for command output
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &BudgetPaths) -> Result<Self, BudgetError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| BudgetError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| BudgetError::Config(format!("Failed to parse settings file: {}", e)))?;

        if try_format_date(NaiveDate::MIN, &settings.date_format).is_none() {
            return Err(BudgetError::Config(format!(
                "Invalid date_format '{}' in settings file",
                settings.date_format
            )));
        }

        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BudgetPaths) -> Result<(), BudgetError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BudgetError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| BudgetError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Format an amount with the configured currency symbol
    pub fn format_amount(&self, amount: f64) -> String {
        if amount < 0.0 {
            format!("-{}{:.2}", self.currency_symbol, -amount)
        } else {
            format!("{}{:.2}", self.currency_symbol, amount)
        }
    }

    /// Format a date with the configured format, or `%Y-%m-%d` if it cannot render dates
    pub fn format_date(&self, date: NaiveDate) -> String {
        try_format_date(date, &self.date_format)
            .unwrap_or_else(|| date.format("%Y-%m-%d").to_string())
    }
}

/// Render `date` with a strftime format, `None` for unknown or time-only specifiers
fn try_format_date(date: NaiveDate, format: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", date.format(format)).ok()?;
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.date_format, "%Y-%m-%d");
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_symbol = "€".into();
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "€");
    }

    #[test]
    fn test_partial_file_uses_field_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"currency_symbol": "£"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "£");
        assert_eq!(loaded.date_format, "%Y-%m-%d");
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, BudgetError::Config(_)));
    }

    #[test]
    fn test_invalid_date_format_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());

        for format in ["%Q", "%H:%M"] {
            let body = serde_json::json!({ "date_format": format }).to_string();
            std::fs::write(paths.settings_file(), body).unwrap();

            let err = Settings::load_or_create(&paths).unwrap_err();
            assert!(matches!(err, BudgetError::Config(ref msg) if msg.contains(format)));
        }
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let mut settings = Settings::default();
        assert_eq!(settings.format_date(date), "2024-01-15");

        settings.date_format = "%d/%m/%Y".into();
        assert_eq!(settings.format_date(date), "15/01/2024");

        settings.date_format = "%Q".into();
        assert_eq!(settings.format_date(date), "2024-01-15");

        settings.date_format = "%H".into();
        assert_eq!(settings.format_date(date), "2024-01-15");
    }

    #[test]
    fn test_format_amount() {
        let settings = Settings::default();
        assert_eq!(settings.format_amount(12.5), "$12.50");
        assert_eq!(settings.format_amount(-3.0), "-$3.00");
    }
}
