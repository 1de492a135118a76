//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod entry;
pub mod layout;

pub use entry::{handle_entry_command, EntryArgs, EntryCommands, KindArg};
pub use layout::{handle_layout_command, LayoutArgs};

use chrono::NaiveDate;

use crate::models::parse_iso_date;

/// Clap value parser for `YYYY-MM-DD` dates
pub fn parse_date_arg(s: &str) -> Result<NaiveDate, String> {
    parse_iso_date(s).ok_or_else(|| format!("invalid date '{}', expected YYYY-MM-DD", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_arg() {
        assert_eq!(
            parse_date_arg("2024-02-29").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert!(parse_date_arg("2023-02-29").is_err());
        assert!(parse_date_arg("yesterday").is_err());
    }
}
