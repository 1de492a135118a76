//! Calendar month keys
//!
//! Monthly buckets are keyed by a numeric (year, month) pair so bucketing
//! never depends on locale. The English label ("January 2024") is produced
//! only when displaying.

use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

use crate::error::BudgetError;

/// A calendar month, ordered chronologically
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

impl MonthKey {
    /// Create a key; `month` is 1-based and clamped into 1..=12
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year,
            month: month.clamp(1, 12),
        }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Whether `date` falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Display label, e.g. "January 2024"
    pub fn label(&self) -> String {
        format!("{} {}", MONTH_NAMES[(self.month - 1) as usize], self.year)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for MonthKey {
    type Err = BudgetError;

    /// Parse `YYYY-MM`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || BudgetError::Validation(format!("Invalid month '{}', expected YYYY-MM", s));

        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }

        Ok(Self { year, month })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_date_and_label() {
        let key = MonthKey::from_date(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(key, MonthKey::new(2024, 1));
        assert_eq!(key.label(), "January 2024");
        assert_eq!(MonthKey::new(1999, 12).to_string(), "December 1999");
    }

    #[test]
    fn test_ordering_is_chronological() {
        let mut keys = vec![
            MonthKey::new(2024, 3),
            MonthKey::new(2023, 12),
            MonthKey::new(2024, 1),
        ];
        keys.sort();
        assert_eq!(
            keys,
            vec![MonthKey::new(2023, 12), MonthKey::new(2024, 1), MonthKey::new(2024, 3)]
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!("2024-02".parse::<MonthKey>().unwrap(), MonthKey::new(2024, 2));
        assert!("2024-13".parse::<MonthKey>().unwrap_err().is_validation());
        assert!("February".parse::<MonthKey>().is_err());
    }

    #[test]
    fn test_contains() {
        let key = MonthKey::new(2024, 2);
        assert!(key.contains(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()));
        assert!(!key.contains(NaiveDate::from_ymd_opt(2023, 2, 1).unwrap()));
    }
}
