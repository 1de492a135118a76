//! Budget entry model
//!
//! A single income or expense record. The persisted JSON form is
//! `{id, amount, category, description, date, type}` with `date` as an ISO
//! calendar date and `type` one of `"income"` / `"expense"`.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::EntryId;
use super::month::MonthKey;

/// Whether an entry adds to or subtracts from the net total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Income,
    Expense,
}

impl EntryKind {
    /// Signed contribution of `amount` to the net total
    pub fn signed(&self, amount: f64) -> f64 {
        match self {
            Self::Income => amount,
            Self::Expense => -amount,
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

/// All fields of an entry except its id
///
/// Input of both create and update; the store assigns or keeps the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryDraft {
    /// Non-negative magnitude; the sign comes from `kind`
    pub amount: f64,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(with = "iso_date")]
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

impl EntryDraft {
    pub fn new(
        kind: EntryKind,
        amount: f64,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            amount,
            category: category.into(),
            description: String::new(),
            date,
            kind,
        }
    }

    pub fn income(amount: f64, category: impl Into<String>, date: NaiveDate) -> Self {
        Self::new(EntryKind::Income, amount, category, date)
    }

    pub fn expense(amount: f64, category: impl Into<String>, date: NaiveDate) -> Self {
        Self::new(EntryKind::Expense, amount, category, date)
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// A persisted income or expense record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetEntry {
    pub id: EntryId,
    pub amount: f64,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(with = "iso_date")]
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

impl BudgetEntry {
    /// Build an entry from a draft and an id
    pub fn from_draft(id: EntryId, draft: EntryDraft) -> Self {
        Self {
            id,
            amount: draft.amount,
            category: draft.category,
            description: draft.description,
            date: draft.date,
            kind: draft.kind,
        }
    }

    /// Replace every field except the id
    pub fn apply(&mut self, draft: EntryDraft) {
        self.amount = draft.amount;
        self.category = draft.category;
        self.description = draft.description;
        self.date = draft.date;
        self.kind = draft.kind;
    }

    pub fn is_income(&self) -> bool {
        self.kind == EntryKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == EntryKind::Expense
    }

    /// Signed contribution to the net total
    pub fn signed_amount(&self) -> f64 {
        self.kind.signed(self.amount)
    }

    /// Calendar month the entry falls in
    pub fn month(&self) -> MonthKey {
        MonthKey::from_date(self.date)
    }
}

/// Parse an ISO calendar date, also accepting full ISO-8601 timestamps
///
/// Timestamps keep the calendar date as written (offset applied, not
/// converted to local time).
pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.date())
}

/// Serde adapter writing `YYYY-MM-DD` and reading any form [`parse_iso_date`] accepts
mod iso_date {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format("%Y-%m-%d"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_iso_date(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid ISO date: {}", raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_wire_format() {
        let id: EntryId = "550e8400-e29b-41d4-a716-446655440000".parse().unwrap();
        let entry = BudgetEntry::from_draft(
            id,
            EntryDraft::expense(42.5, "Groceries", date(2024, 1, 15)).with_description("Market"),
        );

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["id"], "550e8400-e29b-41d4-a716-446655440000");
        assert_eq!(json["amount"], 42.5);
        assert_eq!(json["category"], "Groceries");
        assert_eq!(json["description"], "Market");
        assert_eq!(json["date"], "2024-01-15");
        assert_eq!(json["type"], "expense");
    }

    #[test]
    fn test_reads_browser_written_entry() {
        let json = r#"{
            "id": "9b2f3c1e-0c4a-4f8e-9d57-2f1a6b7c8d90",
            "amount": 1200,
            "category": "Salary",
            "description": "",
            "date": "2024-03-01T00:00:00.000Z",
            "type": "income"
        }"#;

        let entry: BudgetEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.amount, 1200.0);
        assert_eq!(entry.date, date(2024, 3, 1));
        assert!(entry.is_income());
        assert_eq!(entry.signed_amount(), 1200.0);
    }

    #[test]
    fn test_missing_description_defaults_to_empty() {
        let json = r#"{"id":"9b2f3c1e-0c4a-4f8e-9d57-2f1a6b7c8d90","amount":4,
            "category":"Tea","date":"2024-03-02","type":"expense"}"#;

        let entry: BudgetEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.description, "");
        assert_eq!(serde_json::to_value(&entry).unwrap()["description"], "");
    }

    #[test]
    fn test_rejects_unknown_type() {
        let json = r#"{"id":"9b2f3c1e-0c4a-4f8e-9d57-2f1a6b7c8d90","amount":1,
            "category":"x","description":"","date":"2024-03-01","type":"transfer"}"#;
        assert!(serde_json::from_str::<BudgetEntry>(json).is_err());
    }

    #[test]
    fn test_parse_iso_date_forms() {
        assert_eq!(parse_iso_date("2024-01-15"), Some(date(2024, 1, 15)));
        assert_eq!(parse_iso_date(" 2024-01-15 "), Some(date(2024, 1, 15)));
        assert_eq!(parse_iso_date("2024-01-15T23:30:00+02:00"), Some(date(2024, 1, 15)));
        assert_eq!(parse_iso_date("2024-01-15T08:00:00"), Some(date(2024, 1, 15)));
        assert_eq!(parse_iso_date("15/01/2024"), None);
        assert_eq!(parse_iso_date(""), None);
    }

    #[test]
    fn test_apply_keeps_id() {
        let mut entry = BudgetEntry::from_draft(
            EntryId::new(),
            EntryDraft::expense(10.0, "Food", date(2024, 1, 1)),
        );
        let id = entry.id;

        entry.apply(EntryDraft::income(99.0, "Refund", date(2024, 2, 2)));

        assert_eq!(entry.id, id);
        assert_eq!(entry.amount, 99.0);
        assert_eq!(entry.category, "Refund");
        assert!(entry.is_income());
        assert_eq!(entry.month(), MonthKey::new(2024, 2));
    }
}
