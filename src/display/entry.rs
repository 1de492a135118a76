//! Entry display formatting
//!
//! Plain-text rows and detail blocks for command output.

use crate::config::settings::Settings;
use crate::models::{BudgetEntry, EntryKind};

/// Format a single entry as a list row
pub fn format_entry_row(entry: &BudgetEntry, settings: &Settings) -> String {
    let sign = match entry.kind {
        EntryKind::Income => "+",
        EntryKind::Expense => "-",
    };

    format!(
        "{:8} {:10} {:20} {:>14} {}",
        entry.id.short(),
        settings.format_date(entry.date),
        truncate(&entry.category, 20),
        format!("{}{}", sign, settings.format_amount(entry.amount)),
        entry.description
    )
}

/// Format a list of entries with a header
pub fn format_entry_list<'a, I>(entries: I, settings: &Settings) -> String
where
    I: IntoIterator<Item = &'a BudgetEntry>,
{
    let rows: Vec<String> = entries
        .into_iter()
        .map(|e| format_entry_row(e, settings))
        .collect();

    if rows.is_empty() {
        return "No entries found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:8} {:10} {:20} {:>14} {}\n",
        "ID", "Date", "Category", "Amount", "Description"
    ));
    output.push_str(&"-".repeat(70));
    output.push('\n');

    for row in rows {
        output.push_str(&row);
        output.push('\n');
    }

    output
}

/// Format entry details for display
pub fn format_entry_details(entry: &BudgetEntry, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Entry:       {}\n", entry.id));
    output.push_str(&format!("Type:        {}\n", entry.kind));
    output.push_str(&format!("Date:        {}\n", settings.format_date(entry.date)));
    output.push_str(&format!("Amount:      {}\n", settings.format_amount(entry.amount)));
    output.push_str(&format!("Category:    {}\n", entry.category));

    if !entry.description.is_empty() {
        output.push_str(&format!("Description: {}\n", entry.description));
    }

    output
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}
