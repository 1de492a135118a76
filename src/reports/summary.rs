//! Budget summary report
//!
//! Gathers every aggregate the store derives into one snapshot.

use std::collections::BTreeMap;

use crate::config::settings::Settings;
use crate::models::MonthKey;
use crate::services::BudgetStore;
use crate::storage::KeyValueStore;

/// Snapshot of the store's aggregates
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetSummary {
    /// Number of entries
    pub entry_count: usize,
    /// Sum of income amounts
    pub total_income: f64,
    /// Sum of expense amounts
    pub total_expenses: f64,
    /// Income minus expenses
    pub net_total: f64,
    /// Category used by the most entries
    pub most_frequent_category: Option<String>,
    /// Expense totals per month, oldest first
    pub monthly_expenses: BTreeMap<MonthKey, f64>,
}

impl BudgetSummary {
    /// Build a summary from the store's current entries
    pub fn generate<S: KeyValueStore>(store: &BudgetStore<S>) -> Self {
        Self {
            entry_count: store.len(),
            total_income: store.total_income(),
            total_expenses: store.total_expenses(),
            net_total: store.net_total(),
            most_frequent_category: store.most_frequent_category().map(str::to_string),
            monthly_expenses: store.monthly_expense_totals(),
        }
    }

    /// Expense total for the given month, zero if nothing was spent
    pub fn expenses_in(&self, month: MonthKey) -> f64 {
        self.monthly_expenses.get(&month).copied().unwrap_or(0.0)
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let mut output = String::new();

        output.push_str("Budget Summary\n");
        output.push_str(&"=".repeat(40));
        output.push('\n');
        output.push_str(&format!("Entries:         {}\n", self.entry_count));
        output.push_str(&format!(
            "Total Income:    {}\n",
            settings.format_amount(self.total_income)
        ));
        output.push_str(&format!(
            "Total Expenses:  {}\n",
            settings.format_amount(self.total_expenses)
        ));
        output.push_str(&format!(
            "Net Total:       {}\n",
            settings.format_amount(self.net_total)
        ));
        output.push_str(&format!(
            "Top Category:    {}\n",
            self.most_frequent_category.as_deref().unwrap_or("(none)")
        ));

        if !self.monthly_expenses.is_empty() {
            output.push_str("\nMonthly Expenses\n");
            output.push_str(&"-".repeat(40));
            output.push('\n');
            output.push_str(&format_monthly_totals(&self.monthly_expenses, settings));
        }

        output
    }
}

/// One line per month: label and total
pub fn format_monthly_totals(totals: &BTreeMap<MonthKey, f64>, settings: &Settings) -> String {
    totals
        .iter()
        .map(|(month, total)| {
            format!("{:<20} {:>15}\n", month.label(), settings.format_amount(*total))
        })
        .collect()
}
