//! Entry CLI commands
//!
//! Implements CLI commands for adding, editing, removing and reviewing
//! budget entries.

use chrono::NaiveDate;
use clap::{Args, Subcommand, ValueEnum};

use crate::config::settings::Settings;
use crate::display::{format_entry_details, format_entry_list};
use crate::error::BudgetResult;
use crate::models::{EntryDraft, EntryKind, MonthKey};
use crate::reports::{format_monthly_totals, BudgetSummary};
use crate::services::{BudgetStore, EntryFilter};
use crate::storage::KeyValueStore;

use super::parse_date_arg;

/// Entry kind as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Income,
    Expense,
}

impl From<KindArg> for EntryKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Income => EntryKind::Income,
            KindArg::Expense => EntryKind::Expense,
        }
    }
}

/// Fields of an entry, shared by `add` and `edit`
#[derive(Debug, Clone, Args)]
pub struct EntryArgs {
    /// Amount (use --income for money coming in)
    #[arg(allow_negative_numbers = true)]
    pub amount: f64,
    /// Category label
    pub category: String,
    /// Free-text description
    #[arg(short = 'm', long, default_value = "")]
    pub description: String,
    /// Entry date (YYYY-MM-DD), defaults to the selected date
    #[arg(short, long, value_parser = parse_date_arg)]
    pub date: Option<NaiveDate>,
    /// Record as income instead of expense
    #[arg(short, long)]
    pub income: bool,
}

impl EntryArgs {
    /// Build a draft, dating it `today` when no date was given
    pub fn into_draft(self, today: NaiveDate) -> EntryDraft {
        let kind = if self.income {
            EntryKind::Income
        } else {
            EntryKind::Expense
        };
        EntryDraft::new(kind, self.amount, self.category, self.date.unwrap_or(today))
            .with_description(self.description)
    }
}

/// Entry subcommands
#[derive(Debug, Subcommand)]
pub enum EntryCommands {
    /// Add a new income or expense entry
    Add(EntryArgs),

    /// Replace every field of an existing entry
    Edit {
        /// Entry ID (full or unique prefix)
        id: String,
        #[command(flatten)]
        entry: EntryArgs,
    },

    /// Delete an entry
    #[command(alias = "rm")]
    Delete {
        /// Entry ID (full or unique prefix)
        id: String,
    },

    /// Show entry details
    Show {
        /// Entry ID (full or unique prefix)
        id: String,
    },

    /// List entries in the order they were added
    #[command(alias = "ls")]
    List {
        /// Only entries of this kind
        #[arg(short, long, value_enum)]
        kind: Option<KindArg>,
        /// Only entries in this category
        #[arg(short, long)]
        category: Option<String>,
        /// Only entries in this month (YYYY-MM)
        #[arg(long, conflicts_with = "selected_month")]
        month: Option<String>,
        /// Only entries in the month of the selected date
        #[arg(long)]
        selected_month: bool,
        /// Maximum number of entries to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show totals, top category and monthly spending
    Summary,

    /// Show expense totals per month
    Months,
}

/// Handle an entry command
pub fn handle_entry_command<S: KeyValueStore>(
    store: &mut BudgetStore<S>,
    settings: &Settings,
    cmd: EntryCommands,
) -> BudgetResult<()> {
    match cmd {
        EntryCommands::Add(args) => {
            let draft = args.into_draft(store.selected_date());
            let kind = draft.kind;
            let id = store.create(draft)?;
            println!("Added {} entry {}", kind, id.short());
        }

        EntryCommands::Edit { id, entry } => {
            let id = store.find(&id)?.id;
            let draft = entry.into_draft(store.selected_date());
            store.update(id, draft)?;
            println!("Updated entry {}", id.short());
        }

        EntryCommands::Delete { id } => {
            let id = store.find(&id)?.id;
            store.delete(id)?;
            println!("Deleted entry {}", id.short());
        }

        EntryCommands::Show { id } => {
            let entry = store.find(&id)?;
            print!("{}", format_entry_details(entry, settings));
        }

        EntryCommands::List {
            kind,
            category,
            month,
            selected_month,
            limit,
        } => {
            let mut filter = EntryFilter::new();
            filter.kind = kind.map(EntryKind::from);
            filter.category = category;
            filter.limit = limit;
            if let Some(month) = month {
                filter.month = Some(month.parse::<MonthKey>()?);
            } else if selected_month {
                filter.month = Some(store.selected_month());
            }

            print!("{}", format_entry_list(store.filter(&filter), settings));
        }

        EntryCommands::Summary => {
            print!("{}", BudgetSummary::generate(store).format_terminal(settings));
        }

        EntryCommands::Months => {
            let totals = store.monthly_expense_totals();
            if totals.is_empty() {
                println!("No expenses recorded.");
            } else {
                print!("{}", format_monthly_totals(&totals, settings));
            }
        }
    }

    Ok(())
}
