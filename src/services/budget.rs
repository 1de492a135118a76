//! Budget store
//!
//! Owns the insertion-ordered list of entries, derives aggregates from it,
//! and mirrors it into a [`KeyValueStore`] slot. The store starts empty and
//! not ready; [`BudgetStore::hydrate`] loads the persisted list once and
//! marks it ready. Mutations made before that are kept in memory but never
//! written, so an empty initial state cannot clobber persisted data.

use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::{Local, NaiveDate};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetEntry, EntryDraft, EntryId, EntryKind, MonthKey};
use crate::storage::KeyValueStore;

/// Slot holding the serialized entry list
pub const BUDGETS_KEY: &str = "budgets";

/// Options for selecting entries
#[derive(Debug, Clone, Default)]
pub struct EntryFilter {
    /// Only entries of this kind
    pub kind: Option<EntryKind>,
    /// Only entries with this category (case-insensitive)
    pub category: Option<String>,
    /// Only entries dated within this month
    pub month: Option<MonthKey>,
    /// Maximum number of entries to return
    pub limit: Option<usize>,
}

impl EntryFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by kind
    pub fn kind(mut self, kind: EntryKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Filter by category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Filter by month
    pub fn month(mut self, month: MonthKey) -> Self {
        self.month = Some(month);
        self
    }

    /// Limit results
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    fn matches(&self, entry: &BudgetEntry) -> bool {
        if self.kind.is_some_and(|kind| entry.kind != kind) {
            return false;
        }
        if let Some(category) = &self.category {
            if !entry.category.eq_ignore_ascii_case(category) {
                return false;
            }
        }
        if let Some(month) = self.month {
            if !month.contains(entry.date) {
                return false;
            }
        }
        true
    }
}

/// The budget state container
pub struct BudgetStore<S: KeyValueStore> {
    storage: S,
    entries: Vec<BudgetEntry>,
    selected_date: NaiveDate,
    ready: bool,
}

impl<S: KeyValueStore> BudgetStore<S> {
    /// Create an empty, not-yet-hydrated store over `storage`
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            entries: Vec::new(),
            selected_date: Local::now().date_naive(),
            ready: false,
        }
    }

    /// Create a store and hydrate it immediately
    pub fn open(storage: S) -> BudgetResult<Self> {
        let mut store = Self::new(storage);
        store.hydrate()?;
        Ok(store)
    }

    /// Load the persisted entry list
    ///
    /// Runs at most once: later calls return immediately. An empty slot
    /// leaves the store empty. Records are decoded one by one; an
    /// unreadable record is logged and skipped while the others are kept.
    /// Contents that are not a JSON list at all are logged and treated as
    /// empty. Either way the store becomes ready. A failure to read the
    /// slot at all is returned and the store stays not ready.
    pub fn hydrate(&mut self) -> BudgetResult<()> {
        if self.ready {
            return Ok(());
        }

        let raw = self.storage.get(BUDGETS_KEY)?;

        match raw.as_deref().map(str::trim) {
            None | Some("") => debug!("no persisted budgets found"),
            Some(text) => match serde_json::from_str::<Vec<Value>>(text) {
                Ok(records) => {
                    self.entries = dedup_ids(decode_records(records));
                    debug!(count = self.entries.len(), "hydrated budgets");
                }
                Err(e) => {
                    warn!(error = %e, "persisted budgets are malformed, starting empty");
                    self.entries.clear();
                }
            },
        }

        self.ready = true;
        Ok(())
    }

    /// Whether hydration has completed
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Append a new entry and return its id
    pub fn create(&mut self, draft: EntryDraft) -> BudgetResult<EntryId> {
        let mut id = EntryId::new();
        while self.position(id).is_some() {
            id = EntryId::new();
        }

        self.entries.push(BudgetEntry::from_draft(id, draft));
        self.persist()?;
        Ok(id)
    }

    /// Replace every field except the id of an existing entry, in place
    ///
    /// Returns `NotFound` for an unknown id; nothing is written then.
    pub fn update(&mut self, id: EntryId, draft: EntryDraft) -> BudgetResult<()> {
        let index = self
            .position(id)
            .ok_or_else(|| BudgetError::entry_not_found(id.to_string()))?;

        self.entries[index].apply(draft);
        self.persist()
    }

    /// Remove an entry, returning whether one was removed
    pub fn delete(&mut self, id: EntryId) -> BudgetResult<bool> {
        match self.position(id) {
            Some(index) => {
                self.entries.remove(index);
                self.persist()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// All entries in insertion order
    pub fn entries(&self) -> &[BudgetEntry] {
        &self.entries
    }

    pub fn get(&self, id: EntryId) -> Option<&BudgetEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Resolve an entry from its full id or a unique id prefix
    pub fn find(&self, identifier: &str) -> BudgetResult<&BudgetEntry> {
        let identifier = identifier.trim();

        if let Ok(id) = identifier.parse::<EntryId>() {
            return self
                .get(id)
                .ok_or_else(|| BudgetError::entry_not_found(identifier));
        }

        let matches: Vec<_> = self
            .entries
            .iter()
            .filter(|e| e.id.matches_prefix(identifier))
            .collect();

        match matches.as_slice() {
            [entry] => Ok(*entry),
            [] => Err(BudgetError::entry_not_found(identifier)),
            _ => Err(BudgetError::Ambiguous {
                entity_type: "Entry",
                identifier: identifier.to_string(),
                matches: matches.len(),
            }),
        }
    }

    /// Entries matching `filter`, in insertion order
    pub fn filter(&self, filter: &EntryFilter) -> Vec<&BudgetEntry> {
        let matching = self.entries.iter().filter(|e| filter.matches(e));
        match filter.limit {
            Some(limit) => matching.take(limit).collect(),
            None => matching.collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of income amounts minus sum of expense amounts
    pub fn net_total(&self) -> f64 {
        self.entries.iter().map(BudgetEntry::signed_amount).sum()
    }

    pub fn total_income(&self) -> f64 {
        self.sum_of(EntryKind::Income)
    }

    pub fn total_expenses(&self) -> f64 {
        self.sum_of(EntryKind::Expense)
    }

    /// Expense amounts summed per calendar month, in chronological order
    pub fn monthly_expense_totals(&self) -> BTreeMap<MonthKey, f64> {
        let mut totals = BTreeMap::new();
        for entry in self.entries.iter().filter(|e| e.is_expense()) {
            *totals.entry(entry.month()).or_insert(0.0) += entry.amount;
        }
        totals
    }

    /// The category used by the most entries
    ///
    /// Ties go to the category that first appeared earliest. `None` when
    /// there are no entries.
    pub fn most_frequent_category(&self) -> Option<&str> {
        let mut order: Vec<(&str, usize)> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for entry in &self.entries {
            let category = entry.category.as_str();
            match index.get(category) {
                Some(&i) => order[i].1 += 1,
                None => {
                    index.insert(category, order.len());
                    order.push((category, 1));
                }
            }
        }

        let mut best: Option<(&str, usize)> = None;
        for (category, count) in order {
            if best.map_or(true, |(_, top)| count > top) {
                best = Some((category, count));
            }
        }
        best.map(|(category, _)| category)
    }

    /// View-state date; not tied to any entry
    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn set_selected_date(&mut self, date: NaiveDate) {
        self.selected_date = date;
    }

    /// Month containing the selected date
    pub fn selected_month(&self) -> MonthKey {
        MonthKey::from_date(self.selected_date)
    }

    /// Serialize the entry list in its persisted form
    pub fn serialize(&self) -> BudgetResult<String> {
        Ok(serde_json::to_string(&self.entries)?)
    }

    /// The underlying storage
    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn position(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    fn sum_of(&self, kind: EntryKind) -> f64 {
        self.entries
            .iter()
            .filter(|e| e.kind == kind)
            .map(|e| e.amount)
            .sum()
    }

    fn persist(&mut self) -> BudgetResult<()> {
        if !self.ready {
            debug!("store not hydrated yet, skipping write");
            return Ok(());
        }

        let serialized = self.serialize()?;
        self.storage.set(BUDGETS_KEY, &serialized)
    }
}

/// Decode each persisted record on its own, skipping the unreadable ones
fn decode_records(records: Vec<Value>) -> Vec<BudgetEntry> {
    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(index, error = %e, "skipping unreadable persisted entry");
                None
            }
        })
        .collect()
}

/// Keep the first entry for each id
fn dedup_ids(entries: Vec<BudgetEntry>) -> Vec<BudgetEntry> {
    let total = entries.len();
    let mut seen = HashSet::new();
    let unique: Vec<_> = entries.into_iter().filter(|e| seen.insert(e.id)).collect();

    if unique.len() != total {
        warn!(dropped = total - unique.len(), "persisted budgets contained duplicate ids");
    }
    unique
}
