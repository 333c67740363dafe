use std::cmp::Ordering;

use crate::models::selection::{Selection, SortKey, SortOrder};
use crate::models::store::StoreState;
use crate::models::transaction::Transaction;

/// What the transaction table should show for the current store state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplaySequence<'a> {
    /// The view's fetch has not completed yet.
    Loading,
    /// The view's fetch failed; carries the failure message.
    Failed(&'a str),
    /// Filtered, sorted rows. May be empty ("no records").
    Rows(Vec<&'a Transaction>),
}

impl<'a> DisplaySequence<'a> {
    /// Rows to render; always empty while loading or after a failure.
    pub fn rows(&self) -> &[&'a Transaction] {
        match self {
            DisplaySequence::Rows(rows) => rows,
            _ => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.rows().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows().is_empty()
    }

    pub fn ids(&self) -> Vec<u64> {
        self.rows().iter().map(|t| t.id).collect()
    }
}

/// Derives the display sequence of the transaction history.
///
/// Pure business logic: no I/O, no mutation of the store. Same inputs
/// always produce the same output, and ties keep store order because the
/// sort is stable.
pub struct TransactionEngine;

impl TransactionEngine {
    pub fn new() -> Self {
        Self
    }

    /// Filter then sort `store` according to `selection`.
    pub fn derive<'a>(&self, store: &'a [Transaction], selection: &Selection) -> Vec<&'a Transaction> {
        let mut rows = self.filter(store, selection);
        self.sort(&mut rows, selection.sort_key, selection.sort_order);
        rows
    }

    /// Lift a store state into what presentation renders.
    pub fn display<'a>(
        &self,
        state: &'a StoreState<Vec<Transaction>>,
        selection: &Selection,
    ) -> DisplaySequence<'a> {
        match state {
            StoreState::Loading => DisplaySequence::Loading,
            StoreState::Failed(message) => DisplaySequence::Failed(message),
            StoreState::Ready(records) => DisplaySequence::Rows(self.derive(records, selection)),
        }
    }

    /// A complete date range wins over the type filter; only one of the
    /// two ever applies.
    fn filter<'a>(&self, store: &'a [Transaction], selection: &Selection) -> Vec<&'a Transaction> {
        match selection.date_range.bounds() {
            Some((start, end)) => store
                .iter()
                .filter(|t| t.date >= start && t.date <= end)
                .collect(),
            None => store
                .iter()
                .filter(|t| selection.type_filter.matches(t.transaction_type))
                .collect(),
        }
    }

    fn sort(&self, rows: &mut [&Transaction], key: SortKey, order: SortOrder) {
        rows.sort_by(|a, b| {
            let ordering = Self::compare(a, b, key);
            match order {
                SortOrder::Ascending => ordering,
                SortOrder::Descending => ordering.reverse(),
            }
        });
    }

    fn compare(a: &Transaction, b: &Transaction, key: SortKey) -> Ordering {
        match key {
            SortKey::Date => a.date.cmp(&b.date),
            SortKey::Amount => a.amount.cmp(&b.amount),
            SortKey::Type => a.transaction_type.label().cmp(b.transaction_type.label()),
        }
    }
}

impl Default for TransactionEngine {
    fn default() -> Self {
        Self::new()
    }
}
