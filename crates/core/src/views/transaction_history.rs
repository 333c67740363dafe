use chrono::NaiveDate;

use crate::models::selection::{DateRange, Selection, SortKey, TypeFilter};
use crate::models::store::StoreState;
use crate::models::transaction::Transaction;
use crate::providers::traits::DashboardProvider;
use crate::services::mapping_service::RecordMapper;
use crate::services::transaction_service::{DisplaySequence, TransactionEngine};

/// Transaction history: a store fetched once on activation, plus the
/// filter/sort selection the table is derived from.
#[derive(Debug)]
pub struct TransactionHistoryView {
    state: StoreState<Vec<Transaction>>,
    selection: Selection,
    limit: usize,
    activated: bool,
}

impl TransactionHistoryView {
    /// A fresh view in `Loading`, keeping at most `limit` fetched records.
    pub fn new(limit: usize) -> Self {
        Self {
            state: StoreState::Loading,
            selection: Selection::default(),
            limit,
            activated: false,
        }
    }

    /// Fetch and map the store. Only the first call does anything.
    pub async fn activate(&mut self, provider: &dyn DashboardProvider, mapper: &mut RecordMapper) {
        if self.activated {
            log::debug!("Transaction history already activated; skipping fetch");
            return;
        }
        self.activated = true;

        self.state = match provider.fetch_posts().await {
            Ok(posts) => {
                let transactions = mapper.map_transactions(&posts, self.limit);
                log::info!(
                    "Loaded {} transactions from {}",
                    transactions.len(),
                    provider.name()
                );
                StoreState::Ready(transactions)
            }
            Err(e) => {
                log::error!("Error fetching transactions from {}: {e}", provider.name());
                StoreState::Failed(e.to_string())
            }
        };
    }

    pub fn state(&self) -> &StoreState<Vec<Transaction>> {
        &self.state
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn is_activated(&self) -> bool {
        self.activated
    }

    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
    }

    pub fn set_type_filter(&mut self, type_filter: TypeFilter) {
        self.selection = self.selection.with_type_filter(type_filter);
    }

    pub fn set_date_range(&mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) {
        self.selection = self.selection.with_date_range(DateRange::new(start, end));
    }

    pub fn clear_date_range(&mut self) {
        self.selection = self.selection.with_date_range(DateRange::default());
    }

    /// Header click: toggles the order on the active key, else switches key.
    pub fn select_sort(&mut self, key: SortKey) {
        self.selection = self.selection.select_sort(key);
    }

    /// The table as it should currently be rendered.
    pub fn display(&self) -> DisplaySequence<'_> {
        TransactionEngine::new().display(&self.state, &self.selection)
    }
}
