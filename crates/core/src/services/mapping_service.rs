use chrono::{NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use std::collections::HashSet;

use crate::models::loan::{Loan, LoanStatus};
use crate::models::overview::{AccountOverview, RecentActivity};
use crate::models::raw::{RawPost, RawUser};
use crate::models::transaction::{Transaction, TransactionType};

/// Balance shown on the overview; the placeholder backend has no accounts.
const MOCK_ACCOUNT_BALANCE_CENTS: i64 = 1_234_567;

/// Shapes raw placeholder items into domain records.
///
/// The placeholder API has no financial fields, so whatever an item
/// lacks (amount, type, date, tenure, ...) is synthesized here, before
/// the records enter a store. Randomness comes from an owned `StdRng`;
/// use `with_seed` for reproducible output.
pub struct RecordMapper {
    rng: StdRng,
    today: NaiveDate,
}

impl RecordMapper {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            today: Utc::now().date_naive(),
        }
    }

    /// Deterministic mapper for a fixed seed and "today".
    pub fn with_seed(seed: u64, today: NaiveDate) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            today,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Map the first `limit` posts into transactions.
    ///
    /// Rules per item (index `i` counts taken items from 0):
    /// - `date`: the item's date, else today
    /// - `amount`: the item's amount if non-negative, else random in [0, 1000) to the cent
    /// - `type`: the item's type if it is credit/debit, else credit for even `i`, debit for odd
    ///
    /// Items whose id was already seen are dropped so ids stay unique.
    pub fn map_transactions(&mut self, posts: &[RawPost], limit: usize) -> Vec<Transaction> {
        let mut seen = HashSet::new();
        let mut transactions = Vec::with_capacity(limit.min(posts.len()));

        for (index, post) in posts.iter().take(limit).enumerate() {
            if !seen.insert(post.id) {
                log::warn!("Dropping duplicate transaction id {}", post.id);
                continue;
            }

            let date = post.date.unwrap_or(self.today);

            let amount = match post.amount {
                Some(amount) if amount >= Decimal::ZERO => amount,
                Some(amount) => {
                    log::warn!(
                        "Transaction {} has negative amount {amount}; using a synthetic amount",
                        post.id
                    );
                    self.random_transaction_amount()
                }
                None => self.random_transaction_amount(),
            };

            let transaction_type = match post.kind.as_deref().map(str::parse::<TransactionType>) {
                Some(Ok(kind)) => kind,
                Some(Err(e)) => {
                    log::warn!("Transaction {}: {e}; deriving type from position", post.id);
                    Self::type_for_index(index)
                }
                None => Self::type_for_index(index),
            };

            transactions.push(Transaction::new(post.id, date, amount, transaction_type));
        }

        log::debug!("Mapped {} of {} posts into transactions", transactions.len(), posts.len());
        transactions
    }

    /// Map the first `limit` posts into loans with synthetic terms:
    /// amount in [1000, 11000), tenure 1-12 months, status active for
    /// even ids and paid for odd ones.
    pub fn map_loans(&mut self, posts: &[RawPost], limit: usize) -> Vec<Loan> {
        let loans: Vec<Loan> = posts
            .iter()
            .take(limit)
            .map(|post| Loan {
                id: post.id,
                amount: Decimal::from(self.rng.gen_range(1_000i64..11_000)),
                tenure_months: self.rng.gen_range(1..=12),
                purpose: format!("Purpose {}", post.id),
                status: if post.id % 2 == 0 {
                    LoanStatus::Active
                } else {
                    LoanStatus::Paid
                },
                date_requested: post.date_requested,
            })
            .collect();

        log::debug!("Mapped {} of {} posts into loans", loans.len(), posts.len());
        loans
    }

    /// Build the account overview around the fetched user.
    pub fn map_overview(&self, user: &RawUser) -> AccountOverview {
        AccountOverview {
            user_id: user.id,
            name: user.name.clone(),
            account_balance: Decimal::new(MOCK_ACCOUNT_BALANCE_CENTS, 2),
            recent_activity: vec![
                RecentActivity {
                    id: 1,
                    label: "Deposit".into(),
                    amount: Decimal::new(50_000, 2),
                },
                RecentActivity {
                    id: 2,
                    label: "Withdrawal".into(),
                    amount: Decimal::new(20_000, 2),
                },
            ],
        }
    }

    fn random_transaction_amount(&mut self) -> Decimal {
        Decimal::new(self.rng.gen_range(0..100_000), 2)
    }

    fn type_for_index(index: usize) -> TransactionType {
        if index % 2 == 0 {
            TransactionType::Credit
        } else {
            TransactionType::Debit
        }
    }
}

impl Default for RecordMapper {
    fn default() -> Self {
        Self::new()
    }
}
