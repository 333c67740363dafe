use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Direction of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming into the account
    Credit,
    /// Money leaving the account
    Debit,
}

impl TransactionType {
    /// Lowercase label, also used as the sort key for type ordering.
    pub fn label(&self) -> &'static str {
        match self {
            TransactionType::Credit => "credit",
            TransactionType::Debit => "debit",
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "credit" => Ok(TransactionType::Credit),
            "debit" => Ok(TransactionType::Debit),
            other => Err(format!("unknown transaction type '{other}'")),
        }
    }
}

/// A single record of the transaction history.
///
/// Records are immutable once they enter a store. Views reorder and
/// filter references to them, they never edit them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique within one store snapshot
    pub id: u64,

    /// Calendar date (daily granularity)
    pub date: NaiveDate,

    /// Non-negative amount, shown with two decimals
    pub amount: Decimal,

    /// Credit or debit
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
}

impl Transaction {
    pub fn new(
        id: u64,
        date: NaiveDate,
        amount: Decimal,
        transaction_type: TransactionType,
    ) -> Self {
        Self {
            id,
            date,
            amount,
            transaction_type,
        }
    }
}

/// Format an amount for display with a currency symbol and two decimals,
/// e.g. `format_amount(dec!(100), "$") == "$100.00"`.
pub fn format_amount(amount: Decimal, currency_symbol: &str) -> String {
    format!("{currency_symbol}{:.2}", amount.round_dp(2))
}
