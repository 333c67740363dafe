use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Repayment status of a loan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanStatus {
    Active,
    Paid,
}

impl std::fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoanStatus::Active => write!(f, "active"),
            LoanStatus::Paid => write!(f, "paid"),
        }
    }
}

/// A loan as listed on the loan management view.
///
/// Serialized in the placeholder API's camelCase shape, since the same
/// struct is posted when a new loan is requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    pub id: u64,

    pub amount: Decimal,

    /// Repayment period in months
    #[serde(rename = "tenure")]
    pub tenure_months: u32,

    pub purpose: String,

    pub status: LoanStatus,

    /// Set for loans requested through this dashboard; listed loans
    /// usually have none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_requested: Option<DateTime<Utc>>,
}

/// Loan request form input. Every field is required.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoanRequest {
    pub amount: Decimal,
    pub tenure_months: u32,
    pub purpose: String,
}

impl LoanRequest {
    pub fn new(amount: Decimal, tenure_months: u32, purpose: impl Into<String>) -> Self {
        Self {
            amount,
            tenure_months,
            purpose: purpose.into(),
        }
    }
}
