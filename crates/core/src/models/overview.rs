use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One line of the "recent transactions" panel on the account overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentActivity {
    pub id: u64,
    /// Free-form label such as "Deposit" or "Withdrawal"
    pub label: String,
    pub amount: Decimal,
}

/// Account holder summary shown on the overview view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountOverview {
    pub user_id: u64,
    pub name: String,
    pub account_balance: Decimal,
    #[serde(default)]
    pub recent_activity: Vec<RecentActivity>,
}
