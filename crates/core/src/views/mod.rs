pub mod account_overview;
pub mod loan_management;
pub mod transaction_history;
