pub mod loan_service;
pub mod mapping_service;
pub mod transaction_service;
