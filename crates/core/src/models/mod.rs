pub mod loan;
pub mod overview;
pub mod raw;
pub mod selection;
pub mod settings;
pub mod store;
pub mod transaction;
