use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::loan::Loan;
use crate::models::raw::{RawPost, RawUser};

/// Source of the raw records behind every dashboard view.
///
/// Views only see this trait, so the placeholder backend can be swapped
/// for a real one (or a mock in tests) without touching them. Providers
/// return raw items; shaping them into domain records is the mapper's job.
#[async_trait]
pub trait DashboardProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Fetch the collection that transactions and loans are derived from.
    async fn fetch_posts(&self) -> Result<Vec<RawPost>, CoreError>;

    /// Fetch the account holder shown on the overview.
    async fn fetch_user(&self, user_id: u64) -> Result<RawUser, CoreError>;

    /// Submit a new loan and return the record as stored by the backend.
    async fn submit_loan(&self, loan: &Loan) -> Result<Loan, CoreError>;
}
