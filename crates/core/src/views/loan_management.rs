use chrono::Utc;

use crate::errors::CoreError;
use crate::models::loan::{Loan, LoanRequest};
use crate::models::store::StoreState;
use crate::providers::traits::DashboardProvider;
use crate::services::loan_service::LoanService;
use crate::services::mapping_service::RecordMapper;

/// Loan management: the fetched loan list and the request flow.
#[derive(Debug)]
pub struct LoanManagementView {
    state: StoreState<Vec<Loan>>,
    limit: usize,
    activated: bool,
}

impl LoanManagementView {
    pub fn new(limit: usize) -> Self {
        Self {
            state: StoreState::Loading,
            limit,
            activated: false,
        }
    }

    /// Fetch and map the loan list. Only the first call does anything.
    pub async fn activate(&mut self, provider: &dyn DashboardProvider, mapper: &mut RecordMapper) {
        if self.activated {
            log::debug!("Loan management already activated; skipping fetch");
            return;
        }
        self.activated = true;

        self.state = match provider.fetch_posts().await {
            Ok(posts) => {
                let loans = mapper.map_loans(&posts, self.limit);
                log::info!("Loaded {} loans from {}", loans.len(), provider.name());
                StoreState::Ready(loans)
            }
            Err(e) => {
                log::error!("Error fetching loan data from {}: {e}", provider.name());
                StoreState::Failed(e.to_string())
            }
        };
    }

    pub fn state(&self) -> &StoreState<Vec<Loan>> {
        &self.state
    }

    pub fn loans(&self) -> &[Loan] {
        self.state.records()
    }

    pub fn is_activated(&self) -> bool {
        self.activated
    }

    /// Validate, submit, and append the backend's copy of the new loan.
    ///
    /// The list is only touched after a successful submission: a
    /// validation or network failure leaves it exactly as it was.
    pub async fn request_loan(
        &mut self,
        provider: &dyn DashboardProvider,
        request: &LoanRequest,
    ) -> Result<&Loan, CoreError> {
        let StoreState::Ready(loans) = &mut self.state else {
            return Err(CoreError::ValidationError(
                "Loans are not loaded; cannot request a new loan".into(),
            ));
        };

        let loan = LoanService::new().build_loan(request, loans, Utc::now())?;

        let stored = provider.submit_loan(&loan).await.map_err(|e| {
            log::error!("Error submitting loan request to {}: {e}", provider.name());
            e
        })?;
        log::info!("Loan {} requested ({} for {} months)", stored.id, stored.amount, stored.tenure_months);

        loans.push(stored);
        Ok(&loans[loans.len() - 1])
    }
}
