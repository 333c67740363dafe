pub mod errors;
pub mod models;
pub mod providers;
pub mod services;
pub mod views;

use models::{loan::{Loan, LoanRequest}, settings::Settings};
use providers::{jsonplaceholder::JsonPlaceholderProvider, traits::DashboardProvider};
use services::mapping_service::RecordMapper;
use views::{
    account_overview::AccountOverviewView, loan_management::LoanManagementView,
    transaction_history::TransactionHistoryView,
};

use errors::CoreError;

/// Main entry point for the dashboard core library.
///
/// Holds the settings, the data provider, and the record mapper shared by
/// the three views. Each `open_*` call is one view activation: it builds a
/// fresh view and performs that view's single fetch. The returned view
/// owns its store; dropping it discards the records.
#[must_use]
pub struct Dashboard {
    settings: Settings,
    provider: Box<dyn DashboardProvider>,
    mapper: RecordMapper,
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("settings", &self.settings)
            .field("provider", &self.provider.name())
            .field("today", &self.mapper.today())
            .finish()
    }
}

impl Dashboard {
    /// Dashboard backed by the placeholder HTTP API described by `settings`.
    pub fn new(settings: Settings) -> Result<Self, CoreError> {
        settings.validate()?;
        let provider = JsonPlaceholderProvider::from_settings(&settings);
        Ok(Self::with_provider(settings, Box::new(provider), RecordMapper::new()))
    }

    /// Dashboard with an explicit provider and mapper (tests, other backends).
    pub fn with_provider(
        settings: Settings,
        provider: Box<dyn DashboardProvider>,
        mapper: RecordMapper,
    ) -> Self {
        Self {
            settings,
            provider,
            mapper,
        }
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    // ── Views ───────────────────────────────────────────────────────

    /// Activate the transaction history view.
    pub async fn open_transaction_history(&mut self) -> TransactionHistoryView {
        let mut view = TransactionHistoryView::new(self.settings.transaction_limit);
        view.activate(self.provider.as_ref(), &mut self.mapper).await;
        view
    }

    /// Activate the loan management view.
    pub async fn open_loan_management(&mut self) -> LoanManagementView {
        let mut view = LoanManagementView::new(self.settings.loan_limit);
        view.activate(self.provider.as_ref(), &mut self.mapper).await;
        view
    }

    /// Activate the account overview for the configured user.
    pub async fn open_account_overview(&self) -> AccountOverviewView {
        let mut view = AccountOverviewView::new(self.settings.user_id);
        view.activate(self.provider.as_ref(), &self.mapper).await;
        view
    }

    // ── Loan Requests ───────────────────────────────────────────────

    /// Submit a loan request through the dashboard's provider.
    pub async fn request_loan<'v>(
        &self,
        view: &'v mut LoanManagementView,
        request: &LoanRequest,
    ) -> Result<&'v Loan, CoreError> {
        view.request_loan(self.provider.as_ref(), request).await
    }
}
