use crate::models::overview::AccountOverview;
use crate::models::store::StoreState;
use crate::providers::traits::DashboardProvider;
use crate::services::mapping_service::RecordMapper;

/// Account overview for a single user.
#[derive(Debug)]
pub struct AccountOverviewView {
    state: StoreState<AccountOverview>,
    user_id: u64,
    activated: bool,
}

impl AccountOverviewView {
    pub fn new(user_id: u64) -> Self {
        Self {
            state: StoreState::Loading,
            user_id,
            activated: false,
        }
    }

    /// Fetch the user and build the overview. Only the first call does anything.
    pub async fn activate(&mut self, provider: &dyn DashboardProvider, mapper: &RecordMapper) {
        if self.activated {
            return;
        }
        self.activated = true;

        self.state = provider
            .fetch_user(self.user_id)
            .await
            .map(|user| mapper.map_overview(&user))
            .inspect_err(|e| {
                log::error!("Error fetching user data from {}: {e}", provider.name());
            })
            .into();
    }

    pub fn state(&self) -> &StoreState<AccountOverview> {
        &self.state
    }

    pub fn overview(&self) -> Option<&AccountOverview> {
        self.state.ready()
    }

    pub fn user_id(&self) -> u64 {
        self.user_id
    }
}
