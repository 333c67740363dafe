use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::errors::CoreError;
use crate::models::loan::Loan;
use crate::models::raw::{RawPost, RawUser};
use crate::models::settings::Settings;
use super::traits::DashboardProvider;

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

const PROVIDER_NAME: &str = "JSONPlaceholder";

/// JSONPlaceholder provider, a free fake REST API.
///
/// - **Free**: No API key, no rate limits.
/// - **Endpoints**: `GET /posts`, `GET /users/{id}`, `POST /posts`
/// - **Writes** are echoed back (with a fresh id) but never persisted.
pub struct JsonPlaceholderProvider {
    client: Client,
    base_url: String,
}

impl JsonPlaceholderProvider {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, Duration::from_secs(30))
    }

    pub fn with_base_url(base_url: impl Into<String>, timeout: Duration) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_else(|_| Client::new()),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::with_base_url(
            settings.api_base_url.clone(),
            Duration::from_secs(settings.request_timeout_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn posts_url(&self) -> String {
        format!("{}/posts", self.base_url)
    }

    pub fn user_url(&self, user_id: u64) -> String {
        format!("{}/users/{user_id}", self.base_url)
    }

    /// Turn a non-success status into an `Api` error, then parse the body.
    async fn parse<T: DeserializeOwned>(resp: Response, what: &str) -> Result<T, CoreError> {
        let status = resp.status();
        if !status.is_success() {
            return Err(CoreError::Api {
                provider: PROVIDER_NAME.into(),
                message: format!("{what} returned HTTP {status}"),
            });
        }
        resp.json().await.map_err(|e| CoreError::Api {
            provider: PROVIDER_NAME.into(),
            message: format!("Failed to parse {what}: {e}"),
        })
    }
}

impl Default for JsonPlaceholderProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DashboardProvider for JsonPlaceholderProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    async fn fetch_posts(&self) -> Result<Vec<RawPost>, CoreError> {
        let url = self.posts_url();
        log::debug!("GET {url}");
        let resp = self.client.get(&url).send().await?;
        Self::parse(resp, "posts").await
    }

    async fn fetch_user(&self, user_id: u64) -> Result<RawUser, CoreError> {
        let url = self.user_url(user_id);
        log::debug!("GET {url}");
        let resp = self.client.get(&url).send().await?;
        Self::parse(resp, &format!("user {user_id}")).await
    }

    async fn submit_loan(&self, loan: &Loan) -> Result<Loan, CoreError> {
        let url = self.posts_url();
        log::debug!("POST {url} (loan {})", loan.id);
        let resp = self.client.post(&url).json(loan).send().await?;
        Self::parse(resp, "loan submission").await
    }
}
