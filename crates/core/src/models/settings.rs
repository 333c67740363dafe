use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::CoreError;

/// User-configurable settings, optionally loaded from a JSON file.
/// Missing fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the placeholder API (no trailing slash needed).
    pub api_base_url: String,

    /// User whose account overview is shown.
    pub user_id: u64,

    /// How many fetched items become transactions.
    pub transaction_limit: usize,

    /// How many fetched items become loans.
    pub loan_limit: usize,

    /// HTTP request timeout in seconds.
    pub request_timeout_secs: u64,

    /// Prefix used when amounts are displayed (e.g., "$").
    pub currency_symbol: String,

    /// Log level for the binary: error, warn, info, debug, trace.
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: "https://jsonplaceholder.typicode.com".to_string(),
            user_id: 1,
            transaction_limit: 10,
            loan_limit: 5,
            request_timeout_secs: 30,
            currency_symbol: "$".to_string(),
            log_level: "warn".to_string(),
        }
    }
}

impl Settings {
    /// Read settings from a JSON file and validate them.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&contents)
    }

    /// Parse settings from a JSON string and validate them.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.api_base_url = settings.api_base_url.trim_end_matches('/').to_string();
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.api_base_url.trim().is_empty() {
            return Err(CoreError::Config("api_base_url must not be empty".into()));
        }
        if self.transaction_limit == 0 {
            return Err(CoreError::Config("transaction_limit must be at least 1".into()));
        }
        if self.loan_limit == 0 {
            return Err(CoreError::Config("loan_limit must be at least 1".into()));
        }
        if self.request_timeout_secs == 0 {
            return Err(CoreError::Config("request_timeout_secs must be at least 1".into()));
        }
        Ok(())
    }
}
