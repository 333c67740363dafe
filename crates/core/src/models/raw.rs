use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

/// An item of the placeholder API's `/posts` collection.
///
/// Real posts only carry an `id` (plus fields we ignore); the optional
/// fields are honoured when a backend does supply them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPost {
    pub id: u64,

    #[serde(default)]
    pub date: Option<NaiveDate>,

    #[serde(default)]
    pub amount: Option<Decimal>,

    #[serde(default, rename = "type")]
    pub kind: Option<String>,

    #[serde(default)]
    pub date_requested: Option<DateTime<Utc>>,
}

impl RawPost {
    pub fn with_id(id: u64) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }
}

/// The placeholder API's `/users/{id}` resource, reduced to what the
/// overview needs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawUser {
    pub id: u64,
    pub name: String,
}
