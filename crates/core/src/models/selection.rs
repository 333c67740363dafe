use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::transaction::TransactionType;

/// Which transaction types are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeFilter {
    #[default]
    All,
    Credit,
    Debit,
}

impl TypeFilter {
    /// `All` matches everything, otherwise the type must be equal.
    pub fn matches(&self, transaction_type: TransactionType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Credit => transaction_type == TransactionType::Credit,
            TypeFilter::Debit => transaction_type == TransactionType::Debit,
        }
    }
}

impl std::fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeFilter::All => write!(f, "all"),
            TypeFilter::Credit => write!(f, "credit"),
            TypeFilter::Debit => write!(f, "debit"),
        }
    }
}

impl FromStr for TypeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(TypeFilter::All),
            "credit" => Ok(TypeFilter::Credit),
            "debit" => Ok(TypeFilter::Debit),
            other => Err(format!("unknown type filter '{other}' (expected all, credit or debit)")),
        }
    }
}

/// Optional inclusive date bounds.
///
/// The range only takes effect when both bounds are set; a one-sided
/// range is ignored entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// Both bounds set.
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Returns the bounds when the range is active.
    pub fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.bounds().is_some()
    }
}

/// Column the display sequence is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Date,
    Amount,
    Type,
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::Date => write!(f, "date"),
            SortKey::Amount => write!(f, "amount"),
            SortKey::Type => write!(f, "type"),
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "date" => Ok(SortKey::Date),
            "amount" => Ok(SortKey::Amount),
            "type" => Ok(SortKey::Type),
            other => Err(format!("unknown sort key '{other}' (expected date, amount or type)")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Ascending => write!(f, "asc"),
            SortOrder::Descending => write!(f, "desc"),
        }
    }
}

/// The user-controlled filter/sort parameters of a transaction view.
///
/// A plain value: every change produces a new `Selection`, and the
/// display sequence is re-derived from it. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
    pub type_filter: TypeFilter,
    pub date_range: DateRange,
    pub sort_key: SortKey,
    pub sort_order: SortOrder,
}

impl Selection {
    pub fn with_type_filter(self, type_filter: TypeFilter) -> Self {
        Self { type_filter, ..self }
    }

    pub fn with_date_range(self, date_range: DateRange) -> Self {
        Self { date_range, ..self }
    }

    pub fn with_sort(self, sort_key: SortKey, sort_order: SortOrder) -> Self {
        Self {
            sort_key,
            sort_order,
            ..self
        }
    }

    /// Column-header click semantics: selecting the active key flips the
    /// order, selecting a different key switches to it in ascending order.
    pub fn select_sort(self, key: SortKey) -> Self {
        if key == self.sort_key {
            Self {
                sort_order: self.sort_order.toggled(),
                ..self
            }
        } else {
            Self {
                sort_key: key,
                sort_order: SortOrder::Ascending,
                ..self
            }
        }
    }
}
