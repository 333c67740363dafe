use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::errors::CoreError;
use crate::models::loan::{Loan, LoanRequest, LoanStatus};

/// Validates loan requests and turns them into loan records.
///
/// Pure business logic — submission itself goes through the provider.
pub struct LoanService;

impl LoanService {
    pub fn new() -> Self {
        Self
    }

    /// Every field of the request form is required.
    pub fn validate(&self, request: &LoanRequest) -> Result<(), CoreError> {
        if request.amount <= Decimal::ZERO {
            return Err(CoreError::ValidationError(
                "Loan amount is required and must be positive".into(),
            ));
        }
        if request.tenure_months == 0 {
            return Err(CoreError::ValidationError(
                "Loan tenure is required (at least 1 month)".into(),
            ));
        }
        if request.purpose.trim().is_empty() {
            return Err(CoreError::ValidationError("Loan purpose is required".into()));
        }
        Ok(())
    }

    /// Build the record to submit: next sequential id, active, stamped `now`.
    pub fn build_loan(
        &self,
        request: &LoanRequest,
        existing: &[Loan],
        now: DateTime<Utc>,
    ) -> Result<Loan, CoreError> {
        self.validate(request)?;
        Ok(Loan {
            id: existing.len() as u64 + 1,
            amount: request.amount,
            tenure_months: request.tenure_months,
            purpose: request.purpose.trim().to_string(),
            status: LoanStatus::Active,
            date_requested: Some(now),
        })
    }
}

impl Default for LoanService {
    fn default() -> Self {
        Self::new()
    }
}
