use rust_decimal::Decimal;
use thiserror::Error;

use super::payroll_constants::MAX_MONETARY_AMOUNT;

/// Errors raised by the payroll engine before any computation happens.
///
/// None of these are retryable: the engine is deterministic, so the caller
/// has to supply different inputs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PayrollError {
    #[error("Payroll configuration has not been set up for company {company_id}")]
    ConfigurationMissing { company_id: String },

    #[error("Invalid amount for {field} ({value}): {reason}")]
    InvalidAmount {
        field: &'static str,
        value: Decimal,
        reason: String,
    },

    #[error("Invalid calculation context: {0}")]
    InvalidContext(String),
}

impl PayrollError {
    pub(crate) fn invalid_amount(field: &'static str, value: Decimal, reason: &str) -> Self {
        PayrollError::InvalidAmount {
            field,
            value,
            reason: reason.to_string(),
        }
    }
}

/// Rejects negative amounts and amounts beyond what any payroll could hold.
pub(crate) fn ensure_amount(field: &'static str, value: Decimal) -> Result<(), PayrollError> {
    if value < Decimal::ZERO {
        return Err(PayrollError::invalid_amount(
            field,
            value,
            "amount cannot be negative",
        ));
    }
    if value > MAX_MONETARY_AMOUNT {
        return Err(PayrollError::invalid_amount(
            field,
            value,
            "amount exceeds the supported maximum",
        ));
    }
    Ok(())
}

/// Percentages are accepted in the closed range `[0, 100]`.
pub(crate) fn ensure_percentage(field: &'static str, value: Decimal) -> Result<(), PayrollError> {
    if value < Decimal::ZERO {
        return Err(PayrollError::invalid_amount(
            field,
            value,
            "percentage cannot be negative",
        ));
    }
    if value > Decimal::ONE_HUNDRED {
        return Err(PayrollError::invalid_amount(
            field,
            value,
            "percentage cannot exceed 100",
        ));
    }
    Ok(())
}

pub(crate) fn ensure_month(month: u32) -> Result<(), PayrollError> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(PayrollError::InvalidContext(format!(
            "month must be between 1 and 12, got {}",
            month
        )))
    }
}
