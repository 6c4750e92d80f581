//! Allocation error types.

use thiserror::Error;
use qist_shared::error::AppError;
use qist_shared::types::PaymentId;

/// Errors from payment allocation operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AllocationError {
    /// Payment amounts must be positive.
    #[error("Payment amount must be positive")]
    NonPositiveAmount,

    /// No plan entry with the given id exists on the sale.
    #[error("Payment not found: {0}")]
    PaymentNotFound(PaymentId),

    /// The targeted entry is already paid.
    #[error("Payment already settled: {0}")]
    AlreadyPaid(PaymentId),

    /// The targeted entry has not been paid.
    #[error("Payment not settled: {0}")]
    NotPaid(PaymentId),
}

impl From<AllocationError> for AppError {
    fn from(err: AllocationError) -> Self {
        match err {
            AllocationError::NonPositiveAmount => Self::Validation(err.to_string()),
            AllocationError::PaymentNotFound(_) => Self::NotFound(err.to_string()),
            AllocationError::AlreadyPaid(_) | AllocationError::NotPaid(_) => {
                Self::BusinessRule(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_codes() {
        let err: AppError = AllocationError::NonPositiveAmount.into();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");

        let err: AppError = AllocationError::PaymentNotFound(PaymentId::new()).into();
        assert_eq!(err.error_code(), "NOT_FOUND");

        let err: AppError = AllocationError::AlreadyPaid(PaymentId::new()).into();
        assert_eq!(err.error_code(), "BUSINESS_RULE_VIOLATION");
    }
}
