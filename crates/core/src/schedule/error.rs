//! Schedule generation error types.

use thiserror::Error;

use qist_shared::error::AppError;

/// Errors from schedule generation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    /// Total amount must be positive.
    #[error("Total amount must be positive")]
    NonPositiveTotal,

    /// Down payment cannot be negative.
    #[error("Down payment cannot be negative")]
    NegativeDownPayment,

    /// Down payment cannot exceed the total amount.
    #[error("Down payment cannot exceed the total amount")]
    DownPaymentExceedsTotal,
}

impl From<ScheduleError> for AppError {
    fn from(err: ScheduleError) -> Self {
        Self::Validation(err.to_string())
    }
}
