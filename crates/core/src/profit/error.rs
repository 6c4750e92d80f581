//! Profit split error types.

use thiserror::Error;

use qist_shared::error::AppError;

/// Errors from profit splitting.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfitError {
    /// Shared partnership accounts use the net-capital strategy, not the
    /// two-party percentage split.
    #[error("Shared accounts are excluded from the two-party profit split")]
    SharedAccountSplit,

    /// The date range is inverted.
    #[error("Date range start is after its end")]
    InvertedRange,
}

impl From<ProfitError> for AppError {
    fn from(err: ProfitError) -> Self {
        match err {
            ProfitError::SharedAccountSplit => Self::BusinessRule(err.to_string()),
            ProfitError::InvertedRange => Self::Validation(err.to_string()),
        }
    }
}
