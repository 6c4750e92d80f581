//! Store and service error types.

use thiserror::Error;
use qist_shared::error::AppError;
use qist_shared::types::SaleId;

use crate::allocation::AllocationError;

/// Errors from a persistence backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No sale with the given id.
    #[error("sale not found: {0}")]
    SaleNotFound(SaleId),

    /// The backend failed (connection, serialization, I/O).
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Errors from the transactional sale service.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The persistence backend failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The business rule rejected the mutation.
    #[error(transparent)]
    Allocation(#[from] AllocationError),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::SaleNotFound(_) => Self::NotFound(err.to_string()),
            StoreError::Backend(_) => Self::Storage(err.to_string()),
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Store(e) => e.into(),
            ServiceError::Allocation(e) => e.into(),
        }
    }
}
