//! Payment recording, undo, and surplus carry-forward.
//!
//! Real payments are not required to match a scheduled installment; the
//! unpaid schedule is therefore reconciled on read by carrying the surplus
//! of received money forward across slots in due-date order. That
//! reconciliation is a display computation only; storage changes happen
//! exclusively through the explicit operations here.

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use error::AllocationError;
pub use service::PaymentAllocator;
pub use types::{ProjectedSlot, COVERED_EPSILON};
