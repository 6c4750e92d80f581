//! Margin accrual and manager/investor profit splits.
//!
//! Profit is recognized per money movement: the down payment, every real
//! payment, and the unfunded residual of absorbed slots each contribute
//! `amount x margin` at their own date. Splitting
//! between the manager and a financing investor happens per accrual, so the
//! expected and realized views agree whenever their parameters match.

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use error::ProfitError;
pub use service::ProfitSplitter;
pub use types::{Accrual, DateRange, ProfitShare};
