//! Sales and payment plans.
//!
//! A sale is an installment contract: commercial terms plus an ordered
//! payment plan that serves both as the forward schedule (unpaid entries)
//! and the paid-history ledger (paid entries) of the same contract.

pub mod types;

pub use types::{PaymentEntry, Sale, SaleKind, SaleStatus};
