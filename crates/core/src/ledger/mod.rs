//! Balance, receivables, and partner equity aggregation.
//!
//! Everything here is a pure fold recomputed from the full record set.
//! Balances are never stored as mutable counters; a cached figure is always
//! recomputed wholesale, never incrementally patched.

pub mod balance;
pub mod entry;
pub mod partners;

#[cfg(test)]
mod balance_props;

pub use balance::{AccountSummary, LedgerAggregator};
pub use entry::{account_entries, sale_entries, LedgerEntry};
pub use partners::{partner_splits, PartnerSplit};
