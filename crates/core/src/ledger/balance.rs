//! Account balance and receivables aggregation.

use rayon::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use qist_shared::types::AccountId;

use crate::account::{Account, Expense};
use crate::sale::{Sale, SaleStatus};

use super::entry::{account_entries, LedgerEntry};

/// Derived financial position of one account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSummary {
    /// The account.
    pub account_id: AccountId,
    /// Cash on hand: inflows minus outflows over the full history.
    pub cash_balance: Decimal,
    /// Outstanding amounts across the account's active sales.
    pub receivables: Decimal,
    /// Cash plus receivables.
    pub total_equity: Decimal,
}

/// Stateless aggregation over accounts, sales, and expenses.
pub struct LedgerAggregator;

impl LedgerAggregator {
    /// Cash balance of an account: a commutative fold over its typed
    /// ledger entries. Recomputed from source records on every call.
    #[must_use]
    pub fn cash_balance(account: &Account, sales: &[Sale], expenses: &[Expense]) -> Decimal {
        account_entries(account, sales, expenses)
            .iter()
            .map(LedgerEntry::cash_effect)
            .sum()
    }

    /// Receivables: outstanding amounts over the account's active sales.
    #[must_use]
    pub fn receivables(account: &Account, sales: &[Sale]) -> Decimal {
        sales
            .iter()
            .filter(|s| s.account_id == account.id && s.status == SaleStatus::Active)
            .map(|s| s.remaining_amount)
            .sum()
    }

    /// Full derived position of one account.
    #[must_use]
    pub fn summarize(account: &Account, sales: &[Sale], expenses: &[Expense]) -> AccountSummary {
        let cash_balance = Self::cash_balance(account, sales, expenses);
        let receivables = Self::receivables(account, sales);
        AccountSummary {
            account_id: account.id,
            cash_balance,
            receivables,
            total_equity: cash_balance + receivables,
        }
    }

    /// Positions for every account, computed in parallel. Each summary is
    /// an independent pure fold, so the fan-out is safe.
    #[must_use]
    pub fn summarize_all(
        accounts: &[Account],
        sales: &[Sale],
        expenses: &[Expense],
    ) -> Vec<AccountSummary> {
        accounts
            .par_iter()
            .map(|account| Self::summarize(account, sales, expenses))
            .collect()
    }
}
