//! Partner equity splits for shared accounts.
//!
//! Shared accounts split by net capital contributed, which is a different
//! algorithm from the per-sale percentage split used for investor-funded
//! accounts. The two are deliberately kept apart.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use qist_shared::types::InvestorId;

use crate::account::{Account, AccountKind, Expense};
use crate::sale::Sale;

use super::balance::LedgerAggregator;
use super::entry::{account_entries, LedgerEntry};

/// One partner's position in a shared account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerSplit {
    /// The partner.
    pub investor_id: InvestorId,
    /// Deposits minus investment withdrawals, floored at zero.
    pub net_capital: Decimal,
    /// This partner's fraction of total net capital, as a percentage.
    pub share_percent: Decimal,
    /// The partner's slice of the account's total equity.
    pub equity_value: Decimal,
    /// Equity value above contributed capital, floored at zero.
    pub available_profit: Decimal,
}

/// Computes every partner's capital share for a shared account.
///
/// Non-shared accounts, and shared accounts where no partner has positive
/// net capital, yield an empty split (nothing to apportion).
#[must_use]
pub fn partner_splits(account: &Account, sales: &[Sale], expenses: &[Expense]) -> Vec<PartnerSplit> {
    let AccountKind::Shared { partners } = &account.kind else {
        return Vec::new();
    };

    let entries = account_entries(account, sales, expenses);
    let net_capitals: Vec<(InvestorId, Decimal)> = partners
        .iter()
        .map(|partner| (*partner, net_capital(*partner, &entries)))
        .collect();

    let total_capital: Decimal = net_capitals.iter().map(|(_, c)| *c).sum();
    if total_capital <= Decimal::ZERO {
        return Vec::new();
    }

    let total_equity = LedgerAggregator::summarize(account, sales, expenses).total_equity;

    net_capitals
        .into_iter()
        .map(|(investor_id, capital)| {
            let share = capital / total_capital;
            let equity_value = (total_equity * share).round_dp(2);
            PartnerSplit {
                investor_id,
                net_capital: capital,
                share_percent: (share * Decimal::ONE_HUNDRED).round_dp(2),
                equity_value,
                available_profit: (equity_value - capital).max(Decimal::ZERO),
            }
        })
        .collect()
}

/// Deposits minus investment withdrawals for one partner, floored at zero.
fn net_capital(partner: InvestorId, entries: &[LedgerEntry]) -> Decimal {
    let raw: Decimal = entries
        .iter()
        .map(|entry| match entry {
            LedgerEntry::CapitalDeposit {
                investor_id,
                amount,
                ..
            } if *investor_id == partner => *amount,
            LedgerEntry::CapitalWithdrawal {
                investor_id: Some(investor_id),
                amount,
                ..
            } if *investor_id == partner => -*amount,
            _ => Decimal::ZERO,
        })
        .sum();
    raw.max(Decimal::ZERO)
}
