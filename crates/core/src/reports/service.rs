//! Report computation.

use rust_decimal::Decimal;
use tracing::debug;

use crate::account::{Account, AccountKind, Expense, Financing, Investor};
use crate::ledger::{account_entries, sale_entries, LedgerEntry};
use crate::profit::ProfitSplitter;
use crate::sale::Sale;

use super::types::{ReportFilter, ReportSummary};

/// Stateless report computation over the full record set.
pub struct ReportService;

impl ReportService {
    /// Computes the profit report for a filter. Pure function of its
    /// inputs; shared partnership sales are excluded from the two-party
    /// profit figures (their economics live in `ledger::partners`).
    #[must_use]
    pub fn compute_report(
        sales: &[Sale],
        accounts: &[Account],
        investors: &[Investor],
        expenses: &[Expense],
        filter: &ReportFilter,
    ) -> ReportSummary {
        let scoped: Vec<&Account> = accounts
            .iter()
            .filter(|account| match filter.investor_id {
                None => true,
                Some(investor_id) => {
                    account.kind == AccountKind::Investor { owner: investor_id }
                }
            })
            .collect();

        let mut summary = ReportSummary {
            customer_payments_in_period: Decimal::ZERO,
            expected_manager_profit: Decimal::ZERO,
            expected_investor_profit: Decimal::ZERO,
            realized_manager_profit: Decimal::ZERO,
            realized_investor_profit: Decimal::ZERO,
        };

        for account in &scoped {
            for entry in account_entries(account, sales, expenses) {
                if let LedgerEntry::RecordedPayment { amount, date, .. } = entry
                    && filter.range.contains(date)
                {
                    summary.customer_payments_in_period += amount;
                }
            }

            for sale in sales.iter().filter(|s| s.account_id == account.id) {
                let financing = Financing::resolve(sale.account_id, accounts, investors);
                if financing == Financing::Shared {
                    continue;
                }

                Self::add_profit(&mut summary, sale, financing, filter);
            }
        }

        // Sales whose account has been deleted degrade to self-funded
        // instead of vanishing from the figures; an investor-scoped report
        // has no such sales by definition.
        if filter.investor_id.is_none() {
            let orphans = sales
                .iter()
                .filter(|s| !accounts.iter().any(|a| a.id == s.account_id));
            for sale in orphans {
                for entry in sale_entries(sale) {
                    if let LedgerEntry::RecordedPayment { amount, date, .. } = entry
                        && filter.range.contains(date)
                    {
                        summary.customer_payments_in_period += amount;
                    }
                }
                let financing = Financing::resolve(sale.account_id, accounts, investors);
                Self::add_profit(&mut summary, sale, financing, filter);
            }
        }

        debug!(
            accounts = scoped.len(),
            payments = %summary.customer_payments_in_period,
            "computed report"
        );
        summary
    }

    fn add_profit(
        summary: &mut ReportSummary,
        sale: &Sale,
        financing: Financing,
        filter: &ReportFilter,
    ) {
        if let Ok(expected) = ProfitSplitter::expected_profit(sale, financing) {
            summary.expected_manager_profit += expected.manager;
            summary.expected_investor_profit += expected.investor;
        }
        if let Ok(realized) = ProfitSplitter::realized_profit(sale, filter.range, financing) {
            summary.realized_manager_profit += realized.manager;
            summary.realized_investor_profit += realized.investor;
        }
    }
}
