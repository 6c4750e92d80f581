//! Profit splitting service.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::account::{Account, AccountKind, Expense, Financing, Investor, PayoutKind};
use crate::sale::{Sale, SaleStatus};

use super::error::ProfitError;
use super::types::{Accrual, DateRange, ProfitShare};

/// Stateless profit splitter.
pub struct ProfitSplitter;

impl ProfitSplitter {
    /// Profit margin of a sale: `(price - cost) / price`.
    ///
    /// Defined only for a positive price strictly above cost; otherwise
    /// zero, so zero-priced and negative-margin contracts recognize no
    /// profit instead of propagating division artifacts.
    #[must_use]
    pub fn margin(total_amount: Decimal, buy_price: Decimal) -> Decimal {
        if total_amount <= Decimal::ZERO || buy_price >= total_amount {
            return Decimal::ZERO;
        }
        (total_amount - buy_price) / total_amount
    }

    /// The accrual stream of a sale: the down payment at the sale date plus
    /// every money movement at its own date, each worth `amount x margin`
    /// rounded to 2 decimal places.
    ///
    /// Real payments accrue in full; a slot settled through surplus
    /// absorption accrues only the portion no recorded real payment funds,
    /// so the same cash never accrues twice.
    #[must_use]
    pub fn accruals(sale: &Sale) -> Vec<Accrual> {
        let margin = Self::margin(sale.total_amount, sale.buy_price);
        if margin.is_zero() {
            return Vec::new();
        }

        let mut accruals = Vec::new();
        if sale.down_payment > Decimal::ZERO {
            accruals.push(Accrual {
                date: sale.sale_date,
                amount: (sale.down_payment * margin).round_dp(2),
            });
        }

        let mut movements: Vec<(NaiveDate, Decimal)> = sale
            .payment_plan
            .iter()
            .filter(|e| e.is_paid && e.is_real_payment)
            .map(|e| (e.due_date, e.amount))
            .collect();
        movements.extend(
            sale.unfunded_paid_slots()
                .into_iter()
                .map(|(slot, residual)| (slot.due_date, residual)),
        );
        movements.sort_by_key(|(date, _)| *date);

        for (date, amount) in movements {
            accruals.push(Accrual {
                date,
                amount: (amount * margin).round_dp(2),
            });
        }
        accruals
    }

    /// Splits one accrual between manager and investor.
    ///
    /// # Errors
    ///
    /// Returns `ProfitError::SharedAccountSplit` for partnership accounts;
    /// their economics use the net-capital strategy in `ledger::partners`.
    pub fn split(accrual: Decimal, financing: Financing) -> Result<ProfitShare, ProfitError> {
        match financing {
            Financing::SelfFunded => Ok(ProfitShare {
                manager: accrual,
                investor: Decimal::ZERO,
            }),
            Financing::InvestorFunded { percent } => {
                let investor = (accrual * percent / Decimal::ONE_HUNDRED).round_dp(2);
                Ok(ProfitShare {
                    manager: accrual - investor,
                    investor,
                })
            }
            Financing::Shared => Err(ProfitError::SharedAccountSplit),
        }
    }

    /// Forward-looking profit if the remaining schedule is fully collected:
    /// `(total - cost)` split by financing, for an active sale with a known
    /// cost basis. Not time-bounded.
    ///
    /// # Errors
    ///
    /// Propagates `ProfitError::SharedAccountSplit` for partnership sales.
    pub fn expected_profit(
        sale: &Sale,
        financing: Financing,
    ) -> Result<ProfitShare, ProfitError> {
        if sale.status != SaleStatus::Active || sale.buy_price <= Decimal::ZERO {
            return Ok(ProfitShare::default());
        }
        let gross = sale.total_amount - sale.buy_price;
        if gross <= Decimal::ZERO {
            return Ok(ProfitShare::default());
        }
        Self::split(gross, financing)
    }

    /// Historical profit from accruals dated within `range`, split per
    /// accrual and summed.
    ///
    /// # Errors
    ///
    /// Propagates `ProfitError::SharedAccountSplit` for partnership sales.
    pub fn realized_profit(
        sale: &Sale,
        range: DateRange,
        financing: Financing,
    ) -> Result<ProfitShare, ProfitError> {
        let mut total = ProfitShare::default();
        for accrual in Self::accruals(sale) {
            if range.contains(accrual.date) {
                total += Self::split(accrual.amount, financing)?;
            }
        }
        Ok(total)
    }

    /// An investor's profit balance: all-time realized investor share on
    /// sales financed through their accounts, minus profit-category
    /// payouts from those accounts. Never mixes with invested capital.
    #[must_use]
    pub fn investor_profit_balance(
        investor: &Investor,
        accounts: &[Account],
        sales: &[Sale],
        expenses: &[Expense],
    ) -> Decimal {
        let financing = Financing::InvestorFunded {
            percent: investor.profit_percentage,
        };
        let owned: Vec<_> = accounts
            .iter()
            .filter(|a| a.kind == AccountKind::Investor { owner: investor.id })
            .map(|a| a.id)
            .collect();

        let earned: Decimal = sales
            .iter()
            .filter(|s| owned.contains(&s.account_id))
            .flat_map(Self::accruals)
            .map(|accrual| {
                Self::split(accrual.amount, financing)
                    .map_or(Decimal::ZERO, |share| share.investor)
            })
            .sum();

        let withdrawn: Decimal = expenses
            .iter()
            .filter(|e| owned.contains(&e.account_id) && e.payout == Some(PayoutKind::Profit))
            .map(|e| e.amount)
            .sum();

        earned - withdrawn
    }

    /// An investor's capital balance: contributed principal minus
    /// investment-category payouts from their accounts.
    #[must_use]
    pub fn investor_capital_balance(
        investor: &Investor,
        accounts: &[Account],
        expenses: &[Expense],
    ) -> Decimal {
        let owned: Vec<_> = accounts
            .iter()
            .filter(|a| a.kind == AccountKind::Investor { owner: investor.id })
            .map(|a| a.id)
            .collect();

        let withdrawn: Decimal = expenses
            .iter()
            .filter(|e| owned.contains(&e.account_id) && e.payout == Some(PayoutKind::Investment))
            .map(|e| e.amount)
            .sum();

        investor.initial_amount - withdrawn
    }
}
