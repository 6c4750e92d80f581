//! Figures for a single-sale payment reminder.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use qist_shared::types::{Currency, Money};

use crate::allocation::PaymentAllocator;
use crate::sale::Sale;

/// Everything a reminder message needs for one sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderContext {
    /// Due date of the next outstanding slot.
    pub next_due_date: NaiveDate,
    /// What the customer should pay next, after surplus carry-forward.
    pub amount_due: Decimal,
    /// Past-due debt accumulated before the next slot (raw scheduled
    /// amounts, surplus not applied).
    pub overdue_debt: Decimal,
    /// Whole months elapsed since the earliest past-due entry. Zero when
    /// nothing is overdue.
    pub months_overdue: u32,
}

impl ReminderContext {
    /// Builds the reminder figures for a sale as of `today`.
    ///
    /// Returns `None` for cash sales and for sales with nothing left to
    /// collect.
    #[must_use]
    pub fn for_sale(sale: &Sale, today: NaiveDate) -> Option<Self> {
        let next = PaymentAllocator::outstanding_slots(sale).into_iter().next()?;

        let overdue_debt = PaymentAllocator::overdue_amount(sale, today);
        let months_overdue = sale
            .unpaid_entries()
            .iter()
            .filter(|e| e.due_date < today)
            .map(|e| whole_months_between(e.due_date, today))
            .max()
            .unwrap_or(0);

        Some(Self {
            next_due_date: next.due_date,
            amount_due: next.amount_to_pay,
            overdue_debt,
            months_overdue,
        })
    }

    /// The amount due in the tenant's bookkeeping currency, for templating.
    #[must_use]
    pub fn amount_due_in(&self, currency: Currency) -> Money {
        Money::new(self.amount_due, currency).rounded()
    }

    /// The overdue debt in the tenant's bookkeeping currency.
    #[must_use]
    pub fn overdue_debt_in(&self, currency: Currency) -> Money {
        Money::new(self.overdue_debt, currency).rounded()
    }
}

/// Whole calendar months from `from` to `to`, clamped at zero.
fn whole_months_between(from: NaiveDate, to: NaiveDate) -> u32 {
    if to <= from {
        return 0;
    }
    let mut months = (i64::from(to.year()) * 12 + i64::from(to.month0()))
        - (i64::from(from.year()) * 12 + i64::from(from.month0()));
    if to.day() < from.day() {
        months -= 1;
    }
    u32::try_from(months.max(0)).unwrap_or(0)
}
