//! Paid-history table derivation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::sale::Sale;

/// One row of the printable payment table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementRow {
    /// 1-based position in chronological order.
    pub index: usize,
    /// Date the payment was received.
    pub date: NaiveDate,
    /// Amount received.
    pub amount: Decimal,
    /// Debt remaining after this payment.
    pub remaining_after: Decimal,
}

/// Builds the printable payment table for a sale.
///
/// Walks paid entries in date order, decrementing an initial debt of
/// `total_amount - down_payment`; the final row's remainder reproduces the
/// outstanding figure used everywhere else.
#[must_use]
pub fn payment_table(sale: &Sale) -> Vec<StatementRow> {
    let mut debt = sale.total_amount - sale.down_payment;

    sale.paid_entries()
        .into_iter()
        .enumerate()
        .map(|(i, entry)| {
            debt -= entry.amount;
            StatementRow {
                index: i + 1,
                date: entry.due_date,
                amount: entry.amount,
                remaining_after: debt,
            }
        })
        .collect()
}
