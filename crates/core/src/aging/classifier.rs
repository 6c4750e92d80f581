//! Sale aging classification.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::allocation::PaymentAllocator;
use crate::sale::{Sale, SaleStatus};

/// Aging classification of a sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaleAging {
    /// Outstanding amount, nothing past due.
    Active,
    /// At least one unpaid entry strictly before today.
    Overdue,
    /// Completed (closed) contract.
    Archived,
}

/// Pure sale aging classifier.
pub struct AgingClassifier;

impl AgingClassifier {
    /// Classifies a sale against `today` (midnight-normalized dates).
    ///
    /// Completed sales and sales with nothing outstanding are `Archived`;
    /// otherwise a sale with any unpaid entry dated strictly before today
    /// is `Overdue`, else `Active`.
    #[must_use]
    pub fn classify(sale: &Sale, today: NaiveDate) -> SaleAging {
        if sale.status == SaleStatus::Completed || sale.remaining_amount.is_zero() {
            return SaleAging::Archived;
        }
        if sale
            .payment_plan
            .iter()
            .any(|e| !e.is_paid && e.due_date < today)
        {
            return SaleAging::Overdue;
        }
        SaleAging::Active
    }

    /// Monetary total of past-due entries, for collections.
    #[must_use]
    pub fn overdue_total(sale: &Sale, today: NaiveDate) -> Decimal {
        PaymentAllocator::overdue_amount(sale, today)
    }
}
