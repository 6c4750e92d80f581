//! Allocation view types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use qist_shared::types::PaymentId;

/// Residual at or below this amount counts as fully covered; the slot is
/// hidden from the still-owed view.
pub const COVERED_EPSILON: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// An unpaid schedule slot after surplus carry-forward.
///
/// Display-only: the underlying plan entry stays unpaid in storage until a
/// payment is explicitly applied to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectedSlot {
    /// The underlying plan entry.
    pub payment_id: PaymentId,
    /// Due date of the slot.
    pub due_date: NaiveDate,
    /// Nominal scheduled amount.
    pub scheduled_amount: Decimal,
    /// Portion covered by carried-forward surplus.
    pub covered: Decimal,
    /// What the customer still owes on this slot.
    pub amount_to_pay: Decimal,
}

impl ProjectedSlot {
    /// Whether the slot is fully covered by surplus (within the epsilon).
    #[must_use]
    pub fn is_covered(&self) -> bool {
        self.amount_to_pay <= COVERED_EPSILON
    }
}
