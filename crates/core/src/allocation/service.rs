//! Payment allocation service.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;
use qist_shared::types::PaymentId;

use crate::sale::{PaymentEntry, Sale, SaleStatus};

use super::error::AllocationError;
use super::types::{ProjectedSlot, COVERED_EPSILON};

/// Stateless payment allocator.
pub struct PaymentAllocator;

impl PaymentAllocator {
    /// Records a real payment received on `date`.
    ///
    /// Appends a paid entry flagged as cash actually received, rederives the
    /// outstanding amount (floored at zero), and transitions the sale to
    /// `Completed` when nothing remains.
    ///
    /// # Errors
    ///
    /// Returns `AllocationError::NonPositiveAmount` for a zero or negative
    /// amount; the sale is left untouched.
    pub fn record_payment(
        sale: &mut Sale,
        amount: Decimal,
        date: NaiveDate,
    ) -> Result<PaymentId, AllocationError> {
        if amount <= Decimal::ZERO {
            return Err(AllocationError::NonPositiveAmount);
        }

        let entry = PaymentEntry::received(sale.id, amount, date);
        let payment_id = entry.id;
        sale.payment_plan.push(entry);
        Self::sync_derived(sale);

        debug!(sale_id = %sale.id, %payment_id, %amount, "recorded payment");
        Ok(payment_id)
    }

    /// Undoes a settled payment.
    ///
    /// A real payment entry is removed from the plan; a schedule slot that
    /// was absorbed is reopened instead. Either way the outstanding amount
    /// is restored and the sale forced back to `Active` if anything remains.
    ///
    /// # Errors
    ///
    /// `PaymentNotFound` if no entry has the id; `NotPaid` if the entry is
    /// still outstanding.
    pub fn undo_payment(sale: &mut Sale, payment_id: PaymentId) -> Result<(), AllocationError> {
        let index = sale
            .payment_plan
            .iter()
            .position(|e| e.id == payment_id)
            .ok_or(AllocationError::PaymentNotFound(payment_id))?;
        if !sale.payment_plan[index].is_paid {
            return Err(AllocationError::NotPaid(payment_id));
        }

        if sale.payment_plan[index].is_real_payment {
            sale.payment_plan.remove(index);
        } else {
            sale.payment_plan[index].is_paid = false;
        }
        Self::sync_derived(sale);

        debug!(sale_id = %sale.id, %payment_id, "undid payment");
        Ok(())
    }

    /// Moves an unpaid slot to a new due date, leaving amount and paid
    /// state untouched.
    ///
    /// # Errors
    ///
    /// `PaymentNotFound` if no entry has the id; `AlreadyPaid` if the entry
    /// is settled.
    pub fn reschedule_payment(
        sale: &mut Sale,
        payment_id: PaymentId,
        new_date: NaiveDate,
    ) -> Result<(), AllocationError> {
        let entry = sale
            .payment_plan
            .iter_mut()
            .find(|e| e.id == payment_id)
            .ok_or(AllocationError::PaymentNotFound(payment_id))?;
        if entry.is_paid {
            return Err(AllocationError::AlreadyPaid(payment_id));
        }

        entry.due_date = new_date;
        Ok(())
    }

    /// Marks an unpaid schedule slot as settled through surplus absorption.
    ///
    /// The entry keeps `is_real_payment = false`: no new cash arrived, a
    /// previously received surplus is being consumed by this slot.
    ///
    /// # Errors
    ///
    /// `PaymentNotFound` if no entry has the id; `AlreadyPaid` if the entry
    /// is settled.
    pub fn settle_slot(sale: &mut Sale, payment_id: PaymentId) -> Result<(), AllocationError> {
        let entry = sale
            .payment_plan
            .iter_mut()
            .find(|e| e.id == payment_id)
            .ok_or(AllocationError::PaymentNotFound(payment_id))?;
        if entry.is_paid {
            return Err(AllocationError::AlreadyPaid(payment_id));
        }

        entry.is_paid = true;
        Self::sync_derived(sale);
        Ok(())
    }

    /// Reconstructs the unpaid schedule with surplus carried forward.
    ///
    /// Walks unpaid slots in due-date order; each slot consumes surplus up
    /// to its scheduled amount. Pure read: storage is not mutated.
    #[must_use]
    pub fn project_schedule(sale: &Sale) -> Vec<ProjectedSlot> {
        let mut surplus =
            (sale.total_real_money() - sale.total_allocated()).max(Decimal::ZERO);

        sale.unpaid_entries()
            .into_iter()
            .map(|entry| {
                let covered = entry.amount.min(surplus);
                surplus -= covered;
                ProjectedSlot {
                    payment_id: entry.id,
                    due_date: entry.due_date,
                    scheduled_amount: entry.amount,
                    covered,
                    amount_to_pay: entry.amount - covered,
                }
            })
            .collect()
    }

    /// The still-owed schedule view: projected slots that are not covered.
    #[must_use]
    pub fn outstanding_slots(sale: &Sale) -> Vec<ProjectedSlot> {
        Self::project_schedule(sale)
            .into_iter()
            .filter(|slot| !slot.is_covered())
            .collect()
    }

    /// Recommended amount for the operator's next collection: the first
    /// uncovered slot's residual, or the full outstanding amount when no
    /// slot remains.
    #[must_use]
    pub fn suggested_next_payment(sale: &Sale) -> Decimal {
        Self::outstanding_slots(sale)
            .first()
            .map_or(sale.remaining_amount, |slot| slot.amount_to_pay)
    }

    /// Sum of unpaid entries strictly past due, for collections.
    ///
    /// Surplus is deliberately NOT applied here: the forward display view
    /// reconciles surplus, but collections work from raw past-due amounts.
    #[must_use]
    pub fn overdue_amount(sale: &Sale, today: NaiveDate) -> Decimal {
        sale.payment_plan
            .iter()
            .filter(|e| !e.is_paid && e.due_date < today)
            .map(|e| e.amount)
            .sum()
    }

    /// Rederives `remaining_amount` and `status` from the plan.
    fn sync_derived(sale: &mut Sale) {
        sale.remaining_amount = sale.recompute_remaining();
        sale.status = if sale.remaining_amount.is_zero() {
            SaleStatus::Completed
        } else {
            SaleStatus::Active
        };
    }
}
