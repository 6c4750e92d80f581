//! Payment-schedule generation.

use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;

use crate::sale::{PaymentEntry, SaleKind};
use qist_shared::config::ScheduleConfig;
use qist_shared::types::SaleId;

use super::error::ScheduleError;

/// Input for generating a payment schedule.
#[derive(Debug, Clone)]
pub struct ScheduleInput {
    /// Sale the entries will belong to.
    pub sale_id: SaleId,
    /// Cash or installment settlement.
    pub kind: SaleKind,
    /// Price charged to the customer.
    pub total_amount: Decimal,
    /// Amount collected up front. For cash sales this is the full total.
    pub down_payment: Decimal,
    /// Number of monthly installments.
    pub installments: u32,
    /// First due date, anchored to the caller-chosen day of month.
    pub first_due_date: NaiveDate,
}

/// Stateless schedule generator.
pub struct ScheduleGenerator;

impl ScheduleGenerator {
    /// Default first due date: the sale date advanced by the configured
    /// number of months, with end-of-month days clamped.
    #[must_use]
    pub fn default_first_due(sale_date: NaiveDate, config: &ScheduleConfig) -> NaiveDate {
        sale_date
            .checked_add_months(Months::new(config.first_due_offset_months))
            .unwrap_or(sale_date)
    }

    /// Generates the payment plan for a new sale.
    ///
    /// The financed principal is `total_amount - down_payment`, divided into
    /// equal monthly installments each independently rounded to 2 decimal
    /// places. The sum of rounded installments may drift from the principal
    /// by a few cents; that slack is accepted and not redistributed.
    ///
    /// Cash sales, a zero installment count, and a fully-paid-down sale all
    /// produce an empty plan: the entire amount is captured up front.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError` if the total is non-positive, the down
    /// payment is negative, or the down payment exceeds the total.
    pub fn generate(input: &ScheduleInput) -> Result<Vec<PaymentEntry>, ScheduleError> {
        if input.total_amount <= Decimal::ZERO {
            return Err(ScheduleError::NonPositiveTotal);
        }
        if input.down_payment < Decimal::ZERO {
            return Err(ScheduleError::NegativeDownPayment);
        }
        if input.down_payment > input.total_amount {
            return Err(ScheduleError::DownPaymentExceedsTotal);
        }

        let principal = input.total_amount - input.down_payment;
        if input.kind == SaleKind::Cash || input.installments == 0 || principal.is_zero() {
            return Ok(Vec::new());
        }

        let per_installment = (principal / Decimal::from(input.installments)).round_dp(2);

        let entries = (0..input.installments)
            .map(|index| {
                // Advance from the anchor date each time so a day-of-month
                // clamp in a short month does not drift later months.
                let due_date = input
                    .first_due_date
                    .checked_add_months(Months::new(index))
                    .unwrap_or(input.first_due_date);
                PaymentEntry::scheduled(input.sale_id, per_installment, due_date)
            })
            .collect();

        Ok(entries)
    }
}
