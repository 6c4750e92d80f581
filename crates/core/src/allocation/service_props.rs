//! Property-based tests for payment allocation.

use chrono::{NaiveDate, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use qist_shared::types::{AccountId, CustomerId, SaleId, UserId};

use crate::sale::{Sale, SaleKind, SaleStatus};
use crate::schedule::{ScheduleGenerator, ScheduleInput};

use super::service::PaymentAllocator;

fn installment_sale(total_cents: i64, installments: u32) -> Sale {
    let id = SaleId::new();
    let total = Decimal::new(total_cents, 2);
    let plan = ScheduleGenerator::generate(&ScheduleInput {
        sale_id: id,
        kind: SaleKind::Installment,
        total_amount: total,
        down_payment: Decimal::ZERO,
        installments,
        first_due_date: NaiveDate::from_ymd_opt(2026, 2, 15).unwrap(),
    })
    .unwrap();
    let remaining = plan.iter().map(|e| e.amount).sum();
    Sale {
        id,
        user_id: UserId::new(),
        account_id: AccountId::new(),
        customer_id: CustomerId::new(),
        product_id: None,
        kind: SaleKind::Installment,
        total_amount: total,
        buy_price: Decimal::ZERO,
        down_payment: Decimal::ZERO,
        installments,
        interest_rate: Decimal::ZERO,
        remaining_amount: remaining,
        status: SaleStatus::Active,
        payment_plan: plan,
        sale_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
        created_at: Utc::now(),
    }
}

/// Strategy for a payment amount between 0.01 and 5,000.00.
fn payment_amount() -> impl Strategy<Value = Decimal> {
    (1i64..500_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Recording every payment and then undoing every payment returns the
    /// outstanding amount and status to their pre-sequence values.
    #[test]
    fn prop_record_then_undo_conserves_remaining(
        total_cents in 100_000i64..10_000_000i64,
        installments in 1u32..24u32,
        amounts in prop::collection::vec(payment_amount(), 1..10),
    ) {
        let mut sale = installment_sale(total_cents, installments);
        let before_remaining = sale.remaining_amount;
        let before_status = sale.status;

        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let mut recorded = Vec::new();
        for amount in &amounts {
            recorded.push(PaymentAllocator::record_payment(&mut sale, *amount, date).unwrap());
        }
        for payment_id in recorded {
            PaymentAllocator::undo_payment(&mut sale, payment_id).unwrap();
        }

        prop_assert_eq!(sale.remaining_amount, before_remaining);
        prop_assert_eq!(sale.status, before_status);
        prop_assert_eq!(sale.payment_plan.len(), installments as usize);
    }

    /// The stored remaining amount always matches the plan-derived value
    /// after any sequence of recorded payments.
    #[test]
    fn prop_remaining_tracks_plan_after_payments(
        total_cents in 100_000i64..10_000_000i64,
        installments in 1u32..24u32,
        amounts in prop::collection::vec(payment_amount(), 0..10),
    ) {
        let mut sale = installment_sale(total_cents, installments);
        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();

        for amount in &amounts {
            PaymentAllocator::record_payment(&mut sale, *amount, date).unwrap();
            prop_assert_eq!(sale.remaining_amount, sale.recompute_remaining());
            prop_assert!(sale.remaining_amount >= Decimal::ZERO);
        }
    }

    /// Surplus allocation conserves money: covered amounts never exceed the
    /// surplus, and residuals never exceed the scheduled amounts.
    #[test]
    fn prop_projection_conserves_surplus(
        total_cents in 100_000i64..10_000_000i64,
        installments in 1u32..24u32,
        paid in payment_amount(),
    ) {
        let mut sale = installment_sale(total_cents, installments);
        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        PaymentAllocator::record_payment(&mut sale, paid, date).unwrap();

        let slots = PaymentAllocator::project_schedule(&sale);
        let covered: Decimal = slots.iter().map(|s| s.covered).sum();
        let scheduled: Decimal = slots.iter().map(|s| s.scheduled_amount).sum();
        let residual: Decimal = slots.iter().map(|s| s.amount_to_pay).sum();

        prop_assert!(covered <= paid);
        prop_assert_eq!(covered + residual, scheduled);
        for slot in &slots {
            prop_assert!(slot.amount_to_pay >= Decimal::ZERO);
            prop_assert!(slot.covered >= Decimal::ZERO);
            prop_assert!(slot.amount_to_pay <= slot.scheduled_amount);
        }
    }

    /// Coverage is front-loaded: no slot is covered while an earlier slot
    /// still owes anything.
    #[test]
    fn prop_surplus_covers_slots_in_date_order(
        total_cents in 100_000i64..10_000_000i64,
        installments in 2u32..24u32,
        paid in payment_amount(),
    ) {
        let mut sale = installment_sale(total_cents, installments);
        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        PaymentAllocator::record_payment(&mut sale, paid, date).unwrap();

        let slots = PaymentAllocator::project_schedule(&sale);
        for window in slots.windows(2) {
            if window[1].covered > Decimal::ZERO {
                prop_assert_eq!(
                    window[0].amount_to_pay,
                    Decimal::ZERO,
                    "later slot covered while earlier slot still owed"
                );
            }
        }
    }
}
