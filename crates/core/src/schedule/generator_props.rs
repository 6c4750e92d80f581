//! Property-based tests for schedule generation.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use qist_shared::types::SaleId;

use crate::sale::SaleKind;

use super::generator::{ScheduleGenerator, ScheduleInput};

/// Strategy for a positive total amount up to 1,000,000.00.
fn total_amount() -> impl Strategy<Value = Decimal> {
    (100i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for a first due date within a realistic range.
fn due_date() -> impl Strategy<Value = NaiveDate> {
    (0u32..3650u32).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .checked_add_days(chrono::Days::new(u64::from(offset)))
            .unwrap()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The down payment plus the generated installments reproduces the
    /// total amount, within one cent of rounding drift per installment.
    #[test]
    fn prop_schedule_sum_matches_total_within_drift(
        total in total_amount(),
        down_ratio in 0u32..100u32,
        installments in 1u32..48u32,
        first_due in due_date(),
    ) {
        let down = (total * Decimal::from(down_ratio) / Decimal::ONE_HUNDRED).round_dp(2);
        prop_assume!(down < total);

        let input = ScheduleInput {
            sale_id: SaleId::new(),
            kind: SaleKind::Installment,
            total_amount: total,
            down_payment: down,
            installments,
            first_due_date: first_due,
        };
        let plan = ScheduleGenerator::generate(&input).unwrap();

        let plan_sum: Decimal = plan.iter().map(|e| e.amount).sum();
        let drift = (down + plan_sum - total).abs();
        let tolerance = Decimal::new(i64::from(installments), 2);
        prop_assert!(
            drift <= tolerance,
            "drift {drift} exceeds {tolerance} for total {total}, down {down}, n {installments}"
        );
    }

    /// Installments are equal and due dates strictly increase month over month.
    #[test]
    fn prop_equal_installments_increasing_dates(
        total in total_amount(),
        installments in 1u32..48u32,
        first_due in due_date(),
    ) {
        let input = ScheduleInput {
            sale_id: SaleId::new(),
            kind: SaleKind::Installment,
            total_amount: total,
            down_payment: Decimal::ZERO,
            installments,
            first_due_date: first_due,
        };
        let plan = ScheduleGenerator::generate(&input).unwrap();

        prop_assert_eq!(plan.len(), installments as usize);
        for window in plan.windows(2) {
            prop_assert_eq!(window[0].amount, window[1].amount);
            prop_assert!(window[0].due_date < window[1].due_date);
        }
    }

    /// Cash sales never produce schedule entries, whatever the term.
    #[test]
    fn prop_cash_sales_have_empty_plan(
        total in total_amount(),
        installments in 0u32..48u32,
        first_due in due_date(),
    ) {
        let input = ScheduleInput {
            sale_id: SaleId::new(),
            kind: SaleKind::Cash,
            total_amount: total,
            down_payment: total,
            installments,
            first_due_date: first_due,
        };
        let plan = ScheduleGenerator::generate(&input).unwrap();
        prop_assert!(plan.is_empty());
    }
}
