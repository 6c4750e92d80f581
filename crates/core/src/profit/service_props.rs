//! Property-based tests for profit splitting.

use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::account::Financing;

use super::service::ProfitSplitter;

/// Strategy for monetary amounts between 0.01 and 100,000.00.
fn amount() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for a profit percentage between 0 and 100.
fn percentage() -> impl Strategy<Value = Decimal> {
    (0i64..=10_000i64).prop_map(|basis_points| Decimal::new(basis_points, 2))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// For any sale priced above cost, the margin is in [0, 1).
    #[test]
    fn prop_margin_bound(total in amount(), buy in amount()) {
        let margin = ProfitSplitter::margin(total, buy);

        prop_assert!(margin >= Decimal::ZERO);
        prop_assert!(margin < Decimal::ONE);
        if buy < total {
            prop_assert!(margin > Decimal::ZERO);
        } else {
            prop_assert_eq!(margin, Decimal::ZERO);
        }
    }

    /// Investor share plus manager share reproduces the accrual exactly.
    #[test]
    fn prop_split_is_additive(accrual in amount(), percent in percentage()) {
        let share =
            ProfitSplitter::split(accrual, Financing::InvestorFunded { percent }).unwrap();

        prop_assert_eq!(share.manager + share.investor, accrual);
        prop_assert!(share.investor >= Decimal::ZERO);
        prop_assert!(share.manager >= Decimal::ZERO);
    }

    /// A self-funded split assigns everything to the manager.
    #[test]
    fn prop_self_funded_split_total(accrual in amount()) {
        let share = ProfitSplitter::split(accrual, Financing::SelfFunded).unwrap();
        prop_assert_eq!(share.manager, accrual);
        prop_assert_eq!(share.investor, Decimal::ZERO);
    }

    /// A 0% investor earns nothing; a 100% investor takes everything.
    #[test]
    fn prop_split_extremes(accrual in amount()) {
        let zero = ProfitSplitter::split(
            accrual,
            Financing::InvestorFunded { percent: Decimal::ZERO },
        )
        .unwrap();
        prop_assert_eq!(zero.investor, Decimal::ZERO);
        prop_assert_eq!(zero.manager, accrual);

        let full = ProfitSplitter::split(
            accrual,
            Financing::InvestorFunded { percent: Decimal::ONE_HUNDRED },
        )
        .unwrap();
        prop_assert_eq!(full.investor, accrual);
        prop_assert_eq!(full.manager, Decimal::ZERO);
    }
}
