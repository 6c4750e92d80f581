//! Property-based tests for ledger aggregation.

use chrono::{NaiveDate, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use qist_shared::types::{AccountId, CustomerId, ExpenseId, SaleId, UserId};

use crate::account::{Account, AccountKind, Expense, ExpenseCategory};
use crate::sale::{Sale, SaleKind, SaleStatus};

use super::balance::LedgerAggregator;

fn main_account() -> Account {
    Account {
        id: AccountId::new(),
        user_id: UserId::new(),
        name: "main".into(),
        kind: AccountKind::Main,
    }
}

fn cash_sale(account_id: AccountId, amount: Decimal) -> Sale {
    Sale {
        id: SaleId::new(),
        user_id: UserId::new(),
        account_id,
        customer_id: CustomerId::new(),
        product_id: None,
        kind: SaleKind::Cash,
        total_amount: amount,
        buy_price: Decimal::ZERO,
        down_payment: amount,
        installments: 0,
        interest_rate: Decimal::ZERO,
        remaining_amount: Decimal::ZERO,
        status: SaleStatus::Completed,
        payment_plan: Vec::new(),
        sale_date: NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
        created_at: Utc::now(),
    }
}

fn plain_expense(account_id: AccountId, amount: Decimal) -> Expense {
    Expense {
        id: ExpenseId::new(),
        account_id,
        amount,
        category: ExpenseCategory::Operating,
        payout: None,
        investor_id: None,
        date: NaiveDate::from_ymd_opt(2026, 1, 20).unwrap(),
    }
}

/// Strategy for amounts between 0.01 and 10,000.00.
fn amount() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The balance fold is commutative: record order does not matter.
    #[test]
    fn prop_balance_fold_commutative(
        sale_amounts in prop::collection::vec(amount(), 0..8),
        expense_amounts in prop::collection::vec(amount(), 0..8),
    ) {
        let account = main_account();
        let mut sales: Vec<Sale> = sale_amounts
            .iter()
            .map(|a| cash_sale(account.id, *a))
            .collect();
        let mut expenses: Vec<Expense> = expense_amounts
            .iter()
            .map(|a| plain_expense(account.id, *a))
            .collect();

        let forward = LedgerAggregator::cash_balance(&account, &sales, &expenses);
        sales.reverse();
        expenses.reverse();
        let backward = LedgerAggregator::cash_balance(&account, &sales, &expenses);

        prop_assert_eq!(forward, backward);
    }

    /// The balance equals total inflows minus total outflows.
    #[test]
    fn prop_balance_equals_net_flow(
        sale_amounts in prop::collection::vec(amount(), 0..8),
        expense_amounts in prop::collection::vec(amount(), 0..8),
    ) {
        let account = main_account();
        let sales: Vec<Sale> = sale_amounts
            .iter()
            .map(|a| cash_sale(account.id, *a))
            .collect();
        let expenses: Vec<Expense> = expense_amounts
            .iter()
            .map(|a| plain_expense(account.id, *a))
            .collect();

        let inflow: Decimal = sale_amounts.iter().copied().sum();
        let outflow: Decimal = expense_amounts.iter().copied().sum();
        prop_assert_eq!(
            LedgerAggregator::cash_balance(&account, &sales, &expenses),
            inflow - outflow
        );
    }

    /// Recomputation is idempotent: repeated folds over the same records
    /// always agree (no hidden running counters).
    #[test]
    fn prop_recomputation_idempotent(
        sale_amounts in prop::collection::vec(amount(), 0..8),
    ) {
        let account = main_account();
        let sales: Vec<Sale> = sale_amounts
            .iter()
            .map(|a| cash_sale(account.id, *a))
            .collect();

        let first = LedgerAggregator::summarize(&account, &sales, &[]);
        let second = LedgerAggregator::summarize(&account, &sales, &[]);
        prop_assert_eq!(first, second);
    }
}
