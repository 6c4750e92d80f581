//! The ledger entry sum type and the lowering from raw records.
//!
//! Sales and expenses are lowered into explicitly tagged entries before any
//! aggregation, so partner deposits, payouts, and ordinary cash movements
//! are resolved by pattern matching instead of sentinel field values.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use qist_shared::types::{ExpenseId, InvestorId, PaymentId, SaleId};

use crate::account::{Account, AccountKind, Expense, PayoutKind};
use crate::sale::Sale;

/// A single typed movement on an account's ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum LedgerEntry {
    /// A future obligation on a sale's plan. Carries no cash.
    ScheduledInstallment {
        /// Owning sale.
        sale_id: SaleId,
        /// Underlying plan entry.
        payment_id: PaymentId,
        /// Amount due.
        amount: Decimal,
        /// Due date.
        due_date: NaiveDate,
    },
    /// Cash received on a sale: a down payment or a settled plan entry.
    RecordedPayment {
        /// Owning sale.
        sale_id: SaleId,
        /// Underlying plan entry; `None` for the down payment.
        payment_id: Option<PaymentId>,
        /// Amount received.
        amount: Decimal,
        /// Receipt date.
        date: NaiveDate,
    },
    /// A partner's capital contribution to a shared account.
    CapitalDeposit {
        /// Contributing partner.
        investor_id: InvestorId,
        /// Amount contributed.
        amount: Decimal,
        /// Contribution date.
        date: NaiveDate,
    },
    /// A payout reducing an investor's contributed principal.
    CapitalWithdrawal {
        /// Receiving investor, when recorded.
        investor_id: Option<InvestorId>,
        /// Amount withdrawn.
        amount: Decimal,
        /// Withdrawal date.
        date: NaiveDate,
    },
    /// A payout drawn from earned profit.
    ProfitWithdrawal {
        /// Receiving investor, when recorded.
        investor_id: Option<InvestorId>,
        /// Amount withdrawn.
        amount: Decimal,
        /// Withdrawal date.
        date: NaiveDate,
    },
    /// An ordinary operating disbursement.
    Disbursement {
        /// Underlying expense.
        expense_id: ExpenseId,
        /// Amount spent.
        amount: Decimal,
        /// Disbursement date.
        date: NaiveDate,
    },
}

impl LedgerEntry {
    /// Cash effect of this entry on the account: positive for inflows,
    /// negative for outflows, zero for scheduled (future) amounts.
    #[must_use]
    pub fn cash_effect(&self) -> Decimal {
        match self {
            Self::ScheduledInstallment { .. } => Decimal::ZERO,
            Self::RecordedPayment { amount, .. } | Self::CapitalDeposit { amount, .. } => *amount,
            Self::CapitalWithdrawal { amount, .. }
            | Self::ProfitWithdrawal { amount, .. }
            | Self::Disbursement { amount, .. } => -*amount,
        }
    }
}

/// Lowers an account's sales and expenses into typed ledger entries.
///
/// On a shared account, a cash sale whose customer id carries a partner's
/// investor id is the historical deposit convention; it lowers to
/// [`LedgerEntry::CapitalDeposit`] rather than a payment.
#[must_use]
pub fn account_entries(
    account: &Account,
    sales: &[Sale],
    expenses: &[Expense],
) -> Vec<LedgerEntry> {
    let mut entries = Vec::new();

    for sale in sales.iter().filter(|s| s.account_id == account.id) {
        if let Some(partner) = deposit_partner(account, sale) {
            entries.push(LedgerEntry::CapitalDeposit {
                investor_id: partner,
                amount: sale.total_amount,
                date: sale.sale_date,
            });
            continue;
        }

        entries.extend(sale_entries(sale));
    }

    for expense in expenses.iter().filter(|e| e.account_id == account.id) {
        entries.push(match expense.payout {
            Some(PayoutKind::Investment) => LedgerEntry::CapitalWithdrawal {
                investor_id: expense.investor_id,
                amount: expense.amount,
                date: expense.date,
            },
            Some(PayoutKind::Profit) => LedgerEntry::ProfitWithdrawal {
                investor_id: expense.investor_id,
                amount: expense.amount,
                date: expense.date,
            },
            None => LedgerEntry::Disbursement {
                expense_id: expense.id,
                amount: expense.amount,
                date: expense.date,
            },
        });
    }

    entries
}

/// Lowers one sale's plan with the ordinary (non-deposit) convention.
///
/// Real payments are emitted in full; a slot settled through surplus
/// absorption is emitted only for the portion no recorded real payment
/// funds, so the same cash never appears as two entries.
#[must_use]
pub fn sale_entries(sale: &Sale) -> Vec<LedgerEntry> {
    let mut entries = Vec::new();

    if sale.down_payment > Decimal::ZERO {
        entries.push(LedgerEntry::RecordedPayment {
            sale_id: sale.id,
            payment_id: None,
            amount: sale.down_payment,
            date: sale.sale_date,
        });
    }
    for plan_entry in &sale.payment_plan {
        if !plan_entry.is_paid {
            entries.push(LedgerEntry::ScheduledInstallment {
                sale_id: sale.id,
                payment_id: plan_entry.id,
                amount: plan_entry.amount,
                due_date: plan_entry.due_date,
            });
        } else if plan_entry.is_real_payment {
            entries.push(LedgerEntry::RecordedPayment {
                sale_id: sale.id,
                payment_id: Some(plan_entry.id),
                amount: plan_entry.amount,
                date: plan_entry.due_date,
            });
        }
    }
    for (slot, residual) in sale.unfunded_paid_slots() {
        entries.push(LedgerEntry::RecordedPayment {
            sale_id: sale.id,
            payment_id: Some(slot.id),
            amount: residual,
            date: slot.due_date,
        });
    }

    entries
}

/// Resolves the historical deposit convention: a cash sale on a shared
/// account whose customer id equals a partner's investor id.
fn deposit_partner(account: &Account, sale: &Sale) -> Option<InvestorId> {
    let AccountKind::Shared { partners } = &account.kind else {
        return None;
    };
    if !sale.is_cash() {
        return None;
    }
    partners
        .iter()
        .copied()
        .find(|partner| partner.into_inner() == sale.customer_id.into_inner())
}
