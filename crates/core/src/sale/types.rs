//! Sale and payment-plan data types.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use qist_shared::types::{AccountId, CustomerId, PaymentId, ProductId, SaleId, UserId};

/// How a sale is settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaleKind {
    /// Paid in full at sale time; the plan is empty.
    Cash,
    /// Financed over a monthly payment plan.
    Installment,
}

/// Lifecycle status of a sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaleStatus {
    /// Outstanding amount remains.
    Active,
    /// Fully collected. Reverts to `Active` if a payment is undone.
    Completed,
}

/// One entry of a sale's payment plan.
///
/// The same record type serves two roles: an unpaid entry is a scheduled
/// obligation; a paid entry is a ledger line. `is_real_payment`
/// distinguishes cash actually received from a schedule slot marked paid
/// through surplus absorption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentEntry {
    /// Entry ID.
    pub id: PaymentId,
    /// Owning sale.
    pub sale_id: SaleId,
    /// Obligation or received amount.
    pub amount: Decimal,
    /// Due date (unpaid) or receipt date (paid).
    pub due_date: NaiveDate,
    /// Whether this entry has been settled.
    pub is_paid: bool,
    /// True for cash actually received, false for schedule slots.
    pub is_real_payment: bool,
    /// When the customer was last reminded about this entry.
    pub notified_at: Option<DateTime<Utc>>,
}

impl PaymentEntry {
    /// Creates an unpaid scheduled installment.
    #[must_use]
    pub fn scheduled(sale_id: SaleId, amount: Decimal, due_date: NaiveDate) -> Self {
        Self {
            id: PaymentId::new(),
            sale_id,
            amount,
            due_date,
            is_paid: false,
            is_real_payment: false,
            notified_at: None,
        }
    }

    /// Creates a paid entry for cash received on `date`.
    #[must_use]
    pub fn received(sale_id: SaleId, amount: Decimal, date: NaiveDate) -> Self {
        Self {
            id: PaymentId::new(),
            sale_id,
            amount,
            due_date: date,
            is_paid: true,
            is_real_payment: true,
            notified_at: None,
        }
    }
}

/// A sale (installment contract).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sale {
    /// Sale ID.
    pub id: SaleId,
    /// Owning user (merchant).
    pub user_id: UserId,
    /// Financing account.
    pub account_id: AccountId,
    /// Customer who bought the item.
    pub customer_id: CustomerId,
    /// Optional catalog product reference.
    pub product_id: Option<ProductId>,
    /// Cash or installment settlement.
    pub kind: SaleKind,
    /// Price charged to the customer.
    pub total_amount: Decimal,
    /// Cost basis; zero when unknown.
    pub buy_price: Decimal,
    /// Amount collected up front.
    pub down_payment: Decimal,
    /// Number of installments in the original term.
    pub installments: u32,
    /// Markup percentage, informational only (already baked into
    /// `total_amount`).
    pub interest_rate: Decimal,
    /// Outstanding principal owed. Kept in sync with the unpaid plan
    /// entries; see [`Sale::recompute_remaining`].
    pub remaining_amount: Decimal,
    /// Lifecycle status.
    pub status: SaleStatus,
    /// Ordered payment plan (schedule + paid history).
    pub payment_plan: Vec<PaymentEntry>,
    /// Date the sale was made.
    pub sale_date: NaiveDate,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Sale {
    /// Returns true for a cash sale (no plan).
    #[must_use]
    pub fn is_cash(&self) -> bool {
        self.kind == SaleKind::Cash
    }

    /// Unpaid plan entries in due-date order.
    #[must_use]
    pub fn unpaid_entries(&self) -> Vec<&PaymentEntry> {
        let mut entries: Vec<&PaymentEntry> =
            self.payment_plan.iter().filter(|e| !e.is_paid).collect();
        entries.sort_by_key(|e| e.due_date);
        entries
    }

    /// Paid plan entries in date order.
    #[must_use]
    pub fn paid_entries(&self) -> Vec<&PaymentEntry> {
        let mut entries: Vec<&PaymentEntry> =
            self.payment_plan.iter().filter(|e| e.is_paid).collect();
        entries.sort_by_key(|e| e.due_date);
        entries
    }

    /// Derives the outstanding obligation from the payment plan.
    ///
    /// Unpaid scheduled amounts, less the surplus of real money received
    /// over amounts already absorbed into paid slots, floored at zero. The
    /// stored `remaining_amount` must always equal this value; callers that
    /// mutate the plan go through the allocation service, which keeps the
    /// two in lock-step.
    #[must_use]
    pub fn recompute_remaining(&self) -> Decimal {
        let unpaid: Decimal = self
            .payment_plan
            .iter()
            .filter(|e| !e.is_paid)
            .map(|e| e.amount)
            .sum();
        let surplus = (self.total_real_money() - self.total_allocated()).max(Decimal::ZERO);
        (unpaid - surplus).max(Decimal::ZERO)
    }

    /// Sum of cash actually received (real payments only).
    #[must_use]
    pub fn total_real_money(&self) -> Decimal {
        self.payment_plan
            .iter()
            .filter(|e| e.is_paid && e.is_real_payment)
            .map(|e| e.amount)
            .sum()
    }

    /// Sum of amounts already absorbed into paid schedule slots
    /// (paid entries that are not real payments).
    #[must_use]
    pub fn total_allocated(&self) -> Decimal {
        self.payment_plan
            .iter()
            .filter(|e| e.is_paid && !e.is_real_payment)
            .map(|e| e.amount)
            .sum()
    }

    /// Paid schedule slots in date order, each with the portion of its
    /// amount not funded by recorded real payments.
    ///
    /// A slot settled through surplus absorption consumes recorded cash
    /// first (the same netting as [`Sale::recompute_remaining`]); only the
    /// residual represents money with no other record, i.e. legacy history
    /// imported without per-payment entries. Ledger lowering and profit
    /// accrual count real payments in full and absorbed slots for this
    /// residual only, so the same cash is never represented twice.
    #[must_use]
    pub fn unfunded_paid_slots(&self) -> Vec<(&PaymentEntry, Decimal)> {
        let mut budget = self.total_real_money();
        let mut slots: Vec<&PaymentEntry> = self
            .payment_plan
            .iter()
            .filter(|e| e.is_paid && !e.is_real_payment)
            .collect();
        slots.sort_by_key(|e| e.due_date);

        slots
            .into_iter()
            .filter_map(|entry| {
                let covered = entry.amount.min(budget);
                budget -= covered;
                let residual = entry.amount - covered;
                (residual > Decimal::ZERO).then_some((entry, residual))
            })
            .collect()
    }
}
