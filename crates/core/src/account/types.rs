//! Account, expense, and investor data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use qist_shared::types::{AccountId, ExpenseId, InvestorId, UserId};

/// Account classification, with financing references where applicable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum AccountKind {
    /// The merchant's own primary account.
    Main,
    /// Dedicated to a single financing investor.
    Investor {
        /// The investor whose capital backs this account.
        owner: InvestorId,
    },
    /// A self-funded side account.
    Custom,
    /// A partnership account with multiple capital contributors.
    Shared {
        /// The investors holding stakes in this account.
        partners: Vec<InvestorId>,
    },
}

/// A cash-holding bucket that finances sales and pays expenses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Account ID.
    pub id: AccountId,
    /// Owning user (merchant).
    pub user_id: UserId,
    /// Display name.
    pub name: String,
    /// Account classification.
    pub kind: AccountKind,
}

/// What an investor payout draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayoutKind {
    /// Reduces contributed principal.
    Investment,
    /// Drawn from earned profit.
    Profit,
}

/// Expense category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    /// Merchandise purchased for resale.
    Inventory,
    /// Operating cost (rent, wages, utilities).
    Operating,
    /// Money paid out to an investor or partner.
    InvestorPayout,
    /// Anything else.
    Other,
}

/// A ledger-reducing transaction against an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Expense ID.
    pub id: ExpenseId,
    /// Account the money leaves.
    pub account_id: AccountId,
    /// Amount withdrawn.
    pub amount: Decimal,
    /// Category.
    pub category: ExpenseCategory,
    /// For investor payouts: whether this reduces principal or profit.
    /// `None` for ordinary expenses.
    pub payout: Option<PayoutKind>,
    /// Recipient investor, for payouts on shared accounts.
    pub investor_id: Option<InvestorId>,
    /// Date of the disbursement.
    pub date: NaiveDate,
}

/// A financing partner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Investor {
    /// Investor ID.
    pub id: InvestorId,
    /// Display name.
    pub name: String,
    /// Net capital contributed.
    pub initial_amount: Decimal,
    /// Share of profit margin on sales financed through their account,
    /// as a percentage (0-100).
    pub profit_percentage: Decimal,
}
