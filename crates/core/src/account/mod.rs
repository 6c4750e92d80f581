//! Accounts, expenses, and financing investors.

pub mod financing;
pub mod types;

pub use financing::Financing;
pub use types::{Account, AccountKind, Expense, ExpenseCategory, Investor, PayoutKind};
