//! Core financial engine for Qist.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. All domain types, allocation rules, and calculations live
//! here; I/O happens behind the `store` boundary traits.
//!
//! # Modules
//!
//! - `sale` - Sales and payment plans (the schedule/ledger record)
//! - `account` - Accounts, expenses, and financing investors
//! - `schedule` - Amortized payment-schedule generation
//! - `allocation` - Payment recording, undo, and surplus carry-forward
//! - `profit` - Margin accrual and manager/investor profit splits
//! - `ledger` - Balance, receivables, and partner equity aggregation
//! - `aging` - ACTIVE / OVERDUE / ARCHIVED classification
//! - `reports` - Period reports over sales and accounts
//! - `statement` - Printable payment tables
//! - `notify` - Template values for payment reminders
//! - `store` - Persistence boundary traits and the sale service

pub mod account;
pub mod aging;
pub mod allocation;
pub mod ledger;
pub mod notify;
pub mod profit;
pub mod reports;
pub mod sale;
pub mod schedule;
pub mod statement;
pub mod store;
