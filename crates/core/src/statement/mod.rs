//! Printable payment tables for receipts and contract documents.

pub mod table;

pub use table::{payment_table, StatementRow};
