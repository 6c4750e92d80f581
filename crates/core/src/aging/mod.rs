//! ACTIVE / OVERDUE / ARCHIVED classification.
//!
//! This is the single classification call site: dashboards, tab counts,
//! reminders, and detail totals all go through [`AgingClassifier`] so the
//! displayed figures cannot drift apart.

pub mod classifier;

pub use classifier::{AgingClassifier, SaleAging};
