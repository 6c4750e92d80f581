//! Reminder context for payment notifications.
//!
//! Builds the figures a reminder message needs; delivery (SMS, push,
//! WhatsApp) lives outside the engine.

pub mod context;

pub use context::ReminderContext;
