//! Amortized payment-schedule generation.

pub mod error;
pub mod generator;

#[cfg(test)]
mod generator_props;

pub use error::ScheduleError;
pub use generator::{ScheduleGenerator, ScheduleInput};
