//! Profit data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::ProfitError;

/// Profit recognized from a single money movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accrual {
    /// Date of the money movement (sale date for the down payment,
    /// entry date for installments).
    pub date: NaiveDate,
    /// Profit portion: `movement amount x margin`, rounded to 2 dp.
    pub amount: Decimal,
}

/// A two-party profit split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProfitShare {
    /// The merchant's share.
    pub manager: Decimal,
    /// The financing investor's share (zero when self-funded).
    pub investor: Decimal,
}

impl ProfitShare {
    /// Total of both shares.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.manager + self.investor
    }
}

impl std::ops::Add for ProfitShare {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            manager: self.manager + other.manager,
            investor: self.investor + other.investor,
        }
    }
}

impl std::ops::AddAssign for ProfitShare {
    fn add_assign(&mut self, other: Self) {
        self.manager += other.manager;
        self.investor += other.investor;
    }
}

/// An inclusive date interval (end-of-day inclusive on the end date).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// First day of the interval.
    pub start: NaiveDate,
    /// Last day of the interval, inclusive.
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range, rejecting inverted bounds.
    ///
    /// # Errors
    ///
    /// Returns `ProfitError::InvertedRange` if `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ProfitError> {
        if start > end {
            return Err(ProfitError::InvertedRange);
        }
        Ok(Self { start, end })
    }

    /// Whether `date` falls within the interval, bounds inclusive.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}
