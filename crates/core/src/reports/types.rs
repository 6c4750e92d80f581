//! Report data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use qist_shared::types::InvestorId;

use crate::profit::DateRange;

/// Scope of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportFilter {
    /// Restrict to accounts financed by this investor; `None` for all.
    pub investor_id: Option<InvestorId>,
    /// Reporting period, bounds inclusive.
    pub range: DateRange,
}

/// Profit report over a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Customer money received within the period (down payments dated in
    /// the period plus paid installments dated in the period).
    pub customer_payments_in_period: Decimal,
    /// Manager's share of profit if every active schedule is collected.
    /// Not time-bounded.
    pub expected_manager_profit: Decimal,
    /// Investor's share of the expected profit.
    pub expected_investor_profit: Decimal,
    /// Manager's share of profit accrued within the period.
    pub realized_manager_profit: Decimal,
    /// Investor's share of the realized profit.
    pub realized_investor_profit: Decimal,
}
