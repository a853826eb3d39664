use serde::{Deserialize, Serialize};

use super::TimePeriod;
use crate::display::{CashFlowStatus, DisplayedTotals};

/// Net cash flow of two totals, each given in its own period, expressed in
/// `overall_period`.
///
/// Both totals are first brought to a per-week rate.
pub fn cash_flow(
    income: f64,
    spending: f64,
    income_period: TimePeriod,
    spending_period: TimePeriod,
    overall_period: TimePeriod,
) -> f64 {
    let weekly = income_period.to_weekly(income) - spending_period.to_weekly(spending);
    overall_period.from_weekly(weekly)
}

/// Result of one recompute of the form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    pub total_income: f64,
    pub total_spending: f64,
    pub cash_flow: f64,
    pub overall_period: TimePeriod,
}

impl Calculation {
    pub fn status(&self) -> CashFlowStatus {
        CashFlowStatus::of(self.cash_flow)
    }

    pub fn displayed(&self) -> DisplayedTotals {
        DisplayedTotals::from(self)
    }
}
