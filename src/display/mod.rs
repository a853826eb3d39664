//! Presentation helpers for the read-only fields of the form.

use std::fmt::Write as _;
use std::str::FromStr;

use colored::Colorize;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::budget::{Calculation, TimePeriod};

/// Styling hint for the overall field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum CashFlowStatus {
    #[default]
    Neutral,
    Deficit,
}

impl CashFlowStatus {
    /// Negative flows are a deficit; zero and `NaN` are neutral.
    pub fn of(cash_flow: f64) -> Self {
        if cash_flow < 0.0 {
            CashFlowStatus::Deficit
        } else {
            CashFlowStatus::Neutral
        }
    }
}

/// Formats an amount with two decimals, rounding the value's shortest decimal
/// form half away from zero (`2.675` shows as `2.68`).
pub fn format_amount(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    match Decimal::from_str(&value.to_string()) {
        Ok(decimal) => format!(
            "{:.2}",
            decimal.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        ),
        // Beyond Decimal's range there are no fractional digits left to round.
        Err(_) => format!("{:.2}", value),
    }
}

/// The three read-only fields of the form, as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayedTotals {
    pub total_income: String,
    pub total_spending: String,
    pub overall: String,
    pub overall_period: TimePeriod,
    pub status: CashFlowStatus,
}

impl Default for DisplayedTotals {
    fn default() -> Self {
        Self {
            total_income: "0".into(),
            total_spending: "0".into(),
            overall: "0".into(),
            overall_period: TimePeriod::default(),
            status: CashFlowStatus::Neutral,
        }
    }
}

impl From<&Calculation> for DisplayedTotals {
    fn from(calc: &Calculation) -> Self {
        Self {
            total_income: format_amount(calc.total_income),
            total_spending: format_amount(calc.total_spending),
            overall: format_amount(calc.cash_flow),
            overall_period: calc.overall_period,
            status: calc.status(),
        }
    }
}

impl DisplayedTotals {
    /// Renders the totals as a small text block; a deficit is painted red
    /// when `color` is set.
    pub fn render(&self, color: bool) -> String {
        let overall = if color && self.status == CashFlowStatus::Deficit {
            self.overall.red().bold().to_string()
        } else {
            self.overall.clone()
        };
        let mut out = String::new();
        let _ = writeln!(out, "Total Income:   {:>12}", self.total_income);
        let _ = writeln!(out, "Total Spending: {:>12}", self.total_spending);
        let _ = write!(out, "Overall ({}): {:>12}", self.overall_period, overall);
        out
    }
}
