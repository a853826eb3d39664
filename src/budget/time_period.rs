use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::BudgetError;

/// Granularity a monetary amount is expressed in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimePeriod {
    #[default]
    Weekly,
    Monthly,
    Yearly,
}

impl TimePeriod {
    /// Every period, in the order the form offers them.
    pub const ALL: [TimePeriod; 3] = [TimePeriod::Weekly, TimePeriod::Monthly, TimePeriod::Yearly];

    /// Number of weeks in one period.
    pub fn multiplier(self) -> f64 {
        match self {
            TimePeriod::Weekly => 1.0,
            TimePeriod::Monthly => 4.3333333,
            TimePeriod::Yearly => 52.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimePeriod::Weekly => "Weekly",
            TimePeriod::Monthly => "Monthly",
            TimePeriod::Yearly => "Yearly",
        }
    }

    /// Converts an amount expressed in this period to a per-week rate.
    pub fn to_weekly(self, amount: f64) -> f64 {
        amount / self.multiplier()
    }

    /// Converts a per-week rate to an amount expressed in this period.
    pub fn from_weekly(self, weekly: f64) -> f64 {
        weekly * self.multiplier()
    }
}

impl fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TimePeriod {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        TimePeriod::ALL
            .into_iter()
            .find(|period| period.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| BudgetError::UnknownPeriod(trimmed.to_string()))
    }
}
