use std::result::Result as StdResult;

use thiserror::Error;

use crate::budget::{FieldId, Section};

/// Unified error type for the budget core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BudgetError {
    #[error("Please enter a valid number: {field} was `{input}`")]
    InvalidNumber { field: FieldId, input: String },
    #[error("{section} has {len} fields, index {index} is out of range")]
    FieldOutOfRange {
        section: Section,
        index: usize,
        len: usize,
    },
    #[error("{section} expects {expected} values, got {actual}")]
    LengthMismatch {
        section: Section,
        expected: usize,
        actual: usize,
    },
    #[error("Unknown time period: {0}")]
    UnknownPeriod(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = StdResult<T, BudgetError>;

impl BudgetError {
    /// True for the recoverable "not a number" condition the form reports in
    /// a message box.
    pub fn is_invalid_number(&self) -> bool {
        matches!(self, BudgetError::InvalidNumber { .. })
    }
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        BudgetError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        BudgetError::Config(err.to_string())
    }
}
