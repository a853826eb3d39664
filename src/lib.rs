#![doc(test(attr(deny(warnings))))]

//! Budget Base is the computational core of a single-window budget form: it
//! totals income and spending line items, normalizes both to a common time
//! granularity, reports net cash flow, and keeps an undo history of field
//! edits. Widgets live in the caller; this crate only sees field text.

pub mod budget;
pub mod config;
pub mod display;
pub mod errors;
pub mod utils;

pub use budget::{
    cash_flow, parse_field_value, BudgetEngine, BudgetState, Calculation, Evaluation, FieldId,
    FieldText, Section, TimePeriod,
};
pub use config::{BudgetConfig, ConfigManager};
pub use display::{format_amount, CashFlowStatus, DisplayedTotals};
pub use errors::{BudgetError, Result};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Budget Base tracing initialized.");
    });
}
