//! Budget form model: periods, field parsing, snapshots, and the engine that
//! ties them together.

pub mod calculation;
pub mod engine;
pub mod evaluation;
pub mod field;
pub mod history;
pub mod state;
pub mod time_period;

pub use calculation::{cash_flow, Calculation};
pub use engine::BudgetEngine;
pub use evaluation::Evaluation;
pub use field::{format_field_value, parse_field_value, FieldId, FieldText, Section};
pub use history::UndoStack;
pub use state::BudgetState;
pub use time_period::TimePeriod;
