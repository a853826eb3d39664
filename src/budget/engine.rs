use tracing::debug;

use super::{
    cash_flow, parse_field_value, BudgetState, Calculation, Evaluation, FieldId, FieldText,
    Section, TimePeriod, UndoStack,
};
use crate::config::BudgetConfig;
use crate::display::{format_amount, DisplayedTotals};
use crate::errors::{BudgetError, Result};

/// Non-UI state of the budget form.
///
/// The form forwards field text in, asks for recomputes, and renders what
/// comes back. Every method that reads fields may rewrite their text: blank
/// fields become `"0"` and rejected fields are cleared.
#[derive(Debug, Clone)]
pub struct BudgetEngine {
    income: Vec<FieldText>,
    spending: Vec<FieldText>,
    income_labels: Vec<String>,
    spending_labels: Vec<String>,
    income_period: TimePeriod,
    spending_period: TimePeriod,
    overall_period: TimePeriod,
    history: UndoStack,
    displayed: DisplayedTotals,
    last: Option<Calculation>,
}

impl Default for BudgetEngine {
    fn default() -> Self {
        Self::from_config(&BudgetConfig::default())
    }
}

impl BudgetEngine {
    /// Engine with unlabeled sections of the given sizes, all periods weekly.
    pub fn new(income_fields: usize, spending_fields: usize) -> Self {
        Self {
            income: blank_fields(Section::Income, income_fields),
            spending: blank_fields(Section::Spending, spending_fields),
            income_labels: Vec::new(),
            spending_labels: Vec::new(),
            income_period: TimePeriod::default(),
            spending_period: TimePeriod::default(),
            overall_period: TimePeriod::default(),
            history: UndoStack::new(),
            displayed: DisplayedTotals::default(),
            last: None,
        }
    }

    pub fn from_config(config: &BudgetConfig) -> Self {
        let mut engine = Self::new(config.income_labels.len(), config.spending_labels.len());
        engine.income_labels = config.income_labels.clone();
        engine.spending_labels = config.spending_labels.clone();
        engine.income_period = config.income_period;
        engine.spending_period = config.spending_period;
        engine.overall_period = config.overall_period;
        engine
    }

    pub fn field_count(&self, section: Section) -> usize {
        self.fields(section).len()
    }

    pub fn label(&self, id: FieldId) -> Option<&str> {
        let labels = match id.section {
            Section::Income => &self.income_labels,
            Section::Spending => &self.spending_labels,
        };
        labels.get(id.index).map(String::as_str)
    }

    pub fn text(&self, id: FieldId) -> Result<&str> {
        self.field(id).map(FieldText::text)
    }

    pub fn set_text(&mut self, id: FieldId, text: impl Into<String>) -> Result<()> {
        self.field_mut(id)?.set_text(text);
        Ok(())
    }

    pub fn set_income_text(&mut self, index: usize, text: impl Into<String>) -> Result<()> {
        self.set_text(FieldId::new(Section::Income, index), text)
    }

    pub fn set_spending_text(&mut self, index: usize, text: impl Into<String>) -> Result<()> {
        self.set_text(FieldId::new(Section::Spending, index), text)
    }

    /// Overwrites a whole section with numbers; `values` must match its size.
    pub fn set_values(&mut self, section: Section, values: &[f64]) -> Result<()> {
        let fields = self.fields_mut(section);
        if fields.len() != values.len() {
            return Err(BudgetError::LengthMismatch {
                section,
                expected: fields.len(),
                actual: values.len(),
            });
        }
        for (field, value) in fields.iter_mut().zip(values) {
            field.set_value(*value);
        }
        Ok(())
    }

    pub fn set_income_values(&mut self, values: &[f64]) -> Result<()> {
        self.set_values(Section::Income, values)
    }

    pub fn set_spending_values(&mut self, values: &[f64]) -> Result<()> {
        self.set_values(Section::Spending, values)
    }

    /// Parses every field of a section, in order.
    pub fn values(&mut self, section: Section) -> Evaluation<Vec<f64>> {
        let mut eval = Evaluation::clean(Vec::with_capacity(self.field_count(section)));
        for field in self.fields_mut(section) {
            match parse_field_value(field) {
                Ok(value) => eval.value.push(value),
                Err(err) => {
                    eval.value.push(f64::NAN);
                    eval.errors.push(err);
                }
            }
        }
        eval
    }

    pub fn income_values(&mut self) -> Evaluation<Vec<f64>> {
        self.values(Section::Income)
    }

    pub fn spending_values(&mut self) -> Evaluation<Vec<f64>> {
        self.values(Section::Spending)
    }

    pub fn income_period(&self) -> TimePeriod {
        self.income_period
    }

    pub fn spending_period(&self) -> TimePeriod {
        self.spending_period
    }

    pub fn overall_period(&self) -> TimePeriod {
        self.overall_period
    }

    pub fn set_income_period(&mut self, period: TimePeriod) {
        self.income_period = period;
    }

    pub fn set_spending_period(&mut self, period: TimePeriod) {
        self.spending_period = period;
    }

    pub fn set_overall_period(&mut self, period: TimePeriod) {
        self.overall_period = period;
    }

    pub fn total_income(&mut self) -> Evaluation<f64> {
        let eval = self.total(Section::Income);
        self.displayed.total_income = format_amount(eval.value);
        eval
    }

    pub fn total_spending(&mut self) -> Evaluation<f64> {
        let eval = self.total(Section::Spending);
        self.displayed.total_spending = format_amount(eval.value);
        eval
    }

    /// Recomputes both totals and the cash flow, and refreshes the displayed
    /// fields.
    pub fn calculate_all(&mut self) -> Evaluation<Calculation> {
        let mut eval = Evaluation::clean(());
        let total_income = eval.absorb(self.total_income());
        let total_spending = eval.absorb(self.total_spending());
        let calc = Calculation {
            total_income,
            total_spending,
            cash_flow: cash_flow(
                total_income,
                total_spending,
                self.income_period,
                self.spending_period,
                self.overall_period,
            ),
            overall_period: self.overall_period,
        };
        self.displayed = calc.displayed();
        self.last = Some(calc);
        debug!(
            total_income,
            total_spending,
            cash_flow = calc.cash_flow,
            rejected = eval.errors.len(),
            "recalculated budget"
        );
        eval.map(|()| calc)
    }

    /// Snapshot of the live field values.
    pub fn current_state(&mut self) -> Evaluation<BudgetState> {
        let mut eval = Evaluation::clean(());
        let income = eval.absorb(self.income_values());
        let spending = eval.absorb(self.spending_values());
        eval.map(|()| BudgetState::new(&income, &spending))
    }

    /// Records the live values for undo. The value is `false` when the top of
    /// the history already holds the same snapshot.
    pub fn save_state(&mut self) -> Evaluation<bool> {
        let eval = self.current_state();
        let Evaluation { value: state, errors } = eval;
        let pushed = self.history.push_unique(state);
        debug!(pushed, depth = self.history.len(), "saved budget state");
        Evaluation {
            value: pushed,
            errors,
        }
    }

    /// Restores the most recent snapshot that differs from the live values
    /// and recalculates. `None` when there was nothing to undo.
    pub fn undo(&mut self) -> Evaluation<Option<Calculation>> {
        let mut eval = Evaluation::clean(None);
        if self.history.is_empty() {
            debug!("undo requested with empty history");
            return eval;
        }

        let current = eval.absorb(self.current_state());
        if self.history.peek() == Some(&current) {
            self.history.pop();
        }

        let Some(previous) = self.history.pop() else {
            debug!("undo discarded an unchanged snapshot, nothing left to restore");
            return eval;
        };
        self.restore(&previous);
        debug!(depth = self.history.len(), "restored budget state");
        let calc = eval.absorb(self.calculate_all());
        eval.value = Some(calc);
        eval
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Text currently shown in the read-only fields.
    pub fn displayed(&self) -> &DisplayedTotals {
        &self.displayed
    }

    pub fn last_calculation(&self) -> Option<Calculation> {
        self.last
    }

    fn total(&mut self, section: Section) -> Evaluation<f64> {
        // Folding from +0.0 keeps an empty section at "0.00" rather than "-0.00".
        self.values(section)
            .map(|values| values.into_iter().fold(0.0, |acc, value| acc + value))
    }

    fn restore(&mut self, state: &BudgetState) {
        for (field, value) in self.income.iter_mut().zip(state.income_values()) {
            field.set_value(value);
        }
        for (field, value) in self.spending.iter_mut().zip(state.spending_values()) {
            field.set_value(value);
        }
    }

    fn fields(&self, section: Section) -> &[FieldText] {
        match section {
            Section::Income => &self.income,
            Section::Spending => &self.spending,
        }
    }

    fn fields_mut(&mut self, section: Section) -> &mut [FieldText] {
        match section {
            Section::Income => &mut self.income,
            Section::Spending => &mut self.spending,
        }
    }

    fn field(&self, id: FieldId) -> Result<&FieldText> {
        let fields = self.fields(id.section);
        fields.get(id.index).ok_or(BudgetError::FieldOutOfRange {
            section: id.section,
            index: id.index,
            len: fields.len(),
        })
    }

    fn field_mut(&mut self, id: FieldId) -> Result<&mut FieldText> {
        let fields = self.fields_mut(id.section);
        let len = fields.len();
        fields.get_mut(id.index).ok_or(BudgetError::FieldOutOfRange {
            section: id.section,
            index: id.index,
            len,
        })
    }
}

fn blank_fields(section: Section, count: usize) -> Vec<FieldText> {
    (0..count)
        .map(|index| FieldText::new(FieldId::new(section, index)))
        .collect()
}
