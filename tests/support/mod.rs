#![allow(dead_code)]

use budget_base::{BudgetEngine, FieldId, Section, TimePeriod};

/// Fills the reference three-by-three form with the given amounts, typed the
/// way a user would type them.
pub fn form_with(income: &[f64], spending: &[f64]) -> BudgetEngine {
    let mut engine = BudgetEngine::default();
    for (index, value) in income.iter().enumerate() {
        engine
            .set_income_text(index, value.to_string())
            .expect("income field exists");
    }
    for (index, value) in spending.iter().enumerate() {
        engine
            .set_spending_text(index, value.to_string())
            .expect("spending field exists");
    }
    engine
}

pub fn form_with_periods(
    income: &[f64],
    spending: &[f64],
    income_period: TimePeriod,
    spending_period: TimePeriod,
    overall_period: TimePeriod,
) -> BudgetEngine {
    let mut engine = form_with(income, spending);
    engine.set_income_period(income_period);
    engine.set_spending_period(spending_period);
    engine.set_overall_period(overall_period);
    engine
}

pub fn income_texts(engine: &BudgetEngine) -> Vec<String> {
    texts(engine, Section::Income)
}

pub fn spending_texts(engine: &BudgetEngine) -> Vec<String> {
    texts(engine, Section::Spending)
}

fn texts(engine: &BudgetEngine, section: Section) -> Vec<String> {
    (0..engine.field_count(section))
        .map(|index| {
            engine
                .text(FieldId::new(section, index))
                .expect("field exists")
                .to_string()
        })
        .collect()
}
