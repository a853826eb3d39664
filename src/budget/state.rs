use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Immutable snapshot of every income and spending value on the form.
///
/// Equality is element-wise float equality, so a snapshot holding `NaN`
/// never equals anything, itself included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetState {
    income_values: Vec<f64>,
    spending_values: Vec<f64>,
}

impl BudgetState {
    pub fn new(income_values: &[f64], spending_values: &[f64]) -> Self {
        Self {
            income_values: income_values.to_vec(),
            spending_values: spending_values.to_vec(),
        }
    }

    pub fn income_values(&self) -> Vec<f64> {
        self.income_values.clone()
    }

    pub fn spending_values(&self) -> Vec<f64> {
        self.spending_values.clone()
    }
}

impl Hash for BudgetState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_values(&self.income_values, state);
        hash_values(&self.spending_values, state);
    }
}

fn hash_values<H: Hasher>(values: &[f64], state: &mut H) {
    values.len().hash(state);
    for value in values {
        // -0.0 == 0.0, so both must hash alike.
        (value + 0.0).to_bits().hash(state);
    }
}
