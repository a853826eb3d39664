use crate::errors::{BudgetError, Result};

/// Outcome of an operation that keeps going past bad input.
///
/// `value` is always produced (fields that failed to parse contribute `NaN`);
/// `errors` lists every field that was rejected along the way so the caller
/// can tell the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation<T> {
    pub value: T,
    pub errors: Vec<BudgetError>,
}

impl<T> Evaluation<T> {
    pub fn clean(value: T) -> Self {
        Self {
            value,
            errors: Vec::new(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Evaluation<U> {
        Evaluation {
            value: f(self.value),
            errors: self.errors,
        }
    }

    /// Strict view: the value when nothing was rejected, otherwise the first
    /// error.
    pub fn into_result(self) -> Result<T> {
        match self.errors.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(self.value),
        }
    }

    pub(crate) fn absorb<U>(&mut self, other: Evaluation<U>) -> U {
        self.errors.extend(other.errors);
        other.value
    }
}
