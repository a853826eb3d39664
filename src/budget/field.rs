use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::{BudgetError, Result};

/// Which half of the form a field belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Section {
    Income,
    Spending,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Income => f.write_str("Income"),
            Section::Spending => f.write_str("Spending"),
        }
    }
}

/// Position of a single line item on the form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct FieldId {
    pub section: Section,
    pub index: usize,
}

impl FieldId {
    pub fn new(section: Section, index: usize) -> Self {
        Self { section, index }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.section, self.index)
    }
}

/// Backing text of an editable line item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldText {
    id: FieldId,
    text: String,
}

impl FieldText {
    pub fn new(id: FieldId) -> Self {
        Self {
            id,
            text: String::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Writes a number back as field text so it parses to the same value.
    pub fn set_value(&mut self, value: f64) {
        self.text = format_field_value(value);
    }
}

/// Reads a field as a number, repairing its text on the way.
///
/// Blank text becomes `"0"` and reads as zero. Text that is not a number is
/// cleared and reported as [`BudgetError::InvalidNumber`]; callers that keep
/// computing use `NaN` for that field.
pub fn parse_field_value(field: &mut FieldText) -> Result<f64> {
    let trimmed = field.text.trim();
    if trimmed.is_empty() {
        field.text = "0".to_string();
        return Ok(0.0);
    }
    match trimmed.parse::<f64>() {
        Ok(value) => Ok(value),
        Err(_) => {
            let input = std::mem::take(&mut field.text);
            warn!(field = %field.id, input = %input, "rejected non-numeric field input");
            Err(BudgetError::InvalidNumber {
                field: field.id,
                input,
            })
        }
    }
}

/// Shortest text that parses back to `value`, always with a fractional part
/// for finite whole numbers (`1.0`, `2.5`, `NaN`).
pub fn format_field_value(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else {
        format!("{:?}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn income_field(text: &str) -> FieldText {
        let mut field = FieldText::new(FieldId::new(Section::Income, 0));
        field.set_text(text);
        field
    }

    #[test]
    fn valid_number_leaves_text_untouched() {
        let mut field = income_field("42.5");
        assert_eq!(parse_field_value(&mut field).unwrap(), 42.5);
        assert_eq!(field.text(), "42.5");
    }

    #[test]
    fn surrounding_whitespace_is_accepted() {
        let mut field = income_field("  7 ");
        assert_eq!(parse_field_value(&mut field).unwrap(), 7.0);
        assert_eq!(field.text(), "  7 ");
    }

    #[test]
    fn blank_input_reads_as_zero_and_rewrites_text() {
        for blank in ["", "   ", "\t"] {
            let mut field = income_field(blank);
            assert_eq!(parse_field_value(&mut field).unwrap(), 0.0);
            assert_eq!(field.text(), "0");
        }
    }

    #[test]
    fn invalid_input_clears_text_and_reports_field() {
        let mut field = FieldText::new(FieldId::new(Section::Spending, 2));
        field.set_text("abc");
        let err = parse_field_value(&mut field).unwrap_err();
        assert_eq!(
            err,
            BudgetError::InvalidNumber {
                field: FieldId::new(Section::Spending, 2),
                input: "abc".into(),
            }
        );
        assert_eq!(field.text(), "");
    }

    #[test]
    fn cleared_field_reads_as_zero_next_time() {
        let mut field = income_field("12,5");
        assert!(parse_field_value(&mut field).is_err());
        assert_eq!(parse_field_value(&mut field).unwrap(), 0.0);
        assert_eq!(field.text(), "0");
    }

    #[test]
    fn negative_and_exponent_forms_parse() {
        assert_eq!(parse_field_value(&mut income_field("-3.25")).unwrap(), -3.25);
        assert_eq!(parse_field_value(&mut income_field("1e3")).unwrap(), 1000.0);
    }

    #[test]
    fn restored_text_keeps_a_fractional_part() {
        assert_eq!(format_field_value(1.0), "1.0");
        assert_eq!(format_field_value(2.5), "2.5");
        assert_eq!(format_field_value(-0.1), "-0.1");
        assert_eq!(format_field_value(f64::NAN), "NaN");
        assert_eq!(format_field_value(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn restored_text_parses_back_to_the_same_value() {
        for value in [0.1, 1.0 / 3.0, 123456.789, -42.0, f64::INFINITY] {
            let mut field = income_field("");
            field.set_value(value);
            assert_eq!(parse_field_value(&mut field).unwrap(), value);
        }
    }

    #[test]
    fn field_id_display() {
        assert_eq!(FieldId::new(Section::Income, 1).to_string(), "Income[1]");
    }
}
