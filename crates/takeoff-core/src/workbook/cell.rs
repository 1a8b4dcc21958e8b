use serde::{Deserialize, Serialize};

/// A single cell value.
///
/// Cell content is a tagged variant rather than a dynamically inspected
/// value: the "looks like a formula" probe is a variant check, never a
/// string-prefix test on untyped data. Formulas are carried as raw text
/// (without the leading `=`) and are never evaluated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CellValue {
    Number(f64),
    Text(String),
    Bool(bool),
    Formula(String),
    Empty,
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    pub fn is_formula(&self) -> bool {
        matches!(self, CellValue::Formula(_))
    }

    /// Display text used for header mapping and keyword probing. Whole
    /// numbers render without a fractional part so "Item No" columns read
    /// back as "1" rather than "1.0".
    pub fn display(&self) -> String {
        match self {
            CellValue::Number(n) => {
                if *n == n.floor() && n.is_finite() && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    n.to_string()
                }
            }
            CellValue::Text(s) => s.trim().to_string(),
            CellValue::Bool(b) => b.to_string(),
            CellValue::Formula(f) => format!("={f}"),
            CellValue::Empty => String::new(),
        }
    }
}
