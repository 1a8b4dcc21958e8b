//! Total numeric coercion for spreadsheet cell values.
//!
//! Legacy estimate workbooks mix numbers, formatted strings ("₹1,234.50"),
//! blanks and stray text in numeric columns. Coercion never fails: anything
//! that cannot be salvaged becomes the caller-supplied default.

use crate::workbook::CellValue;

/// Coerces a cell value to `f64`, returning `default` when the value has no
/// usable numeric content. Non-finite results are treated as unusable.
pub fn coerce_float(value: &CellValue, default: f64) -> f64 {
    match value {
        CellValue::Number(n) if n.is_finite() => *n,
        CellValue::Number(_) => default,
        CellValue::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        CellValue::Text(s) => parse_numeric_text(s).unwrap_or(default),
        CellValue::Formula(_) | CellValue::Empty => default,
    }
}

/// Parses text as a number, salvaging currency symbols and digit grouping
/// by stripping everything except digits, `.` and `-` before a retry.
fn parse_numeric_text(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(n) = trimmed.parse::<f64>() {
        if n.is_finite() {
            return Some(n);
        }
        return None;
    }
    let salvaged: String = trimmed
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    if salvaged.is_empty() {
        return None;
    }
    salvaged.parse::<f64>().ok().filter(|n| n.is_finite())
}
