use serde::{Deserialize, Serialize};

use crate::util::contains_any;
use crate::workbook::Sheet;

const DIMENSION_WORDS: &[&str] = &["length", "breadth", "height", "nos"];
const RATE_WORDS: &[&str] = &["rate", "amount", "cost"];
const CALCULATION_WORDS: &[&str] = &["qty", "quantity", "total"];
const DESCRIPTION_WORDS: &[&str] = &["particulars", "description", "item"];

/// What kind of content the top rows of a sheet advertise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentIndicators {
    pub has_dimensions: bool,
    pub has_rates: bool,
    pub has_calculations: bool,
    pub has_descriptions: bool,
}

/// Scans the first `scan_rows` rows for domain keywords. Total: a sheet
/// with no matching text simply yields all-false indicators.
pub fn probe_content(sheet: &Sheet, scan_rows: usize) -> ContentIndicators {
    let mut indicators = ContentIndicators::default();
    let limit = scan_rows.min(sheet.row_count());

    for row in 0..limit {
        let text = sheet.row_text_lower(row);
        if text.is_empty() {
            continue;
        }
        indicators.has_dimensions |= contains_any(&text, DIMENSION_WORDS);
        indicators.has_rates |= contains_any(&text, RATE_WORDS);
        indicators.has_calculations |= contains_any(&text, CALCULATION_WORDS);
        indicators.has_descriptions |= contains_any(&text, DESCRIPTION_WORDS);
    }
    indicators
}
