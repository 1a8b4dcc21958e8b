//! Row normalization: header-row detection and conversion of raw rows into
//! typed measurement/abstract records.
//!
//! Row-level problems never fail the sheet: blank rows and total/subtotal
//! rows are skipped, unparsable numbers coerce to 0.0, and rows with a unit
//! but no description are counted and warned about.

use super::columns::{ColumnMap, Field};
use super::records::{AbstractRecord, MeasurementRecord};
use crate::util::coerce_float;
use crate::workbook::Sheet;

/// Keywords whose presence marks a header row. "quantity" and "rate" are
/// listed alongside "qty" so abstract-sheet headers are found too.
const HEADER_KEYWORDS: &[&str] = &[
    "particulars",
    "nos",
    "length",
    "qty",
    "description",
    "quantity",
    "rate",
];

/// Minimum distinct keywords for a row to qualify as a header.
const MIN_HEADER_KEYWORDS: usize = 2;

/// Locates the header row within the first `scan_rows` rows: the row with
/// the greatest count of domain keywords, requiring at least two. Returns
/// `None` when no row qualifies (callers fall back to a default index).
pub fn detect_header_row(sheet: &Sheet, scan_rows: usize) -> Option<usize> {
    let limit = scan_rows.min(sheet.row_count());
    let mut best: Option<(usize, usize)> = None;

    for row in 0..limit {
        let text = sheet.row_text_lower(row);
        if text.is_empty() {
            continue;
        }
        let hits = HEADER_KEYWORDS.iter().filter(|k| text.contains(*k)).count();
        if hits >= MIN_HEADER_KEYWORDS && best.map_or(true, |(_, h)| hits > h) {
            best = Some((row, hits));
        }
    }
    best.map(|(row, _)| row)
}

/// Raw header texts of one row, by position.
pub fn header_texts(sheet: &Sheet, row: usize) -> Vec<String> {
    (0..sheet.col_count())
        .map(|col| sheet.cell(row, col).display())
        .collect()
}

/// Outcome counters from normalizing one sheet's rows.
#[derive(Debug, Default)]
pub struct RowOutcome {
    pub skipped: usize,
    pub warnings: Vec<String>,
}

/// Treats an absent dimension (zero or negative) as a factor of one, so a
/// linear item measured only by length still yields its length as quantity.
fn dimension_or_unity(value: f64) -> f64 {
    if value > 0.0 {
        value
    } else {
        1.0
    }
}

fn is_rollup_row(description: &str) -> bool {
    // "subtotal" and "grand total" both contain "total".
    description.to_lowercase().contains("total")
}

pub fn parse_measurements(
    sheet: &Sheet,
    map: &ColumnMap,
    data_start: usize,
    outcome: &mut RowOutcome,
) -> Vec<MeasurementRecord> {
    let mut records = Vec::new();

    for row in data_start..sheet.row_count() {
        let text = |field| cell_text(sheet, map, row, field);
        let num = |field| cell_number(sheet, map, row, field);

        let description = text(Field::Description);
        let unit = text(Field::Unit);
        if !row_is_usable(sheet, row, &description, &unit, outcome) {
            continue;
        }

        let quantity = num(Field::Quantity);
        let length = num(Field::Length);
        let breadth = num(Field::Breadth);
        let height = num(Field::Height);

        // Precedence rule: a declared, non-zero total/qty column overrides
        // the dimensional product.
        let declared_total = num(Field::Total);
        let total = if declared_total > 0.0 {
            declared_total
        } else {
            quantity
                * dimension_or_unity(length)
                * dimension_or_unity(breadth)
                * dimension_or_unity(height)
        };

        let deduction = num(Field::Deduction);
        let net_total = (total - deduction).max(0.0);

        records.push(MeasurementRecord {
            id: records.len() + 1,
            item_no: text(Field::ItemNo),
            description,
            specification: text(Field::Specification),
            location: text(Field::Location),
            quantity,
            length,
            breadth,
            height,
            diameter: num(Field::Diameter),
            thickness: num(Field::Thickness),
            unit,
            total,
            deduction,
            net_total,
            remarks: text(Field::Remarks),
            ssr_code: text(Field::SsrCode),
        });
    }
    records
}

pub fn parse_abstracts(
    sheet: &Sheet,
    map: &ColumnMap,
    data_start: usize,
    outcome: &mut RowOutcome,
) -> Vec<AbstractRecord> {
    let mut records = Vec::new();

    for row in data_start..sheet.row_count() {
        let text = |field| cell_text(sheet, map, row, field);
        let num = |field| cell_number(sheet, map, row, field);

        let description = text(Field::Description);
        let unit = text(Field::Unit);
        if !row_is_usable(sheet, row, &description, &unit, outcome) {
            continue;
        }

        let quantity = num(Field::Quantity);
        let rate = num(Field::Rate);
        let mut amount = quantity * rate;
        if amount == 0.0 {
            // Rate column missing or zero; trust a declared amount if any.
            let declared = num(Field::Amount);
            if declared > 0.0 {
                amount = declared;
            }
        }

        records.push(AbstractRecord {
            id: records.len() + 1,
            ssr_code: text(Field::SsrCode),
            description,
            unit,
            quantity,
            rate,
            amount,
        });
    }
    records
}

/// Shared drop rules: blank rows are silent, unit-only rows warn, and
/// total/subtotal rollup rows are excluded.
fn row_is_usable(
    sheet: &Sheet,
    row: usize,
    description: &str,
    unit: &str,
    outcome: &mut RowOutcome,
) -> bool {
    if description.is_empty() {
        if !unit.is_empty() {
            outcome.skipped += 1;
            outcome.warnings.push(format!(
                "sheet '{}' row {}: no description, row excluded",
                sheet.name,
                row + 1
            ));
        } else if !sheet.row_text_lower(row).is_empty() {
            outcome.skipped += 1;
        }
        return false;
    }
    if is_rollup_row(description) {
        outcome.skipped += 1;
        return false;
    }
    true
}

fn cell_text(sheet: &Sheet, map: &ColumnMap, row: usize, field: Field) -> String {
    map.get(field)
        .map(|col| sheet.cell(row, col).display())
        .unwrap_or_default()
}

fn cell_number(sheet: &Sheet, map: &ColumnMap, row: usize, field: Field) -> f64 {
    map.get(field)
        .map(|col| coerce_float(sheet.cell(row, col), 0.0))
        .unwrap_or(0.0)
}
