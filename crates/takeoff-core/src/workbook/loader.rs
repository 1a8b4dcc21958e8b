//! Workbook container reading via calamine.
//!
//! Only the container open can fail the whole import. A single sheet that
//! cannot be decoded is skipped and recorded as a load warning so the rest
//! of the workbook still imports.

use std::io::{Cursor, Read, Seek};
use std::path::Path;

use calamine::{open_workbook_auto, open_workbook_auto_from_rs, Data, Reader, Sheets};

use super::cell::CellValue;
use super::sheet::Sheet;
use super::Workbook;
use crate::error::{ImportError, Result};

impl Workbook {
    /// Opens a workbook file (xlsx/xls/ods decided by content).
    pub fn from_path(path: &Path) -> Result<Self> {
        let mut reader = open_workbook_auto(path).map_err(|e| ImportError::WorkbookOpen {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        load_sheets(&mut reader)
    }

    /// Opens a workbook from an in-memory byte stream (file uploads).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let cursor = Cursor::new(bytes.to_vec());
        let mut reader =
            open_workbook_auto_from_rs(cursor).map_err(|e| ImportError::WorkbookOpen {
                path: "<bytes>".to_string(),
                message: e.to_string(),
            })?;
        load_sheets(&mut reader)
    }
}

fn load_sheets<RS: Read + Seek>(reader: &mut Sheets<RS>) -> Result<Workbook> {
    let names = reader.sheet_names().to_owned();
    let mut sheets = Vec::with_capacity(names.len());
    let mut load_warnings = Vec::new();

    for name in names {
        let range = match reader.worksheet_range(&name) {
            Ok(range) => range,
            Err(e) => {
                load_warnings.push(format!("sheet '{name}' could not be read: {e}"));
                continue;
            }
        };

        let mut rows = grid_from_range(&range);
        let mut formula_count = rows
            .iter()
            .flatten()
            .filter(|c| c.is_formula())
            .count();

        // Overlay formula text. Cells whose cached value survived the read
        // keep that value; the formula only fills cells the value pass left
        // empty, so quantity columns stay numeric.
        if let Ok(formulas) = reader.worksheet_formula(&name) {
            let (start_row, start_col) = formulas.start().unwrap_or((0, 0));
            for (r, c, formula) in formulas.used_cells() {
                if formula.trim().is_empty() {
                    continue;
                }
                formula_count += 1;
                let row = start_row as usize + r;
                let col = start_col as usize + c;
                if rows.len() <= row {
                    rows.resize(row + 1, Vec::new());
                }
                if rows[row].len() <= col {
                    rows[row].resize(col + 1, CellValue::Empty);
                }
                if rows[row][col].is_empty() {
                    rows[row][col] = CellValue::Formula(formula.trim().to_string());
                }
            }
        }

        let mut sheet = Sheet::from_rows(name, rows);
        sheet.set_formula_count(formula_count);
        sheets.push(sheet);
    }

    if sheets.is_empty() {
        if let Some(warning) = load_warnings.first() {
            return Err(ImportError::WorkbookRead(warning.clone()));
        }
        return Err(ImportError::EmptyWorkbook);
    }

    let mut workbook = Workbook::from_sheets(sheets)?;
    workbook.load_warnings = load_warnings;
    Ok(workbook)
}

/// Converts a calamine range into an absolute-coordinate grid, preserving
/// any leading empty rows/columns the source file has.
fn grid_from_range(range: &calamine::Range<Data>) -> Vec<Vec<CellValue>> {
    let (height, width) = range.get_size();
    let (start_row, start_col) = range.start().unwrap_or((0, 0));
    let (start_row, start_col) = (start_row as usize, start_col as usize);

    let mut rows = vec![vec![CellValue::Empty; start_col + width]; start_row + height];
    for (r, row) in range.rows().enumerate() {
        for (c, data) in row.iter().enumerate() {
            rows[start_row + r][start_col + c] = convert_cell(data);
        }
    }
    rows
}

fn convert_cell(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                CellValue::Empty
            } else if let Some(body) = trimmed.strip_prefix('=') {
                // Raw formula text stored as a string value.
                CellValue::Formula(body.trim().to_string())
            } else {
                CellValue::Text(s.clone())
            }
        }
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(_) => CellValue::Empty,
    }
}
