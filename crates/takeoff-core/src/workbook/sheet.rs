use super::cell::CellValue;

const EMPTY_CELL: CellValue = CellValue::Empty;

/// A named 2-D grid of cell values, immutable after construction.
///
/// Row and column indices are zero-based and absolute: leading empty rows
/// present in the source file stay in the grid so positions line up with
/// what the estimator sees in their spreadsheet application.
#[derive(Debug, Clone)]
pub struct Sheet {
    pub name: String,
    rows: Vec<Vec<CellValue>>,
    /// Number of formula cells observed while loading.
    pub formula_count: usize,
}

impl Sheet {
    pub fn from_rows(name: impl Into<String>, rows: Vec<Vec<CellValue>>) -> Self {
        let formula_count = rows.iter().flatten().filter(|c| c.is_formula()).count();
        Self {
            name: name.into(),
            rows,
            formula_count,
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn col_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Out-of-range reads yield an empty cell; ragged rows are fine.
    pub fn cell(&self, row: usize, col: usize) -> &CellValue {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&EMPTY_CELL)
    }

    pub fn row(&self, row: usize) -> &[CellValue] {
        self.rows.get(row).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Concatenated lower-cased text of every non-empty cell in a row,
    /// space-separated. This is the haystack for keyword probes.
    pub fn row_text_lower(&self, row: usize) -> String {
        let mut text = String::new();
        for cell in self.row(row) {
            if cell.is_empty() {
                continue;
            }
            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(&cell.display().to_lowercase());
        }
        text
    }

    pub(crate) fn set_formula_count(&mut self, count: usize) {
        self.formula_count = count;
    }
}
