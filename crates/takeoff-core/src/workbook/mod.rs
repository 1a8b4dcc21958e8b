//! In-memory workbook model.
//!
//! A [`Workbook`] is an ordered list of named [`Sheet`]s, each a row-major
//! grid of [`CellValue`]s. Grids are immutable once loaded; every import run
//! works on its own copy and nothing is written back.

mod cell;
mod loader;
mod sheet;

pub use cell::CellValue;
pub use sheet::Sheet;

use crate::error::{ImportError, Result};

/// A loaded spreadsheet workbook.
#[derive(Debug, Clone)]
pub struct Workbook {
    sheets: Vec<Sheet>,
    load_warnings: Vec<String>,
}

impl Workbook {
    /// Builds a workbook directly from sheets. Used by non-file callers and
    /// tests; file-based construction lives in the loader.
    pub fn from_sheets(sheets: Vec<Sheet>) -> Result<Self> {
        if sheets.is_empty() {
            return Err(ImportError::EmptyWorkbook);
        }
        Ok(Self {
            sheets,
            load_warnings: Vec::new(),
        })
    }

    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }

    /// Non-fatal problems encountered while reading the container
    /// (individual sheets that could not be decoded, etc.).
    pub fn load_warnings(&self) -> &[String] {
        &self.load_warnings
    }
}
