use thiserror::Error;

/// Fatal import failures. Anything recoverable (unreadable sheets, skipped
/// rows, unlinked abstract items) is accumulated into the
/// [`ImportReport`](crate::estimate::ImportReport) instead of failing the run.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Cannot open workbook '{path}': {message}")]
    WorkbookOpen { path: String, message: String },

    #[error("Cannot read workbook: {0}")]
    WorkbookRead(String),

    #[error("Workbook contains no readable sheets")]
    EmptyWorkbook,

    #[error("Sheet '{sheet}' not found in workbook")]
    SheetNotFound { sheet: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ImportError>;
