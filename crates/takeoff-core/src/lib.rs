//! Heuristic structure inference and auto-linkage for construction estimate
//! workbooks.
//!
//! Given a multi-sheet workbook, the engine infers which sheets are
//! measurement sheets vs abstracts of cost, pairs them by project part,
//! maps their columns, normalizes rows into typed records and links each
//! abstract cost line to the measurement lines that justify its quantity.
//! Everything is best-effort: only an unopenable workbook fails the run.

pub mod classify;
pub mod error;
pub mod estimate;
pub mod util;
pub mod workbook;

pub use error::{ImportError, Result};

pub use classify::{
    classify_sheet, extract_part_name, pair_sheets, probe_content, ClassifierWeights,
    ContentIndicators, PartPairing, SheetClassification, SheetKind,
};
pub use estimate::{
    AbstractRecord, EstimateImporter, ImportReport, ImportResult, ImporterSettings, Linkage,
    MatchedMeasurement, MeasurementRecord, PartImport,
};
pub use workbook::{CellValue, Sheet, Workbook};
