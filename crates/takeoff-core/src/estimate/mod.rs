//! Record extraction and auto-linkage: column mapping, row normalization,
//! description matching and the import orchestrator.

pub mod columns;
mod importer;
mod linkage;
mod records;
mod report;
mod result;
mod rows;
mod settings;

pub use columns::{map_headers, ColumnMap, Field};
pub use importer::EstimateImporter;
pub use linkage::{link_records, Linkage, MatchedMeasurement};
pub use records::{AbstractRecord, MeasurementRecord};
pub use report::ImportReport;
pub use result::{ImportResult, PartImport};
pub use rows::detect_header_row;
pub use settings::ImporterSettings;
