use serde::{Deserialize, Serialize};

use super::linkage::Linkage;
use super::records::{AbstractRecord, MeasurementRecord};
use super::report::ImportReport;
use crate::classify::{PartPairing, SheetClassification};

/// Everything extracted for one paired project part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartImport {
    pub pairing: PartPairing,
    pub measurements: Vec<MeasurementRecord>,
    pub abstracts: Vec<AbstractRecord>,
    pub linkages: Vec<Linkage>,
    /// Σ abstract quantity × rate for this part.
    pub estimated_cost: f64,
    /// Σ linked quantity across this part's linkages.
    pub linked_quantity: f64,
}

/// The full structured result of one import run. The caller persists and
/// renders this; the engine keeps nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportResult {
    pub classifications: Vec<SheetClassification>,
    pub pairings: Vec<PartPairing>,
    pub parts: Vec<PartImport>,
    /// Sheets with no measurement/abstract counterpart, kept for
    /// independent handling.
    pub other_sheets: Vec<String>,
    pub report: ImportReport,
}

impl ImportResult {
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
