//! The import orchestrator: classify sheets, pair them into parts, extract
//! records and link them, accumulating one [`ImportReport`] for the run.
//!
//! Only a workbook that cannot be opened at all fails the run. Everything
//! below that degrades per sheet or per row and is reported, not raised.

use std::path::Path;

use super::columns::{map_headers, ColumnMap};
use super::linkage::link_records;
use super::records::{AbstractRecord, MeasurementRecord};
use super::report::ImportReport;
use super::result::{ImportResult, PartImport};
use super::rows::{self, detect_header_row, RowOutcome};
use super::settings::ImporterSettings;
use crate::classify::{classify_sheet, pair_sheets, probe_content, PartPairing};
use crate::error::Result;
use crate::workbook::{Sheet, Workbook};

/// Request-scoped import engine. Holds only its settings; every call gets
/// fresh state, so importers can be reused across requests.
pub struct EstimateImporter {
    settings: ImporterSettings,
}

impl EstimateImporter {
    pub fn new(settings: ImporterSettings) -> Self {
        Self { settings }
    }

    pub fn with_defaults() -> Self {
        Self::new(ImporterSettings::default())
    }

    pub fn settings(&self) -> &ImporterSettings {
        &self.settings
    }

    /// Imports a workbook file. Fails only when the container itself cannot
    /// be opened or holds no readable sheets.
    pub fn import_path(&self, path: &Path) -> Result<ImportResult> {
        self.settings.progress(5, "file validated");
        let workbook = Workbook::from_path(path)?;
        self.settings.progress(15, "workbook loaded");
        Ok(self.import_workbook(&workbook))
    }

    /// Imports a workbook from an uploaded byte stream.
    pub fn import_bytes(&self, bytes: &[u8]) -> Result<ImportResult> {
        self.settings.progress(5, "file validated");
        let workbook = Workbook::from_bytes(bytes)?;
        self.settings.progress(15, "workbook loaded");
        Ok(self.import_workbook(&workbook))
    }

    /// Imports an already-loaded workbook. Infallible: every remaining
    /// failure mode is recorded in the report.
    pub fn import_workbook(&self, workbook: &Workbook) -> ImportResult {
        let mut report = ImportReport::new();
        for warning in workbook.load_warnings() {
            self.settings.log(warning);
            report.warn(warning.clone());
        }

        let mut classifications = Vec::with_capacity(workbook.sheets().len());
        for sheet in workbook.sheets() {
            let indicators = probe_content(sheet, self.settings.content_scan_rows);
            let classification = classify_sheet(
                &sheet.name,
                sheet,
                indicators,
                &self.settings.classifier_weights,
            );
            if classification.confidence < 0.5 {
                report.warn(format!(
                    "sheet '{}' classified as {} with low confidence {:.2}",
                    sheet.name, classification.kind, classification.confidence
                ));
            }
            report.sheets_processed += 1;
            report.formulas_found += sheet.formula_count;
            classifications.push(classification);
        }

        let (pairings, other_sheets) = pair_sheets(&classifications);
        self.settings.progress(40, "structure analyzed");

        let total_parts = pairings.len().max(1);
        let mut parts = Vec::with_capacity(pairings.len());
        for (index, pairing) in pairings.iter().enumerate() {
            let part = self.import_part(workbook, pairing, &mut report);
            let percent = 40 + (50 * (index + 1) / total_parts) as u8;
            self.settings
                .progress(percent, &format!("imported part '{}'", pairing.part_name));
            parts.push(part);
        }

        let confidence_sum: f64 = parts
            .iter()
            .flat_map(|p| p.linkages.iter())
            .map(|l| l.confidence)
            .sum();
        report.linkages_created = parts.iter().map(|p| p.linkages.len()).sum();
        report.unlinked_abstracts = report
            .abstracts_imported
            .saturating_sub(report.linkages_created);
        report.finalize(confidence_sum);
        self.settings.progress(100, "report generated");

        ImportResult {
            classifications,
            pairings,
            parts,
            other_sheets,
            report,
        }
    }

    fn import_part(
        &self,
        workbook: &Workbook,
        pairing: &PartPairing,
        report: &mut ImportReport,
    ) -> PartImport {
        let measurements = match workbook.sheet(&pairing.measurement_sheet) {
            Some(sheet) => self.read_measurements(sheet, report),
            None => {
                report.error(format!(
                    "measurement sheet '{}' missing from workbook",
                    pairing.measurement_sheet
                ));
                Vec::new()
            }
        };
        let abstracts = match workbook.sheet(&pairing.abstract_sheet) {
            Some(sheet) => self.read_abstracts(sheet, report),
            None => {
                report.error(format!(
                    "abstract sheet '{}' missing from workbook",
                    pairing.abstract_sheet
                ));
                Vec::new()
            }
        };

        report.measurements_imported += measurements.len();
        report.abstracts_imported += abstracts.len();

        let linkages = link_records(
            &measurements,
            &abstracts,
            self.settings.similarity_threshold,
            self.settings.min_shared_tokens,
        );

        let estimated_cost = abstracts.iter().map(|a| a.quantity * a.rate).sum();
        let linked_quantity = linkages.iter().map(|l| l.total_quantity).sum();

        PartImport {
            pairing: pairing.clone(),
            measurements,
            abstracts,
            linkages,
            estimated_cost,
            linked_quantity,
        }
    }

    fn read_measurements(&self, sheet: &Sheet, report: &mut ImportReport) -> Vec<MeasurementRecord> {
        let (map, data_start) = self.locate_table(sheet, report);
        let mut outcome = RowOutcome::default();
        let records = rows::parse_measurements(sheet, &map, data_start, &mut outcome);
        self.absorb_outcome(outcome, report);
        records
    }

    fn read_abstracts(&self, sheet: &Sheet, report: &mut ImportReport) -> Vec<AbstractRecord> {
        let (map, data_start) = self.locate_table(sheet, report);
        let mut outcome = RowOutcome::default();
        let records = rows::parse_abstracts(sheet, &map, data_start, &mut outcome);
        self.absorb_outcome(outcome, report);
        records
    }

    fn locate_table(&self, sheet: &Sheet, report: &mut ImportReport) -> (ColumnMap, usize) {
        let header_row = match detect_header_row(sheet, self.settings.header_scan_rows) {
            Some(row) => row,
            None => {
                let fallback = self.settings.default_header_row;
                report.warn(format!(
                    "no header row found in '{}', falling back to row {}",
                    sheet.name,
                    fallback + 1
                ));
                fallback
            }
        };
        let headers = rows::header_texts(sheet, header_row);
        (map_headers(&headers), header_row + 1)
    }

    fn absorb_outcome(&self, outcome: RowOutcome, report: &mut ImportReport) {
        report.rows_skipped += outcome.skipped;
        for warning in outcome.warnings {
            self.settings.log(&warning);
            report.warn(warning);
        }
    }
}
