use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Write-once summary of one import run: counters, accumulated warnings and
/// sheet-level errors, and derived quality metrics filled in by
/// [`ImportReport::finalize`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportReport {
    pub sheets_processed: usize,
    pub formulas_found: usize,
    pub measurements_imported: usize,
    pub abstracts_imported: usize,
    pub linkages_created: usize,
    pub unlinked_abstracts: usize,
    pub rows_skipped: usize,

    /// Sheet-fatal problems (the run itself continued).
    pub errors: Vec<String>,
    /// Non-fatal analysis problems; processing continued with defaults.
    pub warnings: Vec<String>,

    /// Fraction of processed sheets without a sheet-level error.
    pub success_rate: f64,
    /// Fraction of abstract items with at least one linkage.
    pub completeness: f64,
    /// Mean linkage confidence across all created linkages.
    pub linkage_accuracy: f64,

    pub generated_at: DateTime<Utc>,
}

impl ImportReport {
    pub fn new() -> Self {
        Self {
            sheets_processed: 0,
            formulas_found: 0,
            measurements_imported: 0,
            abstracts_imported: 0,
            linkages_created: 0,
            unlinked_abstracts: 0,
            rows_skipped: 0,
            errors: Vec::new(),
            warnings: Vec::new(),
            success_rate: 0.0,
            completeness: 0.0,
            linkage_accuracy: 0.0,
            generated_at: Utc::now(),
        }
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Computes the derived quality metrics and stamps the report.
    /// `confidence_sum` is the sum of all linkage confidences.
    pub fn finalize(&mut self, confidence_sum: f64) {
        self.success_rate = if self.sheets_processed == 0 {
            0.0
        } else {
            let failed = self.errors.len().min(self.sheets_processed);
            (self.sheets_processed - failed) as f64 / self.sheets_processed as f64
        };
        self.completeness = if self.abstracts_imported == 0 {
            0.0
        } else {
            self.linkages_created as f64 / self.abstracts_imported as f64
        };
        self.linkage_accuracy = if self.linkages_created == 0 {
            0.0
        } else {
            confidence_sum / self.linkages_created as f64
        };
        self.generated_at = Utc::now();
    }
}

impl Default for ImportReport {
    fn default() -> Self {
        Self::new()
    }
}
