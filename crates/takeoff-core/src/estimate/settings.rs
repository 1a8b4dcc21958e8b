//! Import tunables.
//!
//! The similarity threshold, shared-token floor and classifier point values
//! are empirically chosen; they live here as explicit settings rather than
//! constants buried in the matcher, and the defaults are pinned by
//! characterization tests.

use std::fmt;

use crate::classify::ClassifierWeights;

type ProgressCallback = Box<dyn Fn(u8, &str) + Send + Sync>;
type LogCallback = Box<dyn Fn(&str) + Send + Sync>;

pub struct ImporterSettings {
    /// Rows scanned by the content prober.
    pub content_scan_rows: usize,
    /// Rows scanned when locating the header row.
    pub header_scan_rows: usize,
    /// Zero-based header row assumed when detection fails.
    pub default_header_row: usize,
    /// Minimum Jaccard similarity for a measurement/abstract link.
    pub similarity_threshold: f64,
    /// Minimum shared description tokens for a link.
    pub min_shared_tokens: usize,
    pub classifier_weights: ClassifierWeights,

    /// Advisory progress milestones `(percent, message)`; no effect on
    /// correctness when absent.
    pub progress_callback: Option<ProgressCallback>,
    /// Optional diagnostic logging.
    pub log_callback: Option<LogCallback>,
}

impl Default for ImporterSettings {
    fn default() -> Self {
        Self {
            content_scan_rows: 10,
            header_scan_rows: 20,
            default_header_row: 2,
            similarity_threshold: 0.3,
            min_shared_tokens: 2,
            classifier_weights: ClassifierWeights::default(),
            progress_callback: None,
            log_callback: None,
        }
    }
}

impl ImporterSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_similarity_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    pub fn with_min_shared_tokens(mut self, tokens: usize) -> Self {
        self.min_shared_tokens = tokens;
        self
    }

    pub fn with_classifier_weights(mut self, weights: ClassifierWeights) -> Self {
        self.classifier_weights = weights;
        self
    }

    pub fn with_default_header_row(mut self, row: usize) -> Self {
        self.default_header_row = row;
        self
    }

    pub fn on_progress(mut self, callback: impl Fn(u8, &str) + Send + Sync + 'static) -> Self {
        self.progress_callback = Some(Box::new(callback));
        self
    }

    pub fn on_log(mut self, callback: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.log_callback = Some(Box::new(callback));
        self
    }

    /// Fires a progress milestone if a callback is configured.
    pub fn progress(&self, percent: u8, message: &str) {
        if let Some(ref callback) = self.progress_callback {
            callback(percent, message);
        }
    }

    /// Logs a message if a callback is configured.
    pub fn log(&self, message: &str) {
        if let Some(ref callback) = self.log_callback {
            callback(message);
        }
    }
}

impl fmt::Debug for ImporterSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImporterSettings")
            .field("content_scan_rows", &self.content_scan_rows)
            .field("header_scan_rows", &self.header_scan_rows)
            .field("default_header_row", &self.default_header_row)
            .field("similarity_threshold", &self.similarity_threshold)
            .field("min_shared_tokens", &self.min_shared_tokens)
            .field("classifier_weights", &self.classifier_weights)
            .field("progress_callback", &self.progress_callback.is_some())
            .field("log_callback", &self.log_callback.is_some())
            .finish()
    }
}
