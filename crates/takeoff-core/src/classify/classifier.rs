//! Confidence-weighted sheet type decision.
//!
//! Name-pattern rules and content indicators each add points to one of six
//! running scores; the highest score wins with ties broken by the
//! [`SheetKind`] declaration order. The point values are empirically tuned
//! and deliberately configurable.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::probe::ContentIndicators;
use crate::workbook::Sheet;

/// Divisor turning a winning score into a confidence in `[0, 1]`.
const CONFIDENCE_SCALE: f64 = 10.0;

/// Inferred role of a sheet. Declaration order is the tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SheetKind {
    GeneralAbstract,
    Measurement,
    Abstract,
    TechnicalReport,
    JoinerySchedule,
    Other,
}

impl SheetKind {
    const ALL: [SheetKind; 6] = [
        SheetKind::GeneralAbstract,
        SheetKind::Measurement,
        SheetKind::Abstract,
        SheetKind::TechnicalReport,
        SheetKind::JoinerySchedule,
        SheetKind::Other,
    ];
}

impl fmt::Display for SheetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SheetKind::GeneralAbstract => "general abstract",
            SheetKind::Measurement => "measurement",
            SheetKind::Abstract => "abstract",
            SheetKind::TechnicalReport => "technical report",
            SheetKind::JoinerySchedule => "joinery schedule",
            SheetKind::Other => "other",
        };
        f.write_str(name)
    }
}

/// Point values for the classifier rules. Tunables, not derived constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassifierWeights {
    /// Name contains both "general" and "abstract".
    pub combined_name: f64,
    /// Direct name-pattern match ("measurement", "abstract", "_mes", ...).
    pub name_match: f64,
    /// Sanitary-named sheets leaning measurement or abstract.
    pub qualified_name: f64,
    /// Content advertises dimension columns.
    pub dimension_hint: f64,
    /// Content advertises rate/amount columns.
    pub rate_hint: f64,
    /// Content advertises qty/total columns (ambiguous, both sides).
    pub calculation_hint: f64,
}

impl Default for ClassifierWeights {
    fn default() -> Self {
        Self {
            combined_name: 10.0,
            name_match: 8.0,
            qualified_name: 6.0,
            dimension_hint: 5.0,
            rate_hint: 5.0,
            calculation_hint: 3.0,
        }
    }
}

/// One per sheet; consumed by the pairing engine and surfaced to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetClassification {
    pub sheet_name: String,
    pub kind: SheetKind,
    /// In `[0, 1]`; zero when nothing matched.
    pub confidence: f64,
    pub row_count: usize,
    pub col_count: usize,
    pub indicators: ContentIndicators,
}

/// Pure function of its inputs: the same name and indicators always yield
/// the same decision.
pub fn classify_sheet(
    name: &str,
    sheet: &Sheet,
    indicators: ContentIndicators,
    weights: &ClassifierWeights,
) -> SheetClassification {
    let lower = name.to_lowercase();
    let mut scores = [0.0f64; 6];

    if lower.contains("general") && lower.contains("abstract") {
        scores[idx(SheetKind::GeneralAbstract)] += weights.combined_name;
    }
    if lower.contains("measurement") || lower.contains("measur") || lower.contains("_mes") {
        scores[idx(SheetKind::Measurement)] += weights.name_match;
    }
    if lower.contains("abstract") || lower.contains("_abs") {
        scores[idx(SheetKind::Abstract)] += weights.name_match;
    }
    if lower.contains("sanitary") {
        if lower.contains("measur") {
            scores[idx(SheetKind::Measurement)] += weights.qualified_name;
        } else {
            scores[idx(SheetKind::Abstract)] += weights.qualified_name;
        }
    }
    if lower.contains("tech") || lower.contains("report") {
        scores[idx(SheetKind::TechnicalReport)] += weights.name_match;
    }
    if lower.contains("joinery") || lower.contains("schedule") {
        scores[idx(SheetKind::JoinerySchedule)] += weights.name_match;
    }

    if indicators.has_dimensions {
        scores[idx(SheetKind::Measurement)] += weights.dimension_hint;
    }
    if indicators.has_rates {
        scores[idx(SheetKind::Abstract)] += weights.rate_hint;
    }
    if indicators.has_calculations {
        scores[idx(SheetKind::Measurement)] += weights.calculation_hint;
        scores[idx(SheetKind::Abstract)] += weights.calculation_hint;
    }

    let mut kind = SheetKind::Other;
    let mut best = 0.0f64;
    for candidate in SheetKind::ALL {
        let score = scores[idx(candidate)];
        // Strictly greater: earlier kinds win ties.
        if score > best {
            best = score;
            kind = candidate;
        }
    }

    SheetClassification {
        sheet_name: name.to_string(),
        kind,
        confidence: (best / CONFIDENCE_SCALE).min(1.0),
        row_count: sheet.row_count(),
        col_count: sheet.col_count(),
        indicators,
    }
}

fn idx(kind: SheetKind) -> usize {
    kind as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_sheet(name: &str) -> Sheet {
        Sheet::from_rows(name, vec![])
    }

    fn classify(name: &str, indicators: ContentIndicators) -> SheetClassification {
        classify_sheet(
            name,
            &empty_sheet(name),
            indicators,
            &ClassifierWeights::default(),
        )
    }

    #[test]
    fn general_abstract_name_wins() {
        let c = classify("General Abstract of Cost", ContentIndicators::default());
        assert_eq!(c.kind, SheetKind::GeneralAbstract);
        assert_eq!(c.confidence, 1.0);
    }

    #[test]
    fn mes_suffix_classifies_as_measurement() {
        let c = classify("GF1_MES", ContentIndicators::default());
        assert_eq!(c.kind, SheetKind::Measurement);
        assert_eq!(c.confidence, 0.8);
    }

    #[test]
    fn abs_suffix_classifies_as_abstract() {
        let c = classify("GF1_ABS", ContentIndicators::default());
        assert_eq!(c.kind, SheetKind::Abstract);
        assert_eq!(c.confidence, 0.8);
    }

    #[test]
    fn sanitary_without_measur_leans_abstract() {
        let c = classify("Sanitary", ContentIndicators::default());
        assert_eq!(c.kind, SheetKind::Abstract);
        assert_eq!(c.confidence, 0.6);
    }

    #[test]
    fn sanitary_measurements_lean_measurement() {
        let c = classify("Sanitary Measurements", ContentIndicators::default());
        // 8 (name) + 6 (sanitary) = 14, capped at 1.0.
        assert_eq!(c.kind, SheetKind::Measurement);
        assert_eq!(c.confidence, 1.0);
    }

    #[test]
    fn content_indicators_decide_anonymous_sheets() {
        let measurementish = ContentIndicators {
            has_dimensions: true,
            has_calculations: true,
            ..Default::default()
        };
        let c = classify("Sheet7", measurementish);
        assert_eq!(c.kind, SheetKind::Measurement);
        assert_eq!(c.confidence, 0.8);

        let abstractish = ContentIndicators {
            has_rates: true,
            ..Default::default()
        };
        let c = classify("Sheet8", abstractish);
        assert_eq!(c.kind, SheetKind::Abstract);
        assert_eq!(c.confidence, 0.5);
    }

    #[test]
    fn calculation_only_content_ties_toward_measurement() {
        // Both sides get +3; measurement precedes abstract in tie order.
        let ind = ContentIndicators {
            has_calculations: true,
            ..Default::default()
        };
        let c = classify("Sheet9", ind);
        assert_eq!(c.kind, SheetKind::Measurement);
    }

    #[test]
    fn unrecognized_sheet_is_other_with_zero_confidence() {
        let c = classify("Notes", ContentIndicators::default());
        assert_eq!(c.kind, SheetKind::Other);
        assert_eq!(c.confidence, 0.0);
    }

    #[test]
    fn classification_is_deterministic() {
        let ind = ContentIndicators {
            has_dimensions: true,
            has_rates: true,
            has_calculations: true,
            has_descriptions: true,
        };
        let a = classify("GF1_MES", ind);
        let b = classify("GF1_MES", ind);
        assert_eq!(a, b);
    }

    #[test]
    fn technical_report_and_joinery_names() {
        assert_eq!(
            classify("Technical Report", ContentIndicators::default()).kind,
            SheetKind::TechnicalReport
        );
        assert_eq!(
            classify("Joinery Schedule", ContentIndicators::default()).kind,
            SheetKind::JoinerySchedule
        );
    }
}
