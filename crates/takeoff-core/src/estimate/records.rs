use serde::{Deserialize, Serialize};

/// One normalized row of a measurement sheet.
///
/// Numeric fields default to 0.0 when the source cell could not be
/// coerced. `total` honors a declared non-zero total/qty column, else it is
/// computed from dimensions with absent (zero) dimensions treated as 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementRecord {
    /// 1-based sequence within its sheet.
    pub id: usize,
    pub item_no: String,
    pub description: String,
    pub specification: String,
    pub location: String,
    pub quantity: f64,
    pub length: f64,
    pub breadth: f64,
    pub height: f64,
    pub diameter: f64,
    pub thickness: f64,
    pub unit: String,
    pub total: f64,
    pub deduction: f64,
    /// `max(0, total - deduction)`.
    pub net_total: f64,
    pub remarks: String,
    pub ssr_code: String,
}

/// One normalized row of an abstract-of-cost sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbstractRecord {
    /// 1-based sequence within its sheet.
    pub id: usize,
    pub ssr_code: String,
    pub description: String,
    pub unit: String,
    pub quantity: f64,
    pub rate: f64,
    /// `quantity × rate`, falling back to a declared amount column when the
    /// product is zero.
    pub amount: f64,
}
