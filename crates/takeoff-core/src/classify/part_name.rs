//! Recovers the logical project-part name shared between a measurement
//! sheet and its paired abstract sheet.

/// Known sheet-name decorations, stripped case-sensitively in this order.
const STRIP_PATTERNS: &[&str] = &[
    "_MES",
    "_ABS",
    "_MEASUR",
    "-abs",
    " Measurement",
    " Abstract",
];

/// Strips known suffixes and applies canonical overrides. Total and
/// idempotent for already-canonical part names.
pub fn extract_part_name(sheet_name: &str) -> String {
    let mut residual = sheet_name.to_string();
    for pattern in STRIP_PATTERNS {
        residual = residual.replace(pattern, "");
    }

    let lower = residual.to_lowercase();
    if lower.contains("sanitary") {
        return "Sanitary".to_string();
    }
    if lower.contains("ground") && lower.contains("floor") {
        return "Ground Floor".to_string();
    }
    if lower.contains("first") && lower.contains("floor") {
        return "First Floor".to_string();
    }

    residual.trim().to_string()
}
