//! Maps arbitrary column headers to canonical semantic fields.
//!
//! Headers in legacy workbooks vary ("Particulars", "Item of Work",
//! "Description of work"); each canonical field keeps an ordered candidate
//! list and the best match per header is the candidate covering the largest
//! share of the header text.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Canonical semantic fields a column can map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    ItemNo,
    Description,
    Specification,
    Location,
    Quantity,
    Length,
    Breadth,
    Height,
    Diameter,
    Thickness,
    Unit,
    Total,
    Rate,
    Amount,
    Deduction,
    Remarks,
    SsrCode,
}

/// Candidate substrings per field. Listed in match-priority order: on a
/// score tie the earlier entry wins, so Description precedes ItemNo to keep
/// a bare "Item" header on the description side.
static CANDIDATES: Lazy<Vec<(Field, Vec<&'static str>)>> = Lazy::new(|| {
    vec![
        (
            Field::Description,
            vec![
                "particulars",
                "description",
                "item of work",
                "work description",
                "details",
                "item",
            ],
        ),
        (Field::ItemNo, vec!["item no", "sr no", "s.no", "sl no", "sr.no"]),
        (Field::Specification, vec!["specification", "spec"]),
        (Field::Location, vec!["location"]),
        (
            Field::Quantity,
            vec!["quantity", "qty", "nos", "no of", "no."],
        ),
        (Field::Length, vec!["length"]),
        (Field::Breadth, vec!["breadth", "width"]),
        (Field::Height, vec!["height", "depth"]),
        (Field::Diameter, vec!["diameter", "dia"]),
        (Field::Thickness, vec!["thickness", "thick"]),
        (Field::Unit, vec!["unit", "uom"]),
        (
            Field::Total,
            vec!["total qty", "total quantity", "gross qty", "total"],
        ),
        (Field::Rate, vec!["rate"]),
        (Field::Amount, vec!["amount", "cost"]),
        (Field::Deduction, vec!["deduction", "deduct"]),
        (Field::Remarks, vec!["remarks", "remark", "note"]),
        (
            Field::SsrCode,
            vec!["ssr code", "ssr no", "bsr code", "bsr no", "ssr", "bsr", "code"],
        ),
    ]
});

/// Column index per canonical field for one sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    by_field: HashMap<Field, usize>,
}

impl ColumnMap {
    pub fn get(&self, field: Field) -> Option<usize> {
        self.by_field.get(&field).copied()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.by_field.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.by_field.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_field.is_empty()
    }
}

/// Maps raw headers (by position) to canonical fields. Headers matching no
/// candidate are left unmapped and ignored downstream; when two headers
/// claim the same field the leftmost wins.
pub fn map_headers(headers: &[String]) -> ColumnMap {
    let mut map = ColumnMap::default();
    for (col, header) in headers.iter().enumerate() {
        let normalized = header.trim().to_lowercase();
        if normalized.is_empty() {
            continue;
        }
        if let Some(field) = best_field(&normalized) {
            map.by_field.entry(field).or_insert(col);
        }
    }
    map
}

/// Best-scoring field for one header. Score rewards headers that are
/// mostly the matched keyword: `len(candidate) / len(header)`.
fn best_field(header: &str) -> Option<Field> {
    let mut best: Option<(Field, f64)> = None;
    for (field, candidates) in CANDIDATES.iter() {
        for candidate in candidates {
            if !header.contains(candidate) {
                continue;
            }
            let score = candidate.len() as f64 / header.len() as f64;
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((*field, score));
            }
        }
    }
    best.map(|(field, _)| field)
}
