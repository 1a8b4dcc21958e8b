//! Groups classified sheets by extracted part name and forms
//! measurement/abstract pairs.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::classifier::{SheetClassification, SheetKind};
use super::part_name::extract_part_name;

/// A matched measurement/abstract sheet pair for one project part. Both
/// sheet names reference sheets present in the source workbook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartPairing {
    pub part_name: String,
    pub measurement_sheet: String,
    pub abstract_sheet: String,
    /// 1.0 for identical part names, 0.8 when one contains the other.
    pub confidence: f64,
}

/// Pairs measurement sheets with abstract sheets by part name. Sheets with
/// no counterpart (including general abstract, technical report and joinery
/// schedule sheets) are returned separately for independent handling, not
/// dropped.
pub fn pair_sheets(classified: &[SheetClassification]) -> (Vec<PartPairing>, Vec<String>) {
    let mut measurement_parts: BTreeMap<String, String> = BTreeMap::new();
    let mut abstract_parts: BTreeMap<String, String> = BTreeMap::new();

    for c in classified {
        let part = extract_part_name(&c.sheet_name);
        if part.is_empty() {
            continue;
        }
        // First sheet per part wins; duplicates stay unpaired.
        match c.kind {
            SheetKind::Measurement => {
                measurement_parts.entry(part).or_insert_with(|| c.sheet_name.clone());
            }
            SheetKind::Abstract => {
                abstract_parts.entry(part).or_insert_with(|| c.sheet_name.clone());
            }
            _ => {}
        }
    }

    let mut pairings = Vec::new();
    let mut used_abstracts: BTreeSet<&str> = BTreeSet::new();
    let mut paired_measurements: BTreeSet<&str> = BTreeSet::new();

    // Exact matches settle first, across all parts. Running the substring
    // fallback in the same pass would let an earlier measurement part claim
    // an abstract whose part name matches a later measurement exactly.
    for (m_part, m_sheet) in &measurement_parts {
        let m_lower = m_part.to_lowercase();
        let exact = abstract_parts.iter().find(|(a_part, a_sheet)| {
            !used_abstracts.contains(a_sheet.as_str()) && a_part.to_lowercase() == m_lower
        });
        if let Some((_, a_sheet)) = exact {
            used_abstracts.insert(a_sheet);
            paired_measurements.insert(m_sheet);
            pairings.push(PartPairing {
                part_name: m_part.clone(),
                measurement_sheet: m_sheet.clone(),
                abstract_sheet: a_sheet.to_string(),
                confidence: 1.0,
            });
        }
    }

    // Substring fallback over the leftovers.
    for (m_part, m_sheet) in &measurement_parts {
        if paired_measurements.contains(m_sheet.as_str()) {
            continue;
        }
        let m_lower = m_part.to_lowercase();
        let found = abstract_parts.iter().find(|(a_part, a_sheet)| {
            if used_abstracts.contains(a_sheet.as_str()) {
                return false;
            }
            let a_lower = a_part.to_lowercase();
            m_lower.contains(&a_lower) || a_lower.contains(&m_lower)
        });
        if let Some((_, a_sheet)) = found {
            used_abstracts.insert(a_sheet);
            pairings.push(PartPairing {
                part_name: m_part.clone(),
                measurement_sheet: m_sheet.clone(),
                abstract_sheet: a_sheet.to_string(),
                confidence: 0.8,
            });
        }
    }

    let paired: BTreeSet<&str> = pairings
        .iter()
        .flat_map(|p| [p.measurement_sheet.as_str(), p.abstract_sheet.as_str()])
        .collect();
    let other_sheets = classified
        .iter()
        .filter(|c| !paired.contains(c.sheet_name.as_str()))
        .map(|c| c.sheet_name.clone())
        .collect();

    (pairings, other_sheets)
}
