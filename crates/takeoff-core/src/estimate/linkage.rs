//! Links abstract cost items to the measurement rows that justify their
//! quantities, by bag-of-words description overlap.
//!
//! The comparison is quadratic per part, which is fine at the tens to low
//! hundreds of rows real estimate sheets carry.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::records::{AbstractRecord, MeasurementRecord};
use crate::util::{token_overlap, tokenize};

/// One measurement row matched to an abstract item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedMeasurement {
    pub measurement_id: usize,
    pub description: String,
    pub similarity: f64,
    /// The measurement's net total quantity.
    pub total: f64,
    pub unit: String,
}

/// An inferred correspondence between one abstract line and the measurement
/// lines that justify its quantity. Only emitted for abstract items with at
/// least one qualifying match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Linkage {
    pub abstract_id: usize,
    pub abstract_description: String,
    pub abstract_unit: String,
    /// Sorted by similarity, best first.
    pub matched_measurements: Vec<MatchedMeasurement>,
    /// Sum of matched measurement net totals.
    pub total_quantity: f64,
    /// Similarity of the best match; always above the qualifying threshold.
    pub confidence: f64,
}

/// Matches every abstract record against every measurement record. A
/// measurement qualifies when `similarity > similarity_threshold` and the
/// descriptions share at least `min_shared_tokens` tokens.
pub fn link_records(
    measurements: &[MeasurementRecord],
    abstracts: &[AbstractRecord],
    similarity_threshold: f64,
    min_shared_tokens: usize,
) -> Vec<Linkage> {
    let measurement_tokens: Vec<_> = measurements
        .iter()
        .map(|m| tokenize(&m.description))
        .collect();

    let mut linkages = Vec::new();
    for abs in abstracts {
        let abs_tokens = tokenize(&abs.description);
        let mut matches = Vec::new();

        for (m, m_tokens) in measurements.iter().zip(&measurement_tokens) {
            let overlap = token_overlap(&abs_tokens, m_tokens);
            if overlap.similarity > similarity_threshold && overlap.shared >= min_shared_tokens {
                matches.push(MatchedMeasurement {
                    measurement_id: m.id,
                    description: m.description.clone(),
                    similarity: overlap.similarity,
                    total: m.net_total,
                    unit: m.unit.clone(),
                });
            }
        }

        if matches.is_empty() {
            continue;
        }
        matches.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(Ordering::Equal)
                .then(a.measurement_id.cmp(&b.measurement_id))
        });

        linkages.push(Linkage {
            abstract_id: abs.id,
            abstract_description: abs.description.clone(),
            abstract_unit: abs.unit.clone(),
            total_quantity: matches.iter().map(|m| m.total).sum(),
            confidence: matches[0].similarity,
            matched_measurements: matches,
        });
    }
    linkages
}
