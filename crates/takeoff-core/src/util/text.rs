//! Text helpers shared by the classifier and the description matcher.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z0-9]+").unwrap());

/// Splits a work-item description into a set of lower-cased word tokens.
pub fn tokenize(text: &str) -> BTreeSet<String> {
    WORD_RE
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// Jaccard-style overlap between two token sets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TokenOverlap {
    /// `|a ∩ b| / |a ∪ b|`, in `[0, 1]`. Zero when both sets are empty.
    pub similarity: f64,
    /// Number of shared tokens.
    pub shared: usize,
}

pub fn token_overlap(a: &BTreeSet<String>, b: &BTreeSet<String>) -> TokenOverlap {
    let shared = a.intersection(b).count();
    let union = a.len() + b.len() - shared;
    let similarity = if union == 0 {
        0.0
    } else {
        shared as f64 / union as f64
    };
    TokenOverlap { similarity, shared }
}

/// True if `haystack` contains any of `needles`. Callers pass lower-cased
/// haystacks; the needle tables are lower-case already.
pub fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}
