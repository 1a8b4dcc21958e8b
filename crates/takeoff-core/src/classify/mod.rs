//! Sheet structure inference: content probing, type classification,
//! part-name extraction and measurement/abstract sheet pairing.

mod classifier;
mod pairing;
mod part_name;
mod probe;

pub use classifier::{classify_sheet, ClassifierWeights, SheetClassification, SheetKind};
pub use pairing::{pair_sheets, PartPairing};
pub use part_name::extract_part_name;
pub use probe::{probe_content, ContentIndicators};
