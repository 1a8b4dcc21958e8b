pub mod numeric;
pub mod text;

pub use numeric::coerce_float;
pub use text::{contains_any, token_overlap, tokenize, TokenOverlap};
