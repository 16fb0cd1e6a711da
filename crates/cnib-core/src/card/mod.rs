//! National ID card field extraction.

mod parser;
pub mod rules;

pub use parser::{extract, CardParser, ExtractionResult};
