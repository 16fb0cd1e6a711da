//! Data models for extracted card fields and configuration.

pub mod config;
pub mod fields;

pub use config::{CnibConfig, ExtractionConfig, OutputConfig, OutputFormat};
pub use fields::{Field, FieldMap};
