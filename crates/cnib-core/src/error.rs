//! Error types for the cnib-core library.
//!
//! Field extraction itself never fails: a field that cannot be found is simply
//! absent from the [`FieldMap`](crate::models::fields::FieldMap). These errors
//! only cover reading OCR output and configuration.

use thiserror::Error;

/// Main error type for the cnib library.
#[derive(Error, Debug)]
pub enum CnibError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON input (OCR line array or configuration file).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for the cnib library.
pub type Result<T> = std::result::Result<T, CnibError>;
