//! Core library for Burkinabè national ID card (CNIB) OCR processing.
//!
//! This crate provides:
//! - Cleaning of OCR output into an ordered sequence of lines
//! - Rule-based field extraction (names, birth date/place, sex, height,
//!   profession, NIP, document number, validity dates)
//! - An insertion-ordered [`FieldMap`] that serializes to JSON

pub mod card;
pub mod error;
pub mod models;
pub mod ocr;

pub use card::{extract, CardParser, ExtractionResult};
pub use error::{CnibError, Result};
pub use models::config::CnibConfig;
pub use models::fields::{Field, FieldMap};
pub use ocr::OcrLines;
