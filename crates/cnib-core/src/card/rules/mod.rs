//! Rule-based field extractors for CNIB OCR lines.
//!
//! Each rule looks at a single [`CardLine`] and returns the value it found,
//! or `None` when its trigger or pattern does not match. Rules never fail.

pub mod attributes;
pub mod dates;
pub mod names;
pub mod numbers;
pub mod patterns;
pub mod text;

pub use attributes::{height, is_document_type, profession, sex};
pub use dates::{birth_date, birth_place, expiry_date, first_date, issue_date};
pub use names::{given_names, has_given_names_label, has_surname_label, surname};
pub use numbers::{expiry_document_number, isolated_document_number, nip};
pub use text::{digits, remove_punctuation, strip_punctuation, title_case};

/// One OCR line prepared for rule matching.
#[derive(Debug, Clone)]
pub struct CardLine<'a> {
    /// Position in the OCR sequence.
    pub index: usize,
    /// Trimmed source text.
    pub raw: &'a str,
    /// `raw` uppercased.
    pub upper: String,
    /// `raw` with punctuation (except hyphens) replaced by spaces.
    pub clean: String,
}

impl<'a> CardLine<'a> {
    pub fn new(index: usize, raw: &'a str) -> Self {
        let raw = raw.trim();
        Self {
            index,
            raw,
            upper: raw.to_uppercase(),
            clean: strip_punctuation(raw, &['-']),
        }
    }
}
