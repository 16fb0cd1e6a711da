//! Single-pass CNIB field extraction over OCR lines.

use std::time::Instant;

use tracing::{debug, info, trace};

use crate::models::config::{ExtractionConfig, DEFAULT_DOCUMENT_TYPE};
use crate::models::fields::{Field, FieldMap};

use super::rules::{self, CardLine};

/// Line index of the card header.
const HEADER_LINE: usize = 0;
/// Line index where the surname is printed when it carries no label.
const SURNAME_LINE: usize = 2;
/// Line index where the given names are printed when they carry no label.
const GIVEN_NAMES_LINE: usize = 3;

/// Result of card extraction.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Extracted fields.
    pub fields: FieldMap,
    /// Lines the fields were extracted from.
    pub raw_lines: Vec<String>,
    /// One entry per field that was not found.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Rule-based CNIB parser.
///
/// Every line is checked against every rule in a fixed order. When several
/// lines (or rules) produce the same field, the last one wins; the field
/// keeps the position of its first detection in the output.
#[derive(Debug, Clone)]
pub struct CardParser {
    document_type_label: String,
}

impl CardParser {
    /// Create a new parser with default settings.
    pub fn new() -> Self {
        Self {
            document_type_label: DEFAULT_DOCUMENT_TYPE.to_string(),
        }
    }

    /// Create a parser from extraction settings.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new().with_document_type_label(config.document_type_label.clone())
    }

    /// Set the value written to `Type Document`.
    pub fn with_document_type_label(mut self, label: impl Into<String>) -> Self {
        self.document_type_label = label.into();
        self
    }

    /// Extract fields from OCR lines in document order.
    pub fn extract<S: AsRef<str>>(&self, lines: &[S]) -> FieldMap {
        let mut fields = FieldMap::new();

        for (index, raw) in lines.iter().enumerate() {
            let line = CardLine::new(index, raw.as_ref());
            trace!("Line {}: {:?}", index, line.raw);
            self.apply_rules(&line, &mut fields);
        }

        fields
    }

    /// Extract fields and collect warnings for the ones not found.
    pub fn parse<S: AsRef<str>>(&self, lines: &[S]) -> ExtractionResult {
        let start = Instant::now();

        info!("Parsing card from {} OCR lines", lines.len());

        let fields = self.extract(lines);
        let warnings: Vec<String> = fields
            .missing()
            .into_iter()
            .map(|field| format!("Could not extract {}", field))
            .collect();

        debug!(
            "Extracted {} fields, {} missing",
            fields.len(),
            warnings.len()
        );

        ExtractionResult {
            fields,
            raw_lines: lines.iter().map(|l| l.as_ref().to_string()).collect(),
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }

    fn apply_rules(&self, line: &CardLine<'_>, fields: &mut FieldMap) {
        if line.index == HEADER_LINE && rules::is_document_type(line) {
            set(fields, Field::DocumentType, Some(self.document_type_label.clone()), line);
        }

        set(fields, Field::Nip, rules::nip(line), line);

        let surname_label = rules::has_surname_label(line);
        let given_names_label = rules::has_given_names_label(line);

        if surname_label || (line.index == SURNAME_LINE && !given_names_label) {
            set(fields, Field::Surname, rules::surname(line), line);
        }

        if given_names_label || (line.index == GIVEN_NAMES_LINE && !surname_label) {
            set(fields, Field::GivenNames, rules::given_names(line), line);
        }

        set(fields, Field::BirthDate, rules::birth_date(line), line);
        set(fields, Field::BirthPlace, rules::birth_place(line), line);
        set(fields, Field::Sex, rules::sex(line), line);
        set(fields, Field::Height, rules::height(line), line);
        set(fields, Field::Profession, rules::profession(line), line);
        set(fields, Field::IssueDate, rules::issue_date(line), line);
        set(fields, Field::ExpiryDate, rules::expiry_date(line), line);
        set(fields, Field::DocumentNumber, rules::expiry_document_number(line), line);
        set(fields, Field::DocumentNumber, rules::isolated_document_number(line), line);
    }
}

impl Default for CardParser {
    fn default() -> Self {
        Self::new()
    }
}

fn set(fields: &mut FieldMap, field: Field, value: Option<String>, line: &CardLine<'_>) {
    let Some(value) = value else {
        return;
    };

    if let Some(previous) = fields.get(field) {
        if previous != value {
            debug!("{} overwritten by line {}: {:?} -> {:?}", field, line.index, previous, value);
        }
    } else {
        debug!("{} found on line {}: {:?}", field, line.index, value);
    }

    fields.insert(field, value);
}

/// Extract fields from OCR lines with the default parser.
pub fn extract<S: AsRef<str>>(lines: &[S]) -> FieldMap {
    CardParser::new().extract(lines)
}
