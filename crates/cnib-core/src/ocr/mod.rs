//! OCR output as an ordered sequence of cleaned lines.
//!
//! Running the OCR engine is left to the caller. This module accepts what a
//! detail-free reader produces (one text segment per entry, in reading order)
//! either as plain text with one segment per line or as a JSON array of
//! strings, and applies the same cleaning in both cases: every segment is
//! trimmed and blank segments are dropped.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

/// Cleaned OCR lines in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OcrLines {
    lines: Vec<String>,
}

impl OcrLines {
    /// Build from raw segments.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines = segments
            .into_iter()
            .map(|s| s.as_ref().trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        Self { lines }
    }

    /// Parse plain text, one OCR segment per line.
    pub fn from_text(text: &str) -> Self {
        Self::new(text.lines())
    }

    /// Parse a JSON array of strings.
    pub fn from_json(json: &str) -> Result<Self> {
        let segments: Vec<String> = serde_json::from_str(json)?;
        Ok(Self::new(segments))
    }

    /// Read OCR lines from a file.
    ///
    /// Files with a `.json` extension are read as a JSON array, anything else
    /// as plain text.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        let lines = if is_json {
            Self::from_json(&content)?
        } else {
            Self::from_text(&content)
        };

        debug!("Read {} OCR lines from {}", lines.len(), path.display());
        Ok(lines)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a OcrLines {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}
