//! Configuration structures for extraction and output.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CnibError, Result};

/// Label written to `Type Document` when line 0 names an identity card.
pub const DEFAULT_DOCUMENT_TYPE: &str = "CARTE NATIONALE D'IDENTITE BURKINABE";

/// Main configuration for cnib.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CnibConfig {
    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Output configuration.
    pub output: OutputConfig,
}

/// Field extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Value stored in `Type Document` when the card header is recognized.
    pub document_type_label: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            document_type_label: DEFAULT_DOCUMENT_TYPE.to_string(),
        }
    }
}

/// Output format for extracted fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON object, keys in detection order.
    #[default]
    Json,
    /// One header row and one value row.
    Csv,
    /// `key: value` lines.
    Text,
}

impl OutputFormat {
    /// File extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Format used when none is given on the command line.
    pub format: OutputFormat,

    /// Indent width for JSON output.
    pub indent: usize,

    /// File stem used when the output path is a directory.
    pub file_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Json,
            indent: 4,
            file_name: "donnees_identite".to_string(),
        }
    }
}

impl CnibConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.check()?;
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        self.check()?;
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn check(&self) -> Result<()> {
        if self.extraction.document_type_label.trim().is_empty() {
            return Err(CnibError::Config(
                "extraction.document_type_label must not be empty".to_string(),
            ));
        }
        if self.output.file_name.trim().is_empty() {
            return Err(CnibError::Config("output.file_name must not be empty".to_string()));
        }
        Ok(())
    }
}
