//! Rendering of extracted fields.

use clap::ValueEnum;

use cnib_core::models::OutputFormat;
use cnib_core::{Field, FieldMap};

/// Output format selected on the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FormatArg {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Csv => OutputFormat::Csv,
            FormatArg::Text => OutputFormat::Text,
        }
    }
}

pub fn format_fields(fields: &FieldMap, format: OutputFormat, indent: usize) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(fields.to_json(indent)?),
        OutputFormat::Csv => format_csv(fields),
        OutputFormat::Text => Ok(format_text(fields)),
    }
}

/// One header row with every field and one row of values (empty when missing).
fn format_csv(fields: &FieldMap) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(Field::ALL.iter().map(Field::as_str))?;
    wtr.write_record(Field::ALL.iter().map(|f| fields.get(*f).unwrap_or("")))?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(fields: &FieldMap) -> String {
    if fields.is_empty() {
        return "No fields detected\n".to_string();
    }

    let mut output = String::new();
    for (field, value) in fields.iter() {
        output.push_str(&format!("{}: {}\n", field, value));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> FieldMap {
        let mut fields = FieldMap::new();
        fields.insert(Field::Surname, "Kaboré");
        fields.insert(Field::Sex, "M");
        fields
    }

    #[test]
    fn test_format_text() {
        assert_eq!(format_text(&sample()), "Nom: Kaboré\nSexe: M\n");
        assert_eq!(format_text(&FieldMap::new()), "No fields detected\n");
    }

    #[test]
    fn test_format_csv() {
        let csv = format_csv(&sample()).unwrap();
        let mut rows = csv.lines();
        assert!(rows.next().unwrap().starts_with("Type Document,Numero_NIP,Nom,Prenom,"));
        assert_eq!(rows.next().unwrap(), ",,Kaboré,,,,M,,,,,");
    }

    #[test]
    fn test_format_json_indent() {
        let json = format_fields(&sample(), OutputFormat::Json, 2).unwrap();
        assert_eq!(json, "{\n  \"Nom\": \"Kaboré\",\n  \"Sexe\": \"M\"\n}");
    }
}
