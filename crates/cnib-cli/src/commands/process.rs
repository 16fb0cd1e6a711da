//! Process command - extract fields from a single OCR line file.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info, warn};

use cnib_core::models::OutputFormat;
use cnib_core::{CardParser, OcrLines};

use super::config::load_config;
use super::output::{format_fields, FormatArg};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// OCR lines file (.txt with one segment per line, or .json array); `-` reads stdin
    #[arg(required = true)]
    input: String,

    /// Output file or directory (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format (default: from config)
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    /// Print the OCR lines after the extracted fields
    #[arg(long)]
    raw: bool,

    /// List fields that could not be extracted
    #[arg(long)]
    show_missing: bool,

    /// Check extracted dates
    #[arg(long)]
    validate: bool,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;

    let lines = read_lines(&args.input)?;
    if lines.is_empty() {
        warn!("No OCR lines found in {}", args.input);
    }

    info!("Processing {} OCR lines from {}", lines.len(), args.input);

    let parser = CardParser::from_config(&config.extraction);
    let result = parser.parse(lines.as_slice());

    if args.show_missing {
        for warning in &result.warnings {
            eprintln!("{} {}", style("⚠").yellow(), warning);
        }
    }

    if args.validate {
        let issues = result.fields.validate();
        if !issues.is_empty() {
            eprintln!("{}", style("Validation issues:").yellow());
            for issue in &issues {
                eprintln!("  - {}", issue);
            }
        }
    }

    let format = args.format.map(OutputFormat::from).unwrap_or(config.output.format);
    let output = format_fields(&result.fields, format, config.output.indent)?;

    if let Some(output_path) = &args.output {
        let output_path = resolve_output_path(output_path, &config.output.file_name, format);
        fs::write(&output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.raw {
        println!();
        println!("{}", style("Raw OCR text:").bold());
        for line in &lines {
            println!("{}", line);
        }
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Read OCR lines from a file, or from stdin when `input` is `-`.
pub fn read_lines(input: &str) -> anyhow::Result<OcrLines> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(OcrLines::from_text(&text));
    }

    let path = Path::new(input);
    if !path.exists() {
        anyhow::bail!("Input file not found: {}", path.display());
    }

    Ok(OcrLines::from_file(path)?)
}

/// A directory output receives `<file_name>.<ext>`; anything else is used as is.
fn resolve_output_path(path: &Path, file_name: &str, format: OutputFormat) -> PathBuf {
    if path.is_dir() {
        path.join(format!("{}.{}", file_name, format.extension()))
    } else {
        path.to_path_buf()
    }
}
