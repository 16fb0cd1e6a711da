//! Batch processing command for multiple OCR line files.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use cnib_core::models::OutputFormat;
use cnib_core::{CardParser, CnibConfig, Field, FieldMap, OcrLines};

use super::config::load_config;
use super::output::{format_fields, FormatArg};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory (default: print each result)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file (default: from config)
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single file.
struct ProcessResult {
    path: PathBuf,
    fields: Option<FieldMap>,
    error: Option<String>,
    processing_time_ms: u64,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    // Load configuration
    let config = load_config(config_path)?;
    let format = args.format.map(OutputFormat::from).unwrap_or(config.output.format);

    // Expand glob pattern
    let mut files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            matches!(ext.to_lowercase().as_str(), "txt" | "json")
        })
        .collect();
    files.sort();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    eprintln!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    // Create output directory if specified
    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    // Set up progress bar
    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let parser = CardParser::from_config(&config.extraction);
    let mut results = Vec::with_capacity(files.len());

    // Process files sequentially
    for path in files {
        let file_start = Instant::now();
        let result = process_single_file(&path, &parser);
        let processing_time_ms = file_start.elapsed().as_millis() as u64;

        match result {
            Ok(fields) => {
                results.push(ProcessResult {
                    path,
                    fields: Some(fields),
                    error: None,
                    processing_time_ms,
                });
            }
            Err(e) => {
                let error_msg = e.to_string();
                if args.continue_on_error {
                    warn!("Failed to process {}: {}", path.display(), error_msg);
                    results.push(ProcessResult {
                        path,
                        fields: None,
                        error: Some(error_msg),
                        processing_time_ms,
                    });
                } else {
                    error!("Failed to process {}: {}", path.display(), error_msg);
                    pb.abandon();
                    anyhow::bail!("Processing failed for {}: {}", path.display(), error_msg);
                }
            }
        }

        pb.inc(1);
    }

    pb.finish_and_clear();

    let successful: Vec<_> = results.iter().filter(|r| r.fields.is_some()).collect();
    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();

    // Write outputs
    for result in &successful {
        let Some(fields) = &result.fields else {
            continue;
        };
        write_result(&result.path, fields, format, &config, args.output_dir.as_deref())?;
    }

    // Generate summary if requested
    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        eprintln!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    // Print summary
    eprintln!();
    eprintln!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    eprintln!(
        "   {} successful, {} failed",
        style(successful.len()).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        eprintln!();
        eprintln!("{}", style("Failed files:").red());
        for result in &failed {
            eprintln!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

fn process_single_file(path: &Path, parser: &CardParser) -> anyhow::Result<FieldMap> {
    let lines = OcrLines::from_file(path)?;
    if lines.is_empty() {
        warn!("No OCR lines found in {}", path.display());
    }

    Ok(parser.extract(lines.as_slice()))
}

fn write_result(
    path: &Path,
    fields: &FieldMap,
    format: OutputFormat,
    config: &CnibConfig,
    output_dir: Option<&Path>,
) -> anyhow::Result<()> {
    let content = format_fields(fields, format, config.output.indent)?;

    match output_dir {
        Some(output_dir) => {
            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or(&config.output.file_name);
            let output_path = output_dir.join(format!("{}.{}", stem, format.extension()));

            fs::write(&output_path, content)?;
            debug!("Wrote output to {}", output_path.display());
        }
        None => {
            println!("==> {} <==", path.display());
            println!("{}", content);
        }
    }

    Ok(())
}

fn write_summary(path: &Path, results: &[ProcessResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    // Write header
    let mut header = vec!["filename", "status"];
    header.extend(Field::ALL.iter().map(Field::as_str));
    header.extend(["fields_found", "processing_time_ms", "processed_at", "error"]);
    wtr.write_record(&header)?;

    let processed_at = chrono::Local::now().to_rfc3339();

    // Write data
    for result in results {
        let filename = result
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");

        let mut record = vec![filename.to_string()];

        match &result.fields {
            Some(fields) => {
                record.push("success".to_string());
                record.extend(Field::ALL.iter().map(|f| fields.get(*f).unwrap_or("").to_string()));
                record.push(fields.len().to_string());
            }
            None => {
                record.push("error".to_string());
                record.extend(Field::ALL.iter().map(|_| String::new()));
                record.push("0".to_string());
            }
        }

        record.push(result.processing_time_ms.to_string());
        record.push(processed_at.clone());
        record.push(result.error.clone().unwrap_or_default());

        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}
