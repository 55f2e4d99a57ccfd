//! Spreadsheet processing pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Configure**: Load the JSON config and apply CLI overrides
//! 2. **Ingest**: Decode the spreadsheet into a raw string matrix
//! 3. **Resolve**: Locate the header row and map logical fields to columns
//! 4. **Tally**: Classify every data row and fold the counted ones
//! 5. **Plan**: Derive the ordered export artifacts and report lines
//! 6. **Write**: Put the artifact files on disk (skipped on dry runs)
//!
//! Nothing is written before the whole plan is built, so a fatal error
//! never leaves a partial export behind.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Workbook, XlsxError};
use tracing::{debug, info, info_span};

use fieldpay_engine::{RowWarning, preview_stats, process_rows};
use fieldpay_export::plan_exports;
use fieldpay_ingest::read_sheet;
use fieldpay_map::resolve_headers;
use fieldpay_model::{Config, ExportArtifact, PayrunError, PreviewStats, SourceKey};

/// Inputs for one processing run, assembled from CLI arguments.
#[derive(Debug, Clone)]
pub struct ProcessOptions {
    /// Path to the completes spreadsheet.
    pub input: PathBuf,
    /// Optional JSON config file.
    pub config_path: Option<PathBuf>,
    /// Project code override (takes precedence over the config).
    pub project_code: Option<String>,
    /// Vendor CPI overrides as raw `(key, rate)` pairs.
    pub cpi_overrides: Vec<(String, f64)>,
    /// Output directory override (default: `<input dir>/export`).
    pub output_dir: Option<PathBuf>,
    /// Plan and report without writing files.
    pub dry_run: bool,
}

/// Everything the summary needs to describe one finished run.
#[derive(Debug)]
pub struct ProcessResult {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub config: Config,
    pub stats: PreviewStats,
    pub warnings: Vec<RowWarning>,
    pub report: Vec<String>,
    pub written: Vec<PathBuf>,
    pub dry_run: bool,
}

/// Run the full pipeline for one spreadsheet.
///
/// # Errors
///
/// Fails when the input cannot be decoded, the sheet is empty, no header
/// row is found, or an artifact file cannot be written.
pub fn process_spreadsheet(options: &ProcessOptions) -> Result<ProcessResult> {
    let config = effective_config(options)?;
    let output_dir = options
        .output_dir
        .clone()
        .unwrap_or_else(|| default_output_dir(&options.input));

    let ingest_span = info_span!("ingest", input = %options.input.display());
    let ingest_start = Instant::now();
    let sheet = ingest_span.in_scope(|| read_sheet(&options.input))?;
    if sheet.is_empty() {
        return Err(PayrunError::EmptyInput.into());
    }
    info!(
        row_count = sheet.len(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    let resolved = resolve_headers(sheet.rows(), &config.headers)?;
    debug!(
        header_row = resolved.header_row,
        mapped_fields = resolved.columns.mapped_count(),
        "header row resolved"
    );

    let tally_start = Instant::now();
    let tallies = process_rows(sheet.rows(), resolved.header_row, &resolved.columns);
    info!(
        complete = tallies.total_complete,
        skipped_blank = tallies.skipped_blank,
        incomplete = tallies.incomplete,
        disqualified = tallies.disqualified.len(),
        duration_ms = tally_start.elapsed().as_millis(),
        "classification complete"
    );

    let plan = plan_exports(sheet.rows(), &resolved.columns, &tallies, &config);
    let stats = preview_stats(&tallies, &config);

    let written = if options.dry_run {
        Vec::new()
    } else {
        write_artifacts(&output_dir, &plan.artifacts)?
    };

    Ok(ProcessResult {
        input: options.input.clone(),
        output_dir,
        config,
        stats,
        warnings: tallies.warnings,
        report: plan.report,
        written,
        dry_run: options.dry_run,
    })
}

/// Load the config and fold the CLI overrides into it.
///
/// Precedence for the project code: `--project-code`, then the config
/// file, then the leading digit run of the input file name.
///
/// # Errors
///
/// Fails when the config file cannot be read or parsed.
pub fn effective_config(options: &ProcessOptions) -> Result<Config> {
    let mut config = load_config(options.config_path.as_deref())?;
    if let Some(code) = &options.project_code {
        config.project_code = code.clone();
    }
    for (key, rate) in &options.cpi_overrides {
        config.vendor_cpis.insert(SourceKey::from_raw(key), *rate);
    }
    if config.project_code.trim().is_empty() {
        config.project_code = detect_project_code(&options.input);
    }
    Ok(config)
}

/// Read a JSON config file, or fall back to the defaults when no path
/// is given.
///
/// # Errors
///
/// Fails when the file cannot be read or is not valid config JSON.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let raw = fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let config =
        serde_json::from_str(&raw).with_context(|| format!("parse config {}", path.display()))?;
    Ok(config)
}

/// Leading digit run of the input file name, so `2501 - Wave 3.xlsx`
/// yields `2501`. Empty when the name does not start with a digit.
pub fn detect_project_code(input: &Path) -> String {
    let stem = input
        .file_stem()
        .and_then(|v| v.to_str())
        .unwrap_or_default();
    stem.chars().take_while(char::is_ascii_digit).collect()
}

/// Write every artifact into `output_dir`, creating it if needed.
///
/// Text and CSV artifacts carry their own payload bytes; tabular ones
/// are encoded as a single-worksheet workbook here.
///
/// # Errors
///
/// Fails when the directory or any file cannot be written.
pub fn write_artifacts(output_dir: &Path, artifacts: &[ExportArtifact]) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("create output dir {}", output_dir.display()))?;
    let mut written = Vec::with_capacity(artifacts.len());
    for artifact in artifacts {
        let path = output_dir.join(artifact.file_name());
        match artifact.to_bytes() {
            Some(bytes) => {
                fs::write(&path, bytes).with_context(|| format!("write {}", path.display()))?;
            }
            None => {
                write_worksheet_file(&path, artifact)
                    .with_context(|| format!("write {}", path.display()))?;
            }
        }
        debug!(path = %path.display(), rows = artifact.row_count(), "artifact written");
        written.push(path);
    }
    Ok(written)
}

fn write_worksheet_file(path: &Path, artifact: &ExportArtifact) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Sheet1")?;
    for (col, label) in artifact.header.iter().enumerate() {
        sheet.write_string(0, col as u16, label)?;
    }
    for (row, cells) in artifact.rows.iter().enumerate() {
        for (col, value) in cells.iter().enumerate() {
            sheet.write_string(row as u32 + 1, col as u16, value)?;
        }
    }
    workbook.save(path)
}

fn default_output_dir(input: &Path) -> PathBuf {
    match input.parent() {
        Some(dir) => dir.join("export"),
        None => PathBuf::from("export"),
    }
}
