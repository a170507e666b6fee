// src/export/mod.rs

mod fs_utils;
mod json_csv;
mod model;
pub mod snapshot;

pub use fs_utils::ensure_writable;
pub use json_csv::{write_csv, write_json};
pub use model::{ExportRecord, FleetExport, LogExport};

use crate::errors::AppResult;
use crate::models::{FleetRow, LogRow};
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for exports.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Which of the two report tables to export.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TableKind {
    Fleet,
    Logs,
}

impl TableKind {
    /// File name used when `--file` is not given.
    pub fn default_file_name(&self, format: ExportFormat) -> String {
        let stem = match self {
            TableKind::Fleet => "driver_log_verification_fleet",
            TableKind::Logs => "driver_log_verification_logs",
        };
        format!("{stem}.{}", format.as_str())
    }
}

pub fn export_fleet(rows: &[FleetRow], format: ExportFormat, path: &Path, force: bool) -> AppResult<()> {
    let records: Vec<FleetExport> = rows.iter().map(FleetExport::from).collect();
    export_records(&records, format, path, force)
}

pub fn export_logs(rows: &[LogRow], format: ExportFormat, path: &Path, force: bool) -> AppResult<()> {
    let records: Vec<LogExport> = rows.iter().map(LogExport::from).collect();
    export_records(&records, format, path, force)
}

fn export_records<T: ExportRecord>(
    records: &[T],
    format: ExportFormat,
    path: &Path,
    force: bool,
) -> AppResult<()> {
    ensure_writable(path, force)?;
    match format {
        ExportFormat::Csv => json_csv::export_csv(records, path)?,
        ExportFormat::Json => json_csv::export_json(records, path)?,
    }
    notify_export_success(&format.as_str().to_uppercase(), path);
    Ok(())
}
