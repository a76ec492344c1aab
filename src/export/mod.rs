//! History export (CSV for spreadsheets, JSON for tooling).

mod csv;
pub(crate) mod fs_utils;
mod json;

use crate::errors::AppResult;
use crate::models::WorkDayRecord;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

pub use self::csv::CSV_HEADERS;
pub use fs_utils::ensure_writable;

pub(crate) fn notify_export_success(label: &str, path: &Path, rows: usize) {
    success(format!("{label} export completed ({rows} rows): {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
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

/// Write `records` to `path` in the requested format, keeping their order.
pub fn write(path: &Path, format: &ExportFormat, records: &[&WorkDayRecord]) -> AppResult<()> {
    match format {
        ExportFormat::Csv => csv::write_csv(path, records),
        ExportFormat::Json => json::write_json(path, records),
    }
}
