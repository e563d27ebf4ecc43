// src/export/logic.rs

use crate::core::{ReportKind, ReportTable};
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::csv::export_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::export_json;
use crate::export::pdf::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::models::TimeRecord;
use crate::ui::messages::warning;
use std::path::Path;
use tracing::debug;

/// High-level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Compute `report` over `records` and write it to `file`.
    ///
    /// - `format`: csv | json | xlsx | pdf
    /// - `file`: absolute output path
    /// - `force`: overwrite without asking
    ///
    /// An empty report is still written, with a warning.
    pub fn export(
        records: &[TimeRecord],
        report: ReportKind,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        ensure_writable(path, force)?;

        let table = ReportTable::build(report, records)?;
        debug!(
            report = report.as_str(),
            format = format.as_str(),
            rows = table.rows.len(),
            "exporting report"
        );

        if table.is_empty() {
            warning(format!("Report '{}' is empty.", report.as_str()));
        }

        match format {
            ExportFormat::Csv => export_csv(&table, path),
            ExportFormat::Json => export_json(&table, path),
            ExportFormat::Xlsx => export_xlsx(&table, path),
            ExportFormat::Pdf => export_pdf(&table, path),
        }
    }
}
