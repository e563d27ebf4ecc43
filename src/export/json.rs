use crate::core::ReportTable;
use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::fs;
use std::path::Path;

/// Pretty-printed array of typed rows.
pub(crate) fn export_json(table: &ReportTable, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json = serde_json::to_string_pretty(&table.json)?;
    fs::write(path, json)?;

    notify_export_success("JSON", path);
    Ok(())
}
