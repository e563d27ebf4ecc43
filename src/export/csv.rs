use crate::core::{Cell, ReportTable};
use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::path::Path;

/// Header row followed by the typed cells at full precision; absent values
/// are empty cells.
pub(crate) fn export_csv(table: &ReportTable, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = ::csv::Writer::from_path(path)?;

    wtr.write_record(&table.headers)?;
    for row in table.cells() {
        wtr.write_record(row.iter().map(Cell::to_string))?;
    }
    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
