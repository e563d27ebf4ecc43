use crate::cli::commands::{load_snapshot, print_table};
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::{ReportKind, ReportTable};
use crate::errors::AppResult;
use crate::ui::messages::warning;

/// Handle the `convert` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let records = load_snapshot(cli, cfg)?;
    let table = ReportTable::build(ReportKind::Conversion, &records)?;

    if table.is_empty() {
        warning("No records found.");
        return Ok(());
    }

    print_table(&table, cfg);
    Ok(())
}
