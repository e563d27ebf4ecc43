use crate::cli::commands::{load_snapshot, print_rows};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::{ReportKind, ReportTable};
use crate::errors::AppResult;
use crate::ui::messages::warning;
use crate::utils::colors::{RESET, color_for_ot_percent};

/// Handle the `summary` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { pay } = &cli.command {
        let records = load_snapshot(cli, cfg)?;

        if records.is_empty() {
            warning("No records found.");
            return Ok(());
        }

        let mut kinds = vec![ReportKind::SummaryHours];
        if *pay {
            kinds.push(ReportKind::SummaryPay);
        }

        for kind in kinds {
            let table = ReportTable::build(kind, &records)?;
            let rows = table.rows.into_iter().map(colorize_percent).collect();
            print_rows(&table.title, &table.headers, rows, cfg);
        }
    }
    Ok(())
}

/// The overtime share is the last column of both summary views.
fn colorize_percent(mut row: Vec<String>) -> Vec<String> {
    if let Some(last) = row.last_mut()
        && let Ok(p) = last.parse::<f64>()
    {
        *last = format!("{}{}{}", color_for_ot_percent(p), last, RESET);
    }
    row
}
