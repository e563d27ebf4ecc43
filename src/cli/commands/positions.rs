use crate::cli::commands::{load_snapshot, print_table};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::positions::position_counts;
use crate::core::{ReportKind, ReportTable};
use crate::errors::AppResult;
use crate::ui::messages::{header, warning};
use crate::utils::chart::BarChart;

/// Handle the `positions` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Positions { chart } = &cli.command {
        let records = load_snapshot(cli, cfg)?;

        if records.is_empty() {
            warning("No records found.");
            return Ok(());
        }

        if *chart {
            header(ReportKind::Positions.title());
            for group in position_counts(&records) {
                let mut bars = BarChart::new(&group.description, cfg.chart_width);
                for (store, n) in &group.stores {
                    bars.add(store.clone(), *n as f64);
                }
                println!("{}", bars.render());
            }
        } else {
            let table = ReportTable::build(ReportKind::Positions, &records)?;
            print_table(&table, cfg);
        }
    }
    Ok(())
}
