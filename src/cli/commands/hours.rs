use crate::cli::commands::{load_snapshot, print_table};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::hours::average_hours;
use crate::core::{ReportKind, ReportTable};
use crate::errors::AppResult;
use crate::ui::messages::warning;
use crate::utils::chart::BarChart;
use crate::utils::formatting::fmt_date;

/// Handle the `hours` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Hours { chart } = &cli.command {
        let records = load_snapshot(cli, cfg)?;
        let table = ReportTable::build(ReportKind::Hours, &records)?;

        if table.is_empty() {
            warning("No records found.");
            return Ok(());
        }

        print_table(&table, cfg);

        if *chart {
            // regular part first, overtime stacked on top
            let mut bars = BarChart::new("Average Pay Period Hours (regular + OT)", cfg.chart_width);
            for h in average_hours(&records) {
                let regular = (h.avg_total_hours - h.avg_overtime_hours).max(0.0);
                let note = h.ot_percent.map(|p| format!("{:.1}% OT", p));
                bars.add_stacked(fmt_date(&h.end_date), regular, h.avg_overtime_hours, note);
            }
            println!("{}", bars.render());
        }
    }
    Ok(())
}
