use crate::cli::commands::{load_snapshot, print_table};
use crate::cli::parser::{AnomalyKind, Cli, Commands};
use crate::config::Config;
use crate::core::anomaly::total_period_count;
use crate::core::{ReportKind, ReportTable};
use crate::errors::AppResult;
use crate::models::TimeRecord;
use crate::ui::messages::{info, success, warning};

/// Handle the `anomalies` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Anomalies { kind } = &cli.command {
        let records = load_snapshot(cli, cfg)?;

        if matches!(kind, AnomalyKind::BreakTime | AnomalyKind::All) {
            break_time(&records, cfg)?;
        }
        if matches!(kind, AnomalyKind::PayPeriods | AnomalyKind::All) {
            pay_periods(&records, cfg)?;
        }
    }
    Ok(())
}

fn break_time(records: &[TimeRecord], cfg: &Config) -> AppResult<()> {
    let table = ReportTable::build(ReportKind::MissingBreakTime, records)?;

    if table.is_empty() {
        success("No records with missing break time found.");
        return Ok(());
    }

    warning(format!(
        "{} record(s) with missing break time (salaried excluded).",
        table.rows.len()
    ));
    print_table(&table, cfg);
    Ok(())
}

fn pay_periods(records: &[TimeRecord], cfg: &Config) -> AppResult<()> {
    let table = ReportTable::build(ReportKind::MissingPayPeriods, records)?;

    info(format!(
        "Pay periods in dataset: {}",
        total_period_count(records)
    ));

    if table.is_empty() {
        success("No employees with missing pay periods found.");
        return Ok(());
    }

    warning(format!(
        "{} record(s) belong to employees with missing pay periods.",
        table.rows.len()
    ));
    print_table(&table, cfg);
    Ok(())
}
