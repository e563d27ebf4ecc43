pub mod anomalies;
pub mod config;
pub mod convert;
pub mod export;
pub mod hours;
pub mod init;
pub mod positions;
pub mod summary;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::ReportTable;
use crate::errors::AppResult;
use crate::ingest;
use crate::models::TimeRecord;
use crate::ui::messages::header;
use crate::utils::path::expand_tilde;
use crate::utils::range::parse_optional_range;
use crate::utils::table::Table;

/// Load the record snapshot a report command works on: `--data` or the
/// configured file, narrowed by `--range`.
pub(crate) fn load_snapshot(cli: &Cli, cfg: &Config) -> AppResult<Vec<TimeRecord>> {
    let bounds = parse_optional_range(cli.range.as_deref())?;

    let path = match &cli.data {
        Some(p) => expand_tilde(p),
        None => cfg.data_path(),
    };

    let records = ingest::load_records(&path, cfg.delimiter)?;
    Ok(ingest::filter_by_end_date(records, bounds))
}

/// Print a report as a terminal table under its title.
pub(crate) fn print_table(table: &ReportTable, cfg: &Config) {
    print_rows(&table.title, &table.headers, table.rows.clone(), cfg);
}

pub(crate) fn print_rows(title: &str, headers: &[&str], rows: Vec<Vec<String>>, cfg: &Config) {
    header(title);

    let mut t = Table::from_headers(headers)
        .with_separator(&cfg.separator_char)
        .with_max_rows(cfg.max_rows);
    for row in rows {
        t.add_row(row);
    }

    print!("{}", t.render());
    println!();
}
