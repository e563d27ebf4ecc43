use crate::cli::commands::load_snapshot;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

/// Handle the `export` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        report,
        format,
        file,
        force,
    } = &cli.command
    {
        let records = load_snapshot(cli, cfg)?;
        ExportLogic::export(&records, *report, *format, file, *force)?;
    }
    Ok(())
}
