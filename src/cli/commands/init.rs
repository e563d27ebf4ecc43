use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `init` command
///
/// Creates the config directory and the configuration file. In test mode
/// nothing is written, the resolved settings are only printed.
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Commands::Init { data_file } = &cli.command {
        let requested = data_file.clone().or_else(|| cli.data.clone());
        let cfg = Config::init_all(requested, cli.test)?;

        info("Initializing rTimeAudit…");
        if cli.test {
            info("Test mode: configuration file not written.");
        } else {
            success(format!("Config file: {}", Config::config_file().display()));
        }
        info(format!("Data file  : {}", cfg.data_file));

        if !cfg.data_path().exists() {
            warning("Data file does not exist yet; place the timekeeping CSV there or use --data.");
        }

        success("rTimeAudit initialization completed!");
    }
    Ok(())
}
