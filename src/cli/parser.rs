use crate::core::ReportKind;
use crate::export::ExportFormat;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};

/// Command-line interface definition for rTimeAudit
/// CLI application to audit timekeeping CSV exports
#[derive(Parser)]
#[command(
    name = "rtimeaudit",
    version = env!("CARGO_PKG_VERSION"),
    about = "Audit employee timekeeping CSV exports: hours, store summaries and missing-data reports",
    long_about = None
)]
pub struct Cli {
    /// Override the timekeeping CSV path from the configuration
    #[arg(global = true, long = "data", value_name = "FILE")]
    pub data: Option<String>,

    /// Keep only pay periods ending in the given range.
    ///
    /// Supported formats: YYYY, YYYY-MM, YYYY-MM-DD, or `start:end` with both
    /// sides in the same format (e.g. "2024-01:2024-03"). `all` disables
    /// the filter.
    #[arg(global = true, long = "range", value_name = "RANGE")]
    pub range: Option<String>,

    /// Diagnostic output on stderr (-v debug, -vv trace)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum AnomalyKind {
    BreakTime,
    PayPeriods,
    All,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file
    Init {
        #[arg(
            long = "data-file",
            value_name = "FILE",
            help = "Default timekeeping CSV (relative paths live in the config directory)"
        )]
        data_file: Option<String>,
    },

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show the payroll conversion table (Key, regular and overtime hours)
    Convert,

    /// Average hours worked by all employees per pay period
    Hours {
        #[arg(long, help = "Also draw a stacked bar chart")]
        chart: bool,
    },

    /// Per-store totals of hours (and pay)
    Summary {
        #[arg(long, help = "Also show the pay summary")]
        pay: bool,
    },

    /// Number of employees per position per store
    Positions {
        #[arg(long, help = "Draw one bar chart per position")]
        chart: bool,
    },

    /// Missing-data reports (break time, pay periods)
    Anomalies {
        #[arg(long, value_enum, default_value = "all")]
        kind: AnomalyKind,
    },

    /// Export a report to a file
    Export {
        #[arg(long, value_enum)]
        report: ReportKind,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Output file (absolute path)")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite output file without confirmation")]
        force: bool,
    },
}
