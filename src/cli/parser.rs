use crate::config::Config;
use crate::core::range::Preset;
use crate::core::view::{FleetSortKey, LogSortKey, SortDirection, VerificationFilter};
use crate::export::{ExportFormat, TableKind};
use crate::utils::path::expand_tilde;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for dlverify
/// CLI application to check driver duty-status log verification on MyGeotab
#[derive(Parser)]
#[command(
    name = "dlverify",
    version = env!("CARGO_PKG_VERSION"),
    about = "Summarize MyGeotab driver duty-status logs by verification state",
    long_about = None
)]
pub struct Cli {
    /// Use this configuration file instead of the standard one
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Print diagnostic logging to stderr
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        match &self.config {
            Some(p) => expand_tilde(p),
            None => Config::config_file(),
        }
    }
}

/// Date range of a live fetch.
#[derive(Args, Debug, Clone, Default)]
pub struct RangeArgs {
    /// Date range preset (default: `default_preset` from the config)
    #[arg(long, value_enum)]
    pub preset: Option<Preset>,

    /// First day (YYYY-MM-DD); implies --preset custom
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub from: Option<String>,

    /// Last day, inclusive (YYYY-MM-DD); implies --preset custom
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub to: Option<String>,
}

/// Which drivers to report on.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Only drivers in this group id ("all" for every group)
    #[arg(long, value_name = "GROUP_ID")]
    pub group: Option<String>,

    /// Only this driver id; wins over --group
    #[arg(long, value_name = "DRIVER_ID")]
    pub driver: Option<String>,
}

/// Sorting, filtering and search of the report tables.
#[derive(Args, Debug, Clone)]
pub struct ViewArgs {
    #[arg(long, value_enum, default_value = "unverified", help = "Fleet table sort column")]
    pub fleet_sort: FleetSortKey,

    #[arg(long, value_enum, default_value = "desc")]
    pub fleet_order: SortDirection,

    #[arg(long, value_enum, default_value = "dateTime", help = "Log table sort column")]
    pub log_sort: LogSortKey,

    #[arg(long, value_enum, default_value = "desc")]
    pub log_order: SortDirection,

    /// Show only verified or unverified logs
    #[arg(long, value_enum, default_value = "all")]
    pub status: VerificationFilter,

    /// Case-insensitive search over driver, status, vehicle, annotation, co-driver
    #[arg(long, value_name = "TEXT")]
    pub search: Option<String>,
}

impl Default for ViewArgs {
    fn default() -> Self {
        Self {
            fleet_sort: FleetSortKey::Unverified,
            fleet_order: SortDirection::Desc,
            log_sort: LogSortKey::DateTime,
            log_order: SortDirection::Desc,
            status: VerificationFilter::All,
            search: None,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a default configuration file
    Init {
        #[arg(long, help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

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

    /// Fetch duty-status logs from MyGeotab and show the report
    Fetch {
        #[command(flatten)]
        range: RangeArgs,

        #[command(flatten)]
        filter: FilterArgs,

        #[command(flatten)]
        view: ViewArgs,

        /// Show only one table (default: both)
        #[arg(long, value_enum)]
        table: Option<TableKind>,

        /// Save the fetched data as a snapshot for offline reports
        #[arg(long, value_name = "FILE")]
        save: Option<String>,

        #[arg(long, help = "Overwrite an existing snapshot file")]
        force: bool,
    },

    /// Show the report from a saved snapshot
    Report {
        #[arg(long, value_name = "FILE")]
        snapshot: String,

        #[command(flatten)]
        filter: FilterArgs,

        #[command(flatten)]
        view: ViewArgs,

        /// Show only one table (default: both)
        #[arg(long, value_enum)]
        table: Option<TableKind>,
    },

    /// Export the fleet or log table
    Export {
        /// Export from a snapshot instead of fetching
        #[arg(long, value_name = "FILE")]
        snapshot: Option<String>,

        #[command(flatten)]
        range: RangeArgs,

        #[command(flatten)]
        filter: FilterArgs,

        #[command(flatten)]
        view: ViewArgs,

        #[arg(long, value_enum, default_value = "fleet")]
        table: TableKind,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file (default: driver_log_verification_<table>.<format>)
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        #[arg(long, help = "Overwrite the output file if it exists")]
        force: bool,
    },

    /// List drivers, sorted by name
    Drivers {
        /// Read drivers from a snapshot instead of the server
        #[arg(long, value_name = "FILE")]
        snapshot: Option<String>,

        /// Only drivers in this group id
        #[arg(long, value_name = "GROUP_ID")]
        group: Option<String>,
    },

    /// List selectable groups, sorted by name
    Groups {
        /// Read groups from a snapshot instead of the server
        #[arg(long, value_name = "FILE")]
        snapshot: Option<String>,
    },
}
