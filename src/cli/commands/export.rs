use crate::cli::commands::live::fetch_snapshot;
use crate::cli::commands::report::{apply_filter, fleet_view, logs_view};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{TableKind, export_fleet, export_logs, snapshot};
use crate::utils::path::expand_tilde;
use std::path::PathBuf;

/// Handle the `export` command, from a snapshot or a live fetch.
pub async fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        snapshot: source,
        range,
        filter,
        view,
        table,
        format,
        file,
        force,
    } = &cli.command
    {
        let snap = match source {
            Some(f) => apply_filter(&snapshot::load(&expand_tilde(f))?, filter),
            None => match fetch_snapshot(cfg, range, filter).await? {
                Some(s) => s,
                None => return Ok(()),
            },
        };

        let path = match file {
            Some(f) => expand_tilde(f),
            None => PathBuf::from(table.default_file_name(*format)),
        };

        match table {
            TableKind::Fleet => export_fleet(&fleet_view(&snap, view), *format, &path, *force)?,
            TableKind::Logs => export_logs(&logs_view(&snap, view), *format, &path, *force)?,
        }
    }
    Ok(())
}
