use crate::cli::commands::live::fetch_snapshot;
use crate::cli::commands::report::render;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::snapshot;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;

/// Handle the `fetch` command: fetch, optionally save, then render.
pub async fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Fetch {
        range,
        filter,
        view,
        table,
        save,
        force,
    } = &cli.command
    {
        let Some(snap) = fetch_snapshot(cfg, range, filter).await? else {
            return Ok(());
        };

        if let Some(file) = save {
            let path = expand_tilde(file);
            snapshot::save(&snap, &path, *force)?;
            success(format!("Snapshot saved: {}", path.display()));
        }

        render(&snap, *table, view);
    }
    Ok(())
}
