//! Shared path of every command that talks to the server.

use crate::cli::parser::{FilterArgs, RangeArgs};
use crate::config::Config;
use crate::core::{
    DriverFilter, FetchOutcome, Interrupt, LogFetcher, Preset, load_foundation, resolve_range,
};
use crate::errors::AppResult;
use crate::geotab::GeotabClient;
use crate::models::{Foundation, Snapshot};
use crate::ui::messages::{empty_state, error, info, progress, progress_done, warning};
use crate::ui::report::LOAD_FAILED;
use chrono::Local;
use tracing::debug;

pub(crate) async fn connect(cfg: &Config) -> AppResult<(GeotabClient, Foundation)> {
    let client = GeotabClient::connect(cfg).await?;
    debug!(endpoint = client.endpoint(), "connected");
    let foundation = load_foundation(&client, cfg.foundation_limit).await?;
    Ok((client, foundation))
}

fn pick_preset(cfg: &Config, range: &RangeArgs) -> AppResult<Preset> {
    match range.preset {
        Some(p) => Ok(p),
        None if range.from.is_some() || range.to.is_some() => Ok(Preset::Custom),
        None => cfg.preset(),
    }
}

/// Runs a full fetch. `None` means there is nothing to render: either the
/// selection was empty or the user cancelled.
pub(crate) async fn fetch_snapshot(
    cfg: &Config,
    range: &RangeArgs,
    filter: &FilterArgs,
) -> AppResult<Option<Snapshot>> {
    let settings = cfg.fetch_settings()?;
    let preset = pick_preset(cfg, range)?;
    let date_range = resolve_range(
        preset,
        range.from.as_deref(),
        range.to.as_deref(),
        &Local::now(),
    )?;

    let (client, foundation) = connect(cfg).await?;

    let selection = DriverFilter::new(filter.group.clone(), filter.driver.clone());
    let drivers = selection.apply(&foundation.drivers);
    if drivers.is_empty() {
        empty_state(selection.empty_reason());
        return Ok(None);
    }
    info(format!("{} drivers selected", drivers.len()));

    let fetcher = LogFetcher::new(client, settings);
    let controller = fetcher.controller();
    let watcher = tokio::spawn(async move {
        while tokio::signal::ctrl_c().await.is_ok() {
            match controller.interrupt() {
                Interrupt::Cancel => {
                    progress_done();
                    warning("Cancelling... press Ctrl+C again to quit now.");
                }
                Interrupt::Exit => {
                    progress_done();
                    std::process::exit(130);
                }
            }
        }
    });

    let outcome = fetcher
        .fetch(&drivers, &date_range, |p| progress(&p.text))
        .await;
    watcher.abort();
    progress_done();

    // main prints the cause below this line
    let outcome = outcome.inspect_err(|_| error(LOAD_FAILED))?;

    match outcome {
        FetchOutcome::Cancelled => {
            warning("Fetch cancelled; nothing to show.");
            Ok(None)
        }
        FetchOutcome::Completed(logs) => Ok(Some(Snapshot {
            range: date_range,
            foundation,
            logs,
        })),
    }
}
