use crate::cli::parser::{Cli, Commands, FilterArgs, ViewArgs};
use crate::core::DriverFilter;
use crate::core::view::{filter_logs, sort_fleet, sort_logs};
use crate::errors::AppResult;
use crate::export::{TableKind, snapshot};
use crate::models::{FleetRow, LogRow, Snapshot};
use crate::ui::messages::info;
use crate::ui::report::{print_fleet, print_logs};
use crate::utils::path::expand_tilde;

/// Handle the `report` command: render a saved snapshot.
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Commands::Report {
        snapshot: file,
        filter,
        view,
        table,
    } = &cli.command
    {
        let snap = snapshot::load(&expand_tilde(file))?;
        let snap = apply_filter(&snap, filter);
        render(&snap, *table, view);
    }
    Ok(())
}

pub(crate) fn apply_filter(snap: &Snapshot, filter: &FilterArgs) -> Snapshot {
    snap.select(&DriverFilter::new(filter.group.clone(), filter.driver.clone()))
}

pub(crate) fn fleet_view(snap: &Snapshot, view: &ViewArgs) -> Vec<FleetRow> {
    let mut rows = snap.fleet_rows();
    sort_fleet(&mut rows, view.fleet_sort, view.fleet_order);
    rows
}

pub(crate) fn logs_view(snap: &Snapshot, view: &ViewArgs) -> Vec<LogRow> {
    let mut rows = filter_logs(snap.log_rows(), view.status, view.search.as_deref());
    sort_logs(&mut rows, view.log_sort, view.log_order);
    rows
}

pub(crate) fn render(snap: &Snapshot, table: Option<TableKind>, view: &ViewArgs) {
    info(format!(
        "Range: {} → {}",
        snap.range.from().format("%Y-%m-%d %H:%M UTC"),
        snap.range.to().format("%Y-%m-%d %H:%M UTC")
    ));

    if table != Some(TableKind::Logs) {
        print_fleet(&fleet_view(snap, view));
        println!();
    }
    if table != Some(TableKind::Fleet) {
        print_logs(&logs_view(snap, view));
    }
}
