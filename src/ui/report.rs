//! Terminal rendering of the verification report.

use crate::core::FleetKpis;
use crate::models::{Driver, FleetRow, Group, LogRow};
use crate::ui::messages::{empty_state, header};
use crate::utils::colors::{
    color_for_optional_field, color_for_pct, color_for_unverified, color_for_verified, paint,
};
use crate::utils::format_pct;
use crate::utils::formatting::{bold, format_date_time};
use crate::utils::table::{Cell, Column, Table};

pub const NO_DATA: &str = "No data found for the selected filters.";
pub const LOAD_FAILED: &str = "Error loading data. Please try again.";

pub fn render_kpis(k: &FleetKpis) -> String {
    format!(
        "{}  {}   {}  {}   {}  {}",
        bold("Fleet verified:"),
        paint(&format_pct(k.fleet_pct), color_for_pct(k.fleet_pct)),
        bold("Unverified logs:"),
        paint(&k.total_unverified.to_string(), color_for_unverified(k.total_unverified)),
        bold("Drivers with unverified:"),
        k.drivers_with_unverified,
    )
}

pub fn fleet_table(rows: &[FleetRow]) -> Table {
    let mut t = Table::new(vec![
        Column::left("Driver Name"),
        Column::right("Total"),
        Column::right("Verified"),
        Column::right("Unverified"),
        Column::right("Verified %"),
    ]);
    for r in rows {
        t.add_row(vec![
            Cell::plain(&r.driver_name),
            Cell::plain(r.total.to_string()),
            Cell::plain(r.verified.to_string()),
            Cell::colored(r.unverified.to_string(), Some(color_for_unverified(r.unverified))),
            Cell::colored(format_pct(r.verified_pct), Some(color_for_pct(r.verified_pct))),
        ]);
    }
    t
}

pub fn logs_table(rows: &[LogRow]) -> Table {
    let mut t = Table::new(vec![
        Column::left("Driver"),
        Column::left("Date"),
        Column::left("Status"),
        Column::left("Verified"),
        Column::left("Co-Driver"),
        Column::right("Hours"),
        Column::left("Vehicle"),
        Column::left("Annotation"),
    ]);
    for r in rows {
        t.add_row(vec![
            Cell::plain(&r.driver_name),
            Cell::plain(format_date_time(r.date_time.as_deref())),
            Cell::plain(&r.status),
            Cell::colored(&r.verified_label, Some(color_for_verified(r.is_verified))),
            Cell::colored(&r.co_driver_name, color_for_optional_field(&r.co_driver_name)),
            Cell::colored(&r.hours, color_for_optional_field(&r.hours)),
            Cell::colored(&r.device, color_for_optional_field(&r.device)),
            Cell::colored(&r.annotation, color_for_optional_field(&r.annotation)),
        ]);
    }
    t
}

pub fn print_fleet(rows: &[FleetRow]) {
    header("Fleet Overview");
    println!("{}\n", render_kpis(&FleetKpis::from_rows(rows)));
    if rows.is_empty() {
        empty_state(NO_DATA);
    } else {
        print!("{}", fleet_table(rows).render());
    }
}

pub fn print_logs(rows: &[LogRow]) {
    header("Log Details");
    if rows.is_empty() {
        empty_state(NO_DATA);
    } else {
        print!("{}", logs_table(rows).render());
        println!("\n{} log(s)", rows.len());
    }
}

pub fn print_groups(groups: &[&Group]) {
    if groups.is_empty() {
        empty_state("No groups found.");
        return;
    }
    let mut t = Table::new(vec![Column::left("ID"), Column::left("Name")]);
    for g in groups {
        t.add_row(vec![
            Cell::plain(&g.id),
            Cell::plain(g.name.as_deref().unwrap_or_default()),
        ]);
    }
    print!("{}", t.render());
}

pub fn print_drivers(drivers: &[&Driver]) {
    if drivers.is_empty() {
        empty_state("No drivers found.");
        return;
    }
    let mut t = Table::new(vec![Column::left("ID"), Column::left("Name")]);
    for d in drivers {
        t.add_row(vec![Cell::plain(&d.id), Cell::plain(d.display_name())]);
    }
    print!("{}", t.render());
}
