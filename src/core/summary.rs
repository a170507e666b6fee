use crate::core::lookup::DriverDirectory;
use crate::models::{Driver, DutyStatusLog, FleetRow};
use std::collections::HashMap;

/// Folds logs into one row per driver.
///
/// Logs without a driver are ignored; drivers without logs get no row. Rows
/// come out in first-seen order, which callers are free to re-sort.
pub fn build_fleet_summary(logs: &[DutyStatusLog], drivers: &[Driver]) -> Vec<FleetRow> {
    let directory = DriverDirectory::new(drivers);
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut rows: Vec<FleetRow> = Vec::new();

    for log in logs {
        let Some(driver_id) = log.driver_id().filter(|id| !id.is_empty()) else {
            continue;
        };
        let slot = *index.entry(driver_id).or_insert_with(|| {
            rows.push(FleetRow::new(driver_id, directory.name_of(Some(driver_id))));
            rows.len() - 1
        });
        rows[slot].record(log.is_verified());
    }

    for row in &mut rows {
        row.finalize();
    }
    rows
}
