use crate::core::lookup::{DriverDirectory, device_name};
use crate::models::log_row::verified_label;
use crate::models::{Device, Driver, DutyStatus, DutyStatusLog, LogRow};
use std::collections::BTreeMap;

/// One display row per log, each independent of the others.
pub fn build_log_rows(
    logs: &[DutyStatusLog],
    drivers: &[Driver],
    devices: &BTreeMap<String, Device>,
) -> Vec<LogRow> {
    let directory = DriverDirectory::new(drivers);
    logs.iter()
        .map(|log| to_row(log, &directory, devices))
        .collect()
}

fn to_row(log: &DutyStatusLog, directory: &DriverDirectory<'_>, devices: &BTreeMap<String, Device>) -> LogRow {
    let verified = log.is_verified();
    LogRow {
        id: log.id.clone(),
        driver_id: log.driver_id().unwrap_or_default().to_string(),
        driver_name: directory.name_of(log.driver_id()),
        date_time: log.date_time.clone().filter(|d| !d.is_empty()),
        status: DutyStatus::label_for(log.raw_status()),
        is_verified: verified,
        verified_label: verified_label(verified).to_string(),
        co_driver_id: log.co_driver_id().map(str::to_string),
        co_driver_name: directory.name_of(log.co_driver_id()),
        hours: log.hours_text(),
        device_id: log.device_id().map(str::to_string),
        device: device_name(devices, log.device_id()),
        annotation: log.annotation_text(),
    }
}
