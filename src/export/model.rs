use crate::models::{FleetRow, LogRow};
use crate::utils::{format_date, format_pct};
use serde::Serialize;

/// A serializable export row with a fixed column order.
pub trait ExportRecord: Serialize {
    const HEADERS: &'static [&'static str];
}

/// Fleet table as exported; field order is the column order.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetExport {
    pub driver_name: String,
    pub total: u32,
    pub verified: u32,
    pub unverified: u32,
    pub verified_pct: String,
}

impl ExportRecord for FleetExport {
    const HEADERS: &'static [&'static str] =
        &["driverName", "total", "verified", "unverified", "verifiedPct"];
}

impl From<&FleetRow> for FleetExport {
    fn from(r: &FleetRow) -> Self {
        Self {
            driver_name: r.driver_name.clone(),
            total: r.total,
            verified: r.verified,
            unverified: r.unverified,
            verified_pct: format_pct(r.verified_pct),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogExport {
    pub driver_name: String,
    pub date_time: String,
    pub status: String,
    pub verified_label: String,
    pub co_driver_name: String,
    pub hours: String,
    pub device: String,
    pub annotation: String,
}

impl ExportRecord for LogExport {
    const HEADERS: &'static [&'static str] = &[
        "driverName",
        "dateTime",
        "status",
        "verifiedLabel",
        "coDriverName",
        "hours",
        "device",
        "annotation",
    ];
}

impl From<&LogRow> for LogExport {
    fn from(r: &LogRow) -> Self {
        Self {
            driver_name: r.driver_name.clone(),
            date_time: format_date(r.date_time.as_deref()),
            status: r.status.clone(),
            verified_label: r.verified_label.clone(),
            co_driver_name: r.co_driver_name.clone(),
            hours: r.hours.clone(),
            device: r.device.clone(),
            annotation: r.annotation.clone(),
        }
    }
}
