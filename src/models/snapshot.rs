use crate::core::selection::DriverFilter;
use crate::core::{build_fleet_summary, build_log_rows};
use crate::models::{DateRange, DutyStatusLog, FleetRow, Foundation, LogRow};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Result of one completed fetch, saved so reports can be re-rendered offline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub range: DateRange,
    pub foundation: Foundation,
    pub logs: Vec<DutyStatusLog>,
}

impl Snapshot {
    pub fn fleet_rows(&self) -> Vec<FleetRow> {
        build_fleet_summary(&self.logs, &self.foundation.drivers)
    }

    pub fn log_rows(&self) -> Vec<LogRow> {
        build_log_rows(
            &self.logs,
            &self.foundation.drivers,
            &self.foundation.devices,
        )
    }

    /// Narrows the logs to the drivers `filter` selects. The foundation is
    /// kept whole so co-drivers still resolve to names.
    pub fn select(&self, filter: &DriverFilter) -> Snapshot {
        if filter.group.is_none() && filter.driver.is_none() {
            return self.clone();
        }
        let selected = filter.apply(&self.foundation.drivers);
        let ids: HashSet<&str> = selected.iter().map(|d| d.id.as_str()).collect();
        Snapshot {
            range: self.range,
            foundation: self.foundation.clone(),
            logs: self
                .logs
                .iter()
                .filter(|l| l.driver_id().is_some_and(|id| ids.contains(id)))
                .cloned()
                .collect(),
        }
    }
}
