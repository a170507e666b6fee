use crate::models::driver::{Device, Driver, Group};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Group ids the platform creates for every database.
const SYSTEM_GROUP_IDS: [&str; 2] = ["GroupCompanyId", "GroupNothingId"];
const PLACEHOLDER_GROUP_NAMES: [&str; 2] = ["CompanyGroup", "**Nothing**"];

/// Read-only snapshot of drivers, groups and devices taken before a fetch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Foundation {
    pub drivers: Vec<Driver>,
    pub groups: BTreeMap<String, Group>,
    pub devices: BTreeMap<String, Device>,
}

impl Foundation {
    pub fn new(drivers: Vec<Driver>, groups: Vec<Group>, devices: Vec<Device>) -> Self {
        Self {
            drivers,
            groups: groups.into_iter().map(|g| (g.id.clone(), g)).collect(),
            devices: devices.into_iter().map(|d| (d.id.clone(), d)).collect(),
        }
    }

    /// Selectable groups sorted by name, system and placeholder groups removed.
    pub fn selectable_groups(&self) -> Vec<&Group> {
        let mut list: Vec<&Group> = self
            .groups
            .values()
            .filter(|g| !SYSTEM_GROUP_IDS.contains(&g.id.as_str()))
            .filter(|g| match g.name.as_deref() {
                Some(name) => !name.is_empty() && !PLACEHOLDER_GROUP_NAMES.contains(&name),
                None => false,
            })
            .collect();
        list.sort_by(|a, b| a.name.cmp(&b.name));
        list
    }

    /// Drivers sorted by "first last".
    pub fn sorted_drivers(&self) -> Vec<&Driver> {
        let mut list: Vec<&Driver> = self.drivers.iter().collect();
        list.sort_by_key(|d| d.full_name().to_lowercase());
        list
    }
}
