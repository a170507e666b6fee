use crate::models::{Device, Driver};
use std::collections::{BTreeMap, HashMap};

/// Placeholder for a name that has nothing to resolve.
pub const MISSING: &str = "--";

/// Id-keyed view over the driver list. The first driver with a given id wins.
pub struct DriverDirectory<'a> {
    by_id: HashMap<&'a str, &'a Driver>,
}

impl<'a> DriverDirectory<'a> {
    pub fn new(drivers: &'a [Driver]) -> Self {
        let mut by_id = HashMap::with_capacity(drivers.len());
        for d in drivers {
            by_id.entry(d.id.as_str()).or_insert(d);
        }
        Self { by_id }
    }

    pub fn get(&self, id: &str) -> Option<&'a Driver> {
        self.by_id.get(id).copied()
    }

    /// Display name for `id`; unknown ids come back verbatim, no id is "--".
    pub fn name_of(&self, id: Option<&str>) -> String {
        match id {
            None | Some("") => MISSING.to_string(),
            Some(id) => self
                .get(id)
                .map(Driver::display_name)
                .unwrap_or_else(|| id.to_string()),
        }
    }
}

/// Device display name; unknown ids come back verbatim, no id is "--".
pub fn device_name(devices: &BTreeMap<String, Device>, id: Option<&str>) -> String {
    match id {
        None | Some("") => MISSING.to_string(),
        Some(id) => devices
            .get(id)
            .map(|d| d.display_name().to_string())
            .unwrap_or_else(|| id.to_string()),
    }
}
