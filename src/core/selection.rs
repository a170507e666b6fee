use crate::models::Driver;

/// Which drivers a report covers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriverFilter {
    pub group: Option<String>,
    pub driver: Option<String>,
}

impl DriverFilter {
    pub fn new(group: Option<String>, driver: Option<String>) -> Self {
        // "all" means no filter
        let keep = |v: Option<String>| v.filter(|s| !s.is_empty() && !s.eq_ignore_ascii_case("all"));
        Self {
            group: keep(group),
            driver: keep(driver),
        }
    }

    /// A specific driver wins over the group filter.
    pub fn apply(&self, drivers: &[Driver]) -> Vec<Driver> {
        if let Some(id) = &self.driver {
            return drivers.iter().filter(|d| &d.id == id).cloned().collect();
        }
        match &self.group {
            Some(group) => drivers.iter().filter(|d| d.in_group(group)).cloned().collect(),
            None => drivers.to_vec(),
        }
    }

    /// Reason shown when the filter leaves nobody to report on.
    pub fn empty_reason(&self) -> String {
        match (&self.driver, &self.group) {
            (Some(d), _) => format!("No driver with id '{d}'."),
            (None, Some(g)) => format!("No drivers in group '{g}'."),
            (None, None) => "No drivers found.".to_string(),
        }
    }
}
