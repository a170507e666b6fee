use serde::{Deserialize, Serialize};

/// Per-driver verification summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetRow {
    pub driver_id: String,
    pub driver_name: String,
    pub total: u32,
    pub verified: u32,
    pub unverified: u32,
    pub verified_pct: f64,
}

impl FleetRow {
    pub fn new(driver_id: impl Into<String>, driver_name: impl Into<String>) -> Self {
        Self {
            driver_id: driver_id.into(),
            driver_name: driver_name.into(),
            total: 0,
            verified: 0,
            unverified: 0,
            verified_pct: 0.0,
        }
    }

    pub fn record(&mut self, verified: bool) {
        self.total += 1;
        if verified {
            self.verified += 1;
        } else {
            self.unverified += 1;
        }
    }

    pub fn finalize(&mut self) {
        self.verified_pct = if self.total > 0 {
            f64::from(self.verified) / f64::from(self.total) * 100.0
        } else {
            0.0
        };
    }
}
