use crate::models::FleetRow;

/// Headline numbers shown above the fleet table.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FleetKpis {
    pub total_logs: u32,
    pub total_verified: u32,
    pub total_unverified: u32,
    pub drivers_with_unverified: usize,
    pub fleet_pct: f64,
}

impl FleetKpis {
    pub fn from_rows(rows: &[FleetRow]) -> Self {
        let mut k = FleetKpis::default();
        for r in rows {
            k.total_logs += r.total;
            k.total_verified += r.verified;
            k.total_unverified += r.unverified;
            if r.unverified > 0 {
                k.drivers_with_unverified += 1;
            }
        }
        k.fleet_pct = if k.total_logs > 0 {
            f64::from(k.total_verified) / f64::from(k.total_logs) * 100.0
        } else {
            0.0
        };
        k
    }

    pub fn fully_verified(&self) -> bool {
        self.fleet_pct >= 100.0
    }
}
