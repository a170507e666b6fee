use serde::Serialize;
use std::fmt;

/// Duty statuses a driver can certify on a log.
///
/// Only these statuses are verifiable; anything else the API returns
/// (`Certify`, `Exemption`, `Login`, ...) is dropped by the fetch pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DutyStatus {
    Driving,
    OnDuty,
    OffDuty,
    SleeperBerth,
    PersonalConveyance,
    YardMove,
    WaitTime,
}

impl DutyStatus {
    pub const ALL: [DutyStatus; 7] = [
        DutyStatus::Driving,
        DutyStatus::OnDuty,
        DutyStatus::OffDuty,
        DutyStatus::SleeperBerth,
        DutyStatus::PersonalConveyance,
        DutyStatus::YardMove,
        DutyStatus::WaitTime,
    ];

    /// Short code or long-form synonym, case-insensitive.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_uppercase().as_str() {
            "D" | "DRIVING" => Some(Self::Driving),
            "ON" | "ONDUTY" | "ON DUTY" => Some(Self::OnDuty),
            "OFF" | "OFFDUTY" | "OFF DUTY" => Some(Self::OffDuty),
            "SB" | "SLEEPERBERTH" | "SLEEPER BERTH" => Some(Self::SleeperBerth),
            "PC" | "PERSONALCONVEYANCE" | "PERSONAL CONVEYANCE" => Some(Self::PersonalConveyance),
            "YM" | "YARDMOVE" | "YARD MOVE" => Some(Self::YardMove),
            "WT" | "WAITTIME" | "WAIT TIME" => Some(Self::WaitTime),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            DutyStatus::Driving => "D",
            DutyStatus::OnDuty => "ON",
            DutyStatus::OffDuty => "OFF",
            DutyStatus::SleeperBerth => "SB",
            DutyStatus::PersonalConveyance => "PC",
            DutyStatus::YardMove => "YM",
            DutyStatus::WaitTime => "WT",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DutyStatus::Driving => "Driving",
            DutyStatus::OnDuty => "On Duty",
            DutyStatus::OffDuty => "Off Duty",
            DutyStatus::SleeperBerth => "Sleeper Berth",
            DutyStatus::PersonalConveyance => "Personal Conveyance",
            DutyStatus::YardMove => "Yard Move",
            DutyStatus::WaitTime => "Wait Time",
        }
    }

    /// Display text for a raw status: known codes map to their name,
    /// unknown codes pass through verbatim, empty becomes "--".
    pub fn label_for(raw: Option<&str>) -> String {
        match raw {
            None | Some("") => "--".to_string(),
            Some(s) => Self::parse(s)
                .map(|st| st.display_name().to_string())
                .unwrap_or_else(|| s.to_string()),
        }
    }
}

impl fmt::Display for DutyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
