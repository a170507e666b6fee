use crate::models::driver::EntityRef;
use crate::models::duty_status::DutyStatus;
use crate::utils::format_one_decimal;
use chrono::{DateTime, Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Verification timestamp the API uses for "never verified".
pub const NEVER_VERIFIED_PREFIX: &str = "0001-01-01";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// A duty-status log as returned by `Get DutyStatusLog`.
///
/// Fields the report does not look at are kept in `extra` so a saved
/// snapshot round-trips the payload unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DutyStatusLog {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver: Option<EntityRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub co_driver: Option<EntityRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<EntityRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duty_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verify_date_time: Option<String>,
    /// Seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elapsed_duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations: Option<Vec<Annotation>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DutyStatusLog {
    /// First non-empty of `status` and `dutyStatus`.
    pub fn raw_status(&self) -> Option<&str> {
        [self.status.as_deref(), self.duty_status.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
    }

    pub fn duty_status(&self) -> Option<DutyStatus> {
        self.raw_status().and_then(DutyStatus::parse)
    }

    pub fn driver_id(&self) -> Option<&str> {
        self.driver.as_ref().map(|r| r.id.as_str())
    }

    pub fn co_driver_id(&self) -> Option<&str> {
        self.co_driver.as_ref().map(|r| r.id.as_str())
    }

    pub fn device_id(&self) -> Option<&str> {
        self.device.as_ref().map(|r| r.id.as_str())
    }

    /// True only for a real verification timestamp.
    ///
    /// Absent, empty and `0001-01-01...` values all mean "never verified";
    /// any timestamp that parses to year 1 or earlier counts the same way.
    pub fn is_verified(&self) -> bool {
        let raw = match self.verify_date_time.as_deref().map(str::trim) {
            None | Some("") => return false,
            Some(raw) => raw,
        };
        if raw.starts_with(NEVER_VERIFIED_PREFIX) {
            return false;
        }
        match verification_year(raw) {
            Some(year) => year > 1,
            None => true,
        }
    }

    /// Annotation comments joined by "; ", else the single annotation, else "--".
    pub fn annotation_text(&self) -> String {
        match self.annotations.as_deref() {
            Some(list) if !list.is_empty() => list
                .iter()
                .map(|a| a.comment.as_deref().unwrap_or(""))
                .collect::<Vec<_>>()
                .join("; "),
            _ => match self.annotation.as_deref() {
                Some(a) if !a.is_empty() => a.to_string(),
                _ => "--".to_string(),
            },
        }
    }

    /// Elapsed hours with one decimal, "--" when the duration is unknown.
    pub fn hours_text(&self) -> String {
        match self.elapsed_duration {
            Some(secs) => format_one_decimal(secs / 3600.0),
            None => "--".to_string(),
        }
    }
}

fn verification_year(raw: &str) -> Option<i32> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.year());
    }
    raw.get(..10)
        .and_then(|day| NaiveDate::parse_from_str(day, "%Y-%m-%d").ok())
        .map(|d| d.year())
}
