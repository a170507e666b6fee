use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveDate};

/// Parses a `YYYY-MM-DD` day.
pub fn parse_day(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::InvalidDate(format!("'{s}' (expected YYYY-MM-DD)")))
}

/// Parses an ISO-8601 timestamp as sent by the server.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Local>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Local))
}
